use leptos::prelude::*;

use crate::content::{copyright_year, Glyph, OWNER_NAME, SOCIAL_LINKS};
use crate::reveal::Direction;
use crate::style::Tone;

use super::icon::Icon;
use super::reveal::Reveal;
use super::theme::use_theme;

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=move || {
            format!("border-t relative overflow-hidden z-10 {}", theme.tone(Tone::Footer))
        }>
            <div class="relative z-10 max-w-6xl mx-auto px-4 py-12">
                <Reveal direction=Direction::Up delay=100 class="flex justify-center mb-8">
                    <div class="flex flex-wrap gap-4 justify-center">
                        {SOCIAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, social)| {
                                let delay = 200 + i as u32 * 100;
                                view! {
                                    <Reveal direction=Direction::Up delay=delay>
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.name
                                            class=move || {
                                                format!(
                                                    "group block p-3 rounded-full border text-xl transition-all duration-300 transform hover:scale-110 {} {} {}",
                                                    theme.tone(Tone::Card),
                                                    theme.pick(("hover:border-cyan-400/50 hover:shadow-lg hover:shadow-cyan-500/20", "hover:border-blue-400/50 hover:shadow-lg hover:shadow-blue-500/20")),
                                                    theme.pick(social.hover),
                                                )
                                            }
                                        >
                                            <Icon glyph=social.glyph />
                                        </a>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>

                <Reveal direction=Direction::Up delay=800 class="text-center">
                    <div class="flex items-center justify-center gap-2 mb-4">
                        <span class=move || format!("text-sm {}", theme.tone(Tone::Body))>"Made with"</span>
                        <Icon glyph=Glyph::Heart class="text-red-400 animate-pulse" />
                        <span class=move || format!("text-sm {}", theme.tone(Tone::Body))>"by"</span>
                        <span class=move || {
                            format!("font-semibold text-sm {}", theme.tone(Tone::Accent))
                        }>{OWNER_NAME}</span>
                    </div>
                    <p class=move || format!("text-sm {}", theme.tone(Tone::Muted))>
                        {format!("© {} {OWNER_NAME}. All rights reserved.", copyright_year())}
                    </p>
                </Reveal>
            </div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class=move || {
                    format!(
                        "absolute -top-40 -right-40 w-80 h-80 rounded-full blur-3xl bg-gradient-to-br {}",
                        theme.pick(("from-cyan-500/10 to-blue-500/10", "from-blue-500/10 to-purple-500/10")),
                    )
                }></div>
                <div class=move || {
                    format!(
                        "absolute -bottom-40 -left-40 w-80 h-80 rounded-full blur-3xl bg-gradient-to-br {}",
                        theme.pick(("from-purple-500/10 to-pink-500/10", "from-green-500/10 to-teal-500/10")),
                    )
                }></div>
            </div>
        </footer>
    }
}
