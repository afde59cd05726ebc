use leptos::prelude::*;

use crate::content::{EducationEntry, Glyph, Progress, ACHIEVEMENTS, EDUCATION};
use crate::reveal::Direction;
use crate::style::{title_gradient, Tone};

use super::icon::Icon;
use super::reveal::Reveal;
use super::theme::use_theme;

#[component]
pub fn Education() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || {
            format!("py-20 relative overflow-hidden {}", theme.tone(Tone::SectionPrimary))
        }>
            <div class="relative z-10 max-w-6xl mx-auto px-4">
                <Reveal direction=Direction::Up delay=100 class="text-center mb-16">
                    <h2 class=move || {
                        format!("text-4xl md:text-5xl font-bold mb-6 {}", theme.tone(Tone::Heading))
                    }>
                        <span class=move || {
                            title_gradient(
                                theme.is_dark(),
                                ("from-purple-400 to-pink-400", "from-purple-600 to-pink-600"),
                            )
                        }>"Education"</span>
                    </h2>
                    <p class=move || {
                        format!("text-xl max-w-3xl mx-auto {}", theme.tone(Tone::Body))
                    }>
                        "Academic journey building strong foundations in computer science and technology"
                    </p>
                </Reveal>

                <Reveal direction=Direction::Left delay=300 class="relative">
                    <div class=move || {
                        format!(
                            "absolute top-1/2 left-0 right-0 h-1 transform -translate-y-1/2 rounded-full bg-gradient-to-r {}",
                            theme
                                .pick((
                                    "from-purple-500 via-cyan-500 to-green-500",
                                    "from-purple-500 via-blue-500 to-green-500",
                                )),
                        )
                    }></div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {EDUCATION
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                let delay = 500 + i as u32 * 200;
                                view! {
                                    <Reveal direction=Direction::Up delay=delay class="relative">
                                        <EducationCard entry />
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>

                <Reveal direction=Direction::Up delay=1100 class="mt-16 grid md:grid-cols-3 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .map(|achievement| {
                            view! {
                                <div class=move || {
                                    format!("text-center p-6 rounded-xl border {}", theme.tone(Tone::Card))
                                }>
                                    <div class=move || {
                                        format!("text-3xl font-bold mb-2 {}", theme.pick(achievement.color))
                                    }>{achievement.value}</div>
                                    <p class=move || {
                                        format!("text-sm {}", theme.tone(Tone::Body))
                                    }>{achievement.caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn EducationCard(entry: &'static EducationEntry) -> impl IntoView {
    let theme = use_theme();
    let is_current = entry.progress == Progress::Current;

    view! {
        <div class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 z-10">
            <div class=move || {
                format!(
                    "w-6 h-6 rounded-full bg-gradient-to-r {} border-4 {} {}",
                    entry.color,
                    theme.pick(("border-gray-900", "border-white")),
                    if is_current { "animate-pulse" } else { "" },
                )
            }></div>
        </div>

        <div class=move || {
            format!(
                "relative group mt-16 p-6 rounded-xl border transition-all duration-300 transform hover:scale-105 {} {}",
                theme.tone(Tone::Card),
                theme.tone(Tone::CardHover),
            )
        }>
            <div class="flex items-start justify-between mb-4">
                <div class=format!("p-3 rounded-lg text-white text-xl bg-gradient-to-r {}", entry.color)>
                    <Icon glyph=Glyph::GraduationCap />
                </div>
                <div class="text-right">
                    <div class=move || {
                        format!("flex items-center gap-2 text-sm {}", theme.tone(Tone::Muted))
                    }>
                        <Icon glyph=Glyph::Calendar />
                        <span>{entry.period}</span>
                    </div>
                    {is_current
                        .then(|| {
                            view! {
                                <div class="flex items-center gap-2 mt-1">
                                    <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                                    <span class=move || {
                                        format!("text-xs font-medium {}", theme.tone(Tone::Success))
                                    }>"Current"</span>
                                </div>
                            }
                        })}
                </div>
            </div>

            <div class="space-y-4">
                <div>
                    <h3 class=move || {
                        format!("text-lg font-bold mb-1 {}", theme.tone(Tone::Heading))
                    }>{entry.degree}</h3>
                    <p class=move || {
                        format!("font-medium {}", theme.tone(Tone::Accent))
                    }>{entry.field}</p>
                </div>
                <div class="space-y-2">
                    <div class=move || {
                        format!("flex items-center gap-2 text-sm {}", theme.tone(Tone::Body))
                    }>
                        <Icon glyph=Glyph::MapPin />
                        <span>{format!("{}, {}", entry.institution, entry.location)}</span>
                    </div>
                    <div class=move || {
                        format!("flex items-center gap-2 text-sm {}", theme.tone(Tone::Body))
                    }>
                        <Icon glyph=Glyph::Award />
                        <span class="font-medium">{entry.grade}</span>
                    </div>
                </div>
                <p class=move || {
                    format!("text-sm leading-relaxed {}", theme.tone(Tone::Body))
                }>{entry.description}</p>
                <div class="space-y-2">
                    <h4 class=move || {
                        format!("text-sm font-medium {}", theme.tone(Tone::Muted))
                    }>"Key Subjects:"</h4>
                    <div class="flex flex-wrap gap-2">
                        {entry
                            .shown_highlights()
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <span class=move || {
                                        format!(
                                            "px-2 py-1 text-xs rounded border transition-colors duration-200 {}",
                                            theme.tone(Tone::Chip),
                                        )
                                    }>{*highlight}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class=format!(
                "absolute inset-0 pointer-events-none opacity-0 group-hover:opacity-10 bg-gradient-to-r {} rounded-xl transition-opacity duration-300",
                entry.color,
            )></div>
        </div>
    }
}
