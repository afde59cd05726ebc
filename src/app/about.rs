use leptos::prelude::*;

use crate::content::{JOURNEY, PASSIONS, QUICK_STATS};
use crate::reveal::Direction;
use crate::style::{title_gradient, Tone};

use super::icon::Icon;
use super::profile_picture::{PictureSize, ProfilePicture};
use super::reveal::Reveal;
use super::theme::use_theme;

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();
    let card = move |extra: &'static str| {
        format!(
            "backdrop-blur-sm rounded-lg border transition-all duration-300 {extra} {}",
            theme.tone(Tone::Card)
        )
    };

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
                                ("from-cyan-400 to-blue-500", "from-blue-600 to-purple-600"),
                            )
                        }>"About Me"</span>
                    </h2>
                    <p class=move || {
                        format!("text-xl max-w-3xl mx-auto leading-relaxed {}", theme.tone(Tone::Body))
                    }>
                        "I'm a passionate Computer Science student with a deep fascination for DevOps automation, cloud technologies, and data science. My journey combines hands-on learning with practical exploration of cutting-edge technologies like Linux, Docker, and machine learning tools."
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-3 gap-12 items-start">
                    <Reveal
                        direction=Direction::Left
                        delay=200
                        class="lg:col-span-1 flex flex-col items-center"
                    >
                        <ProfilePicture size=PictureSize::Medium class="mb-6" />
                        <div class="space-y-3 text-center">
                            {QUICK_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class=move || card("p-3")>
                                            <div class=move || {
                                                let color = stat
                                                    .color
                                                    .unwrap_or_else(|| theme.tone(Tone::Accent));
                                                format!("font-bold text-lg {color}")
                                            }>{stat.value}</div>
                                            <div class=move || {
                                                format!("text-sm {}", theme.tone(Tone::Body))
                                            }>{stat.caption}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal direction=Direction::Right delay=400 class="lg:col-span-2 space-y-12">
                        <div class="space-y-6">
                            <h3 class=move || {
                                format!("text-2xl font-bold mb-8 {}", theme.tone(Tone::Accent))
                            }>"My Journey"</h3>
                            {JOURNEY
                                .iter()
                                .enumerate()
                                .map(|(i, milestone)| {
                                    let delay = 600 + i as u32 * 100;
                                    view! {
                                        <Reveal direction=Direction::Left delay=delay>
                                            <div class=move || {
                                                format!(
                                                    "group flex items-start space-x-4 p-4 {} {}",
                                                    card(""),
                                                    theme.pick(("hover:border-cyan-400/50", "hover:border-blue-400/50")),
                                                )
                                            }>
                                                <div class=move || {
                                                    format!(
                                                        "flex-shrink-0 w-12 h-12 rounded-full flex items-center justify-center text-white text-xl group-hover:scale-110 transition-transform duration-300 {}",
                                                        theme.tone(Tone::IconBadge),
                                                    )
                                                }>
                                                    <Icon glyph=milestone.glyph />
                                                </div>
                                                <div class="flex-1">
                                                    <h4 class=move || {
                                                        format!("font-semibold text-lg {}", theme.tone(Tone::Heading))
                                                    }>{milestone.title}</h4>
                                                    <p class="text-green-400 font-medium">{milestone.achievement}</p>
                                                    <p class=move || {
                                                        format!("text-sm mt-1 {}", theme.tone(Tone::Body))
                                                    }>{milestone.description}</p>
                                                </div>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="space-y-6">
                            <h3 class=move || {
                                format!("text-2xl font-bold mb-8 {}", theme.tone(Tone::Success))
                            }>"What Drives Me"</h3>
                            <div class="space-y-4">
                                {PASSIONS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, passion)| {
                                        let delay = 1000 + i as u32 * 100;
                                        view! {
                                            <Reveal direction=Direction::Right delay=delay>
                                                <div class=move || {
                                                    format!("group p-6 {} {}", card(""), passion.hover_border)
                                                }>
                                                    <div class="flex items-center space-x-3 mb-3">
                                                        <Icon
                                                            glyph=passion.glyph
                                                            class=format!("text-2xl {}", passion.glyph_color)
                                                        />
                                                        <h4 class=move || {
                                                            format!("font-semibold {}", theme.tone(Tone::Heading))
                                                        }>{passion.title}</h4>
                                                    </div>
                                                    <p class=move || {
                                                        format!("text-sm {}", theme.tone(Tone::Body))
                                                    }>{passion.body}</p>
                                                </div>
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </div>
    }
}
