use leptos::prelude::*;

use crate::content::{Glyph, Project, PROJECTS};
use crate::reveal::Direction;
use crate::style::{title_gradient, Tone};

use super::icon::Icon;
use super::reveal::Reveal;
use super::theme::use_theme;

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || {
            format!("py-20 relative overflow-hidden {}", theme.tone(Tone::SectionAlternate))
        }>
            <div class="relative z-10 max-w-6xl mx-auto px-4">
                <Reveal direction=Direction::Up delay=100 class="text-center mb-16">
                    <h2 class=move || {
                        format!("text-4xl md:text-5xl font-bold mb-6 {}", theme.tone(Tone::Heading))
                    }>
                        <span class=move || {
                            title_gradient(
                                theme.is_dark(),
                                ("from-cyan-400 to-purple-400", "from-blue-600 to-purple-600"),
                            )
                        }>"Projects"</span>
                    </h2>
                    <p class=move || {
                        format!("text-xl max-w-3xl mx-auto {}", theme.tone(Tone::Body))
                    }>"Building innovative solutions that make a real-world impact"</p>
                </Reveal>

                <Reveal direction=Direction::Left delay=300 class="max-w-4xl mx-auto space-y-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </Reveal>

                <Reveal direction=Direction::Up delay=600 class="mt-12 text-center">
                    <div class=move || {
                        format!(
                            "inline-flex items-center gap-3 px-8 py-4 rounded-full border {}",
                            theme.tone(Tone::Pill),
                        )
                    }>
                        <Icon
                            glyph=Glyph::Code
                            class=Signal::derive(move || format!("text-xl {}", theme.tone(Tone::Accent)))
                        />
                        <span class=move || theme.tone(Tone::Body)>"More exciting projects coming soon!"</span>
                    </div>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || {
            format!(
                "relative group p-8 rounded-2xl border transition-all duration-300 transform hover:scale-105 {} {}",
                theme.tone(Tone::Card),
                theme.tone(Tone::CardHover),
            )
        }>
            <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-6">
                <div class="flex items-center gap-4 mb-4 md:mb-0">
                    <div class=format!(
                        "p-4 rounded-xl text-white text-2xl bg-gradient-to-r {}",
                        project.color,
                    )>
                        <Icon glyph=project.glyph />
                    </div>
                    <div>
                        <h3 class=move || {
                            format!("text-2xl font-bold {}", theme.tone(Tone::Heading))
                        }>{project.title}</h3>
                        <p class=move || {
                            format!("font-medium {}", theme.tone(Tone::Accent))
                        }>{project.category}</p>
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 bg-green-400 rounded-full animate-pulse"></div>
                    <span class=move || {
                        format!("text-sm font-medium {}", theme.tone(Tone::Success))
                    }>{project.timeline}</span>
                </div>
            </div>

            <p class=move || {
                format!("text-lg leading-relaxed mb-6 {}", theme.tone(Tone::Body))
            }>{project.description}</p>

            <div class="mb-6">
                <h4 class=move || {
                    format!("text-lg font-semibold mb-3 {}", theme.tone(Tone::Heading))
                }>"Key Features:"</h4>
                <div class="grid md:grid-cols-2 gap-3">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="flex items-center gap-3">
                                    <div class=format!(
                                        "w-2 h-2 rounded-full bg-gradient-to-r {}",
                                        project.color,
                                    )></div>
                                    <span class=move || {
                                        format!("text-sm {}", theme.tone(Tone::Body))
                                    }>{*feature}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mb-6">
                <h4 class=move || {
                    format!("text-sm font-medium mb-3 {}", theme.tone(Tone::Muted))
                }>"Tech Stack:"</h4>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class=move || {
                                    format!(
                                        "px-3 py-1 text-xs rounded-full border transition-colors duration-200 {}",
                                        theme.tone(Tone::Chip),
                                    )
                                }>{*tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="flex gap-4">
                <button class=move || {
                    format!(
                        "flex items-center gap-2 px-6 py-3 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 {}",
                        theme.tone(Tone::PrimaryButton),
                    )
                }>
                    <Icon glyph=Glyph::ExternalLink />
                    <span>"View Project"</span>
                </button>
                <button class=move || {
                    format!(
                        "flex items-center gap-2 px-6 py-3 rounded-lg border font-semibold transition-all duration-300 transform hover:scale-105 {}",
                        theme.tone(Tone::SecondaryButton),
                    )
                }>
                    <Icon glyph=Glyph::GitHub />
                    <span>"Source Code"</span>
                </button>
            </div>

            <div class=format!(
                "absolute inset-0 pointer-events-none opacity-0 group-hover:opacity-10 bg-gradient-to-r {} rounded-2xl transition-opacity duration-300",
                project.color,
            )></div>
        </div>
    }
}
