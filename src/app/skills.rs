use leptos::prelude::*;

use crate::content::{SkillCategory, SKILL_CATEGORIES};
use crate::reveal::Direction;
use crate::style::{title_gradient, Tone};

use super::icon::Icon;
use super::reveal::Reveal;
use super::theme::use_theme;

/// `(category id, skill name)` of the skill under the pointer.
type HoveredSkill = RwSignal<Option<(&'static str, &'static str)>>;

#[component]
pub fn Skills() -> impl IntoView {
    let theme = use_theme();
    let hovered: HoveredSkill = RwSignal::new(None);

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
                                ("from-green-400 to-cyan-400", "from-green-600 to-blue-600"),
                            )
                        }>"Skills & Technologies"</span>
                    </h2>
                    <p class=move || {
                        format!("text-xl max-w-3xl mx-auto {}", theme.tone(Tone::Body))
                    }>"A comprehensive toolkit spanning multiple domains of modern technology"</p>
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| view! { <CategoryColumn category index=i hovered /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn CategoryColumn(
    category: &'static SkillCategory,
    index: usize,
    hovered: HoveredSkill,
) -> impl IntoView {
    let theme = use_theme();
    let base_delay = 200 + index as u32 * 150;
    let gradient = move || format!("bg-gradient-to-r {}", theme.pick(category.color));

    view! {
        <Reveal direction=Direction::Left delay=base_delay class="space-y-4">
            <div class="flex items-center gap-3 mb-6">
                <div class=move || format!("p-3 rounded-lg text-white text-lg {}", gradient())>
                    <Icon glyph=category.glyph />
                </div>
                <h3 class=move || {
                    format!("text-xl font-bold {}", theme.tone(Tone::Heading))
                }>{category.name}</h3>
            </div>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(j, skill)| {
                        let key = (category.id, skill.name);
                        let delay = base_delay + 200 + j as u32 * 100;
                        view! {
                            <Reveal direction=Direction::Right delay=delay>
                                <div
                                    on:mouseenter=move |_| hovered.set(Some(key))
                                    on:mouseleave=move |_| hovered.set(None)
                                    class=move || {
                                        format!(
                                            "group p-4 rounded-lg border transition-all duration-300 cursor-pointer {} {}",
                                            theme.tone(Tone::Card),
                                            theme.pick(("hover:border-cyan-400/50", "hover:border-blue-400/50")),
                                        )
                                    }
                                >
                                    <div class="flex items-center justify-between mb-2">
                                        <span class=move || {
                                            format!("font-medium {}", theme.tone(Tone::Heading))
                                        }>{skill.name}</span>
                                        <span class=move || {
                                            format!("font-semibold {}", theme.tone(Tone::Success))
                                        }>{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class=move || {
                                        format!("w-full rounded-full h-2 {}", theme.tone(Tone::SkillTrack))
                                    }>
                                        <div
                                            class=move || {
                                                format!(
                                                    "h-2 rounded-full transition-all duration-1000 ease-out {}",
                                                    gradient(),
                                                )
                                            }
                                            style=format!("width: {}%", skill.level)
                                        ></div>
                                    </div>
                                    <Show when=move || hovered.get() == Some(key)>
                                        <div class=move || {
                                            format!(
                                                "mt-3 p-3 rounded-lg text-sm transition-all duration-300 {}",
                                                theme.tone(Tone::Panel),
                                            )
                                        }>{skill.description}</div>
                                    </Show>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}
