use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_timeout_fn, UseTimeoutFnReturn};

use crate::content::{Glyph, HERO_SKILLS, OWNER_NAME, RESUME_HREF, TAGLINE};
use crate::decor::{particles, PARTICLE_COUNT};
use crate::reveal::Direction;
use crate::style::Tone;
use crate::ticker::{Rotation, NAME_REVEAL_DELAY_MS, SKILL_ROTATION_INTERVAL_MS};

use super::icon::Icon;
use super::navigation::scroll_to_section;
use super::profile_picture::{PictureSize, ProfilePicture};
use super::reveal::Reveal;
use super::theme::use_theme;

const GLOWS_DARK: [&str; 3] = [
    "bg-[radial-gradient(circle_at_50%_50%,rgba(0,255,136,0.1),transparent_50%)]",
    "bg-[radial-gradient(circle_at_80%_20%,rgba(0,128,255,0.1),transparent_50%)]",
    "bg-[radial-gradient(circle_at_20%_80%,rgba(0,255,255,0.1),transparent_50%)]",
];

const GLOWS_LIGHT: [&str; 3] = [
    "bg-[radial-gradient(circle_at_50%_50%,rgba(59,130,246,0.1),transparent_50%)]",
    "bg-[radial-gradient(circle_at_80%_20%,rgba(147,51,234,0.1),transparent_50%)]",
    "bg-[radial-gradient(circle_at_20%_80%,rgba(16,185,129,0.1),transparent_50%)]",
];

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();

    let rotation = RwSignal::new(Rotation::new(HERO_SKILLS.len()));
    let _ = use_interval_fn(
        move || {
            rotation.update(|r| {
                r.advance();
            });
        },
        SKILL_ROTATION_INTERVAL_MS,
    );
    let current_skill = move || {
        rotation
            .with(|r| r.current(&HERO_SKILLS).copied())
            .unwrap_or_default()
    };

    let (name_visible, set_name_visible) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_name_visible.set(true), NAME_REVEAL_DELAY_MS);
    start(());

    view! {
        <div class=move || {
            format!(
                "min-h-screen relative overflow-hidden flex items-center justify-center {}",
                theme
                    .pick((
                        "bg-gradient-to-br from-gray-900 via-black to-gray-900",
                        "bg-gradient-to-br from-gray-50 via-white to-gray-100",
                    )),
            )
        }>
            <div class="absolute inset-0">
                {move || {
                    theme
                        .pick((GLOWS_DARK, GLOWS_LIGHT))
                        .into_iter()
                        .map(|glow| view! { <div class=format!("absolute inset-0 {glow}")></div> })
                        .collect_view()
                }}
            </div>

            <div class="absolute inset-0 overflow-hidden">
                {particles(PARTICLE_COUNT)
                    .into_iter()
                    .map(|particle| {
                        view! {
                            <div
                                class=move || {
                                    format!(
                                        "absolute w-1 h-1 rounded-full animate-float {}",
                                        theme.pick(("bg-cyan-400", "bg-blue-500")),
                                    )
                                }
                                style=particle.style()
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="relative z-10 text-center px-4 max-w-4xl mx-auto">
                <Reveal direction=Direction::Up delay=200>
                    <ProfilePicture size=PictureSize::Large class="mx-auto mb-6 w-fit" />
                </Reveal>

                <Reveal direction=Direction::Left delay=400>
                    <h1 class=move || {
                        let state = if name_visible.get() {
                            "opacity-100 translate-y-0"
                        } else {
                            "opacity-0 translate-y-10"
                        };
                        format!("text-5xl md:text-7xl font-bold mb-4 transition-all duration-1000 {state}")
                    }>
                        <span class=move || {
                            format!(
                                "bg-gradient-to-r bg-clip-text text-transparent animate-blink {}",
                                theme
                                    .pick((
                                        "from-cyan-400 via-blue-500 to-green-400",
                                        "from-blue-600 via-purple-600 to-green-600",
                                    )),
                            )
                        }>{OWNER_NAME}</span>
                    </h1>
                    <p class=move || {
                        format!("text-xl md:text-2xl mb-6 {}", theme.tone(Tone::Body))
                    }>{TAGLINE}</p>
                </Reveal>

                <Reveal direction=Direction::Right delay=600>
                    <div class=move || {
                        format!(
                            "text-2xl md:text-3xl font-mono h-12 flex items-center justify-center {}",
                            theme.tone(Tone::Success),
                        )
                    }>
                        <span class="mr-2">"~/"</span>
                        <span>{current_skill}</span>
                        <span class="animate-pulse">"|"</span>
                    </div>
                </Reveal>

                <Reveal direction=Direction::Up delay=800 class="mt-8 flex flex-wrap justify-center gap-4">
                    <a
                        href=RESUME_HREF
                        download="resume.pdf"
                        class=move || {
                            format!(
                                "group relative px-8 py-4 rounded-full font-semibold transition-all duration-300 transform hover:scale-105 hover:shadow-lg {}",
                                theme.tone(Tone::PrimaryButton),
                            )
                        }
                    >
                        <span class="flex items-center gap-2">
                            <Icon glyph=Glyph::Download />
                            "Download Resume"
                        </span>
                    </a>
                    <button
                        on:click=move |_| scroll_to_section("contact")
                        class=move || {
                            format!(
                                "group relative px-8 py-4 rounded-full font-semibold transition-all duration-300 transform hover:scale-105 hover:shadow-lg {}",
                                theme.tone(Tone::OutlineButton),
                            )
                        }
                    >
                        <span class="flex items-center gap-2">
                            <Icon glyph=Glyph::Chat />
                            "Let's Connect"
                        </span>
                    </button>
                </Reveal>
            </div>

            <Reveal
                direction=Direction::Up
                delay=1000
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2"
            >
                <button
                    on:click=move |_| scroll_to_section("about")
                    class="animate-bounce"
                    aria-label="Scroll to about"
                >
                    <Icon
                        glyph=Glyph::ChevronDown
                        class=Signal::derive(move || {
                            format!("text-3xl {}", theme.tone(Tone::Accent))
                        })
                    />
                </button>
            </Reveal>
        </div>
    }
}
