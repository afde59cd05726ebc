use std::time::Duration;

use leptos::{either::Either, prelude::*};

use crate::content::{Glyph, CONTACT_CHANNELS};
use crate::forms::{ContactField, ContactState, CONTACT_SUBMIT_DELAY_MS};
use crate::reveal::Direction;
use crate::style::{title_gradient, Tone};

use super::icon::Icon;
use super::reveal::Reveal;
use super::theme::use_theme;

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let state = RwSignal::new(ContactState::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.try_update(|s| s.begin_submit()).unwrap_or(false) {
            set_timeout(
                move || {
                    state.try_update(|s| s.finish_submit());
                },
                Duration::from_millis(CONTACT_SUBMIT_DELAY_MS),
            );
        }
    };

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
                                ("from-cyan-400 to-green-400", "from-blue-600 to-green-600"),
                            )
                        }>"Let's Connect"</span>
                    </h2>
                    <p class=move || {
                        format!("text-xl max-w-3xl mx-auto {}", theme.tone(Tone::Body))
                    }>
                        "Ready to collaborate on exciting projects or discuss opportunities in DevOps and Data Science"
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal direction=Direction::Left delay=300 class="space-y-8">
                        <div>
                            <h3 class=move || {
                                format!("text-2xl font-bold mb-6 {}", theme.tone(Tone::Heading))
                            }>"Get in Touch"</h3>
                            <p class=move || format!("mb-8 {}", theme.tone(Tone::Body))>
                                "I'm always open to discussing new opportunities, collaborating on projects, or just having a conversation about technology and innovation."
                            </p>
                        </div>
                        <div class="space-y-4">
                            {CONTACT_CHANNELS
                                .iter()
                                .enumerate()
                                .map(|(i, channel)| {
                                    let delay = 500 + i as u32 * 100;
                                    view! {
                                        <Reveal direction=Direction::Left delay=delay>
                                            <a
                                                href=channel.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=move || {
                                                    format!(
                                                        "flex items-center gap-4 p-4 rounded-xl border transition-all duration-300 transform hover:scale-105 {} {}",
                                                        theme.tone(Tone::Card),
                                                        theme.tone(Tone::CardHover),
                                                    )
                                                }
                                            >
                                                <div class=format!(
                                                    "p-3 rounded-lg text-white text-xl bg-gradient-to-r {}",
                                                    channel.color,
                                                )>
                                                    <Icon glyph=channel.glyph />
                                                </div>
                                                <div>
                                                    <h4 class=move || {
                                                        format!("font-medium {}", theme.tone(Tone::Heading))
                                                    }>{channel.label}</h4>
                                                    <p class=move || {
                                                        format!("text-sm {}", theme.tone(Tone::Body))
                                                    }>{channel.value}</p>
                                                </div>
                                            </a>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal direction=Direction::Right delay=600>
                        <div class=move || format!("p-8 rounded-xl border {}", theme.tone(Tone::Card))>
                            <h3 class=move || {
                                format!("text-2xl font-bold mb-6 {}", theme.tone(Tone::Heading))
                            }>"Send a Message"</h3>
                            <form on:submit=submit class="space-y-6">
                                <ContactInput
                                    state
                                    field=ContactField::Name
                                    label="Your Name"
                                    glyph=Glyph::User
                                    input_type="text"
                                    placeholder="Enter your name"
                                />
                                <ContactInput
                                    state
                                    field=ContactField::Email
                                    label="Email Address"
                                    glyph=Glyph::Mail
                                    input_type="email"
                                    placeholder="Enter your email"
                                />
                                <ContactInput
                                    state
                                    field=ContactField::Message
                                    label="Message"
                                    glyph=Glyph::Chat
                                    placeholder="Tell me about your project or just say hello..."
                                    multiline=true
                                />
                                <button
                                    type="submit"
                                    disabled=move || state.with(|s| s.is_submitting())
                                    class=move || {
                                        format!(
                                            "w-full py-4 px-6 rounded-lg font-semibold transition-all duration-300 transform hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed disabled:transform-none focus:outline-none hover:shadow-lg {}",
                                            theme.tone(Tone::PrimaryButton),
                                        )
                                    }
                                >
                                    {move || {
                                        if state.with(|s| s.is_submitting()) {
                                            Either::Left(view! {
                                                <div class="flex items-center justify-center gap-2">
                                                    <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                                    "Sending..."
                                                </div>
                                            })
                                        } else {
                                            Either::Right(view! {
                                                <div class="flex items-center justify-center gap-2">
                                                    <Icon glyph=Glyph::Send />
                                                    "Send Message"
                                                </div>
                                            })
                                        }
                                    }}
                                </button>
                                {move || {
                                    state
                                        .with(|s| s.confirmation())
                                        .map(|message| {
                                            view! {
                                                <p
                                                    role="status"
                                                    class=move || {
                                                        format!("text-center font-medium {}", theme.tone(Tone::Success))
                                                    }
                                                >
                                                    {message}
                                                </p>
                                            }
                                        })
                                }}
                            </form>
                        </div>
                    </Reveal>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactInput(
    state: RwSignal<ContactState>,
    field: ContactField,
    label: &'static str,
    glyph: Glyph,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let theme = use_theme();
    let value = move || state.with(|s| s.form.field(field).to_string());
    let input_class = move |extra: &'static str| {
        format!(
            "w-full pl-12 pr-4 py-3 border rounded-lg transition-all duration-200 focus:outline-none {extra} {}",
            theme.tone(Tone::Input)
        )
    };

    view! {
        <div class="group">
            <label class=move || {
                format!("block text-sm font-medium mb-2 {}", theme.tone(Tone::Label))
            }>{label}</label>
            <div class="relative">
                <Icon
                    glyph=glyph
                    class=Signal::derive(move || {
                        let tone = if state.with(|s| s.focused == Some(field)) {
                            Tone::InputIconFocused
                        } else {
                            Tone::InputIcon
                        };
                        format!(
                            "absolute left-3 top-3 text-xl transition-colors duration-200 {}",
                            theme.tone(tone),
                        )
                    })
                />
                {if multiline {
                    Either::Left(view! {
                        <textarea
                            required
                            rows=5
                            placeholder=placeholder
                            prop:value=value
                            on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
                            on:focus=move |_| state.update(|s| s.focused = Some(field))
                            on:blur=move |_| state.update(|s| s.focused = None)
                            class=move || input_class("resize-none")
                        ></textarea>
                    })
                } else {
                    Either::Right(view! {
                        <input
                            type=input_type
                            required
                            placeholder=placeholder
                            prop:value=value
                            on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
                            on:focus=move |_| state.update(|s| s.focused = Some(field))
                            on:blur=move |_| state.update(|s| s.focused = None)
                            class=move || input_class("")
                        />
                    })
                }}
            </div>
        </div>
    }
}
