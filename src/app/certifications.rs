use leptos::{either::Either, prelude::*};

use crate::content::Glyph;
use crate::forms::{Certification, CertificationDraft, CertificationError, CertificationList};
use crate::reveal::Direction;
use crate::style::{title_gradient, Tone};

use super::icon::Icon;
use super::reveal::Reveal;
use super::theme::use_theme;

#[component]
pub fn Certifications() -> impl IntoView {
    let theme = use_theme();
    let list = RwSignal::new(CertificationList::default());
    let draft = RwSignal::new(CertificationDraft::default());
    let (show_form, set_show_form) = signal(false);
    let (error, set_error) = signal(None::<CertificationError>);

    let close_form = move || {
        set_show_form.set(false);
        set_error.set(None);
    };

    let add = move || {
        let result =
            draft.with_untracked(|d| list.try_update(|l| l.add(d).map(|cert| cert.id)));
        match result {
            Some(Ok(id)) => {
                log::debug!("certification {id} added");
                draft.set(CertificationDraft::default());
                close_form();
            }
            Some(Err(e)) => set_error.set(Some(e)),
            None => {}
        }
    };

    let input_class = move |extra: &'static str| {
        format!(
            "w-full p-3 rounded-lg border transition-all duration-200 focus:outline-none {extra} {}",
            theme.tone(Tone::Input)
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
                                ("from-yellow-400 to-orange-400", "from-yellow-600 to-orange-600"),
                            )
                        }>"Certifications"</span>
                    </h2>
                    <p class=move || {
                        format!("text-xl max-w-3xl mx-auto {}", theme.tone(Tone::Body))
                    }>"Professional development and continuous learning achievements"</p>
                </Reveal>

                <Reveal direction=Direction::Up delay=300 class="text-center mb-12">
                    <button
                        on:click=move |_| {
                            if show_form.get_untracked() {
                                close_form();
                            } else {
                                set_show_form.set(true);
                            }
                        }
                        class=move || {
                            format!(
                                "inline-flex items-center gap-2 px-6 py-3 rounded-full font-semibold transition-all duration-300 transform hover:scale-105 {}",
                                theme.tone(Tone::PrimaryButton),
                            )
                        }
                    >
                        <Icon glyph=Glyph::Plus />
                        "Add Certification"
                    </button>
                </Reveal>

                <Show when=move || show_form.get()>
                    <Reveal
                        direction=Direction::Down
                        delay=100
                        class="max-w-2xl mx-auto mb-12"
                    >
                        <form
                            on:submit=move |ev| {
                                ev.prevent_default();
                                add();
                            }
                            class=move || format!("p-6 rounded-xl border {}", theme.tone(Tone::Card))
                        >
                            <h3 class=move || {
                                format!("text-xl font-bold mb-4 {}", theme.tone(Tone::Heading))
                            }>"Add New Certification"</h3>
                            <div class="space-y-4">
                                <input
                                    type="text"
                                    placeholder="Certification Title"
                                    prop:value=move || draft.with(|d| d.title.clone())
                                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                                    class=move || input_class("")
                                />
                                <input
                                    type="text"
                                    placeholder="Issuing Organization"
                                    prop:value=move || draft.with(|d| d.issuer.clone())
                                    on:input=move |ev| draft.update(|d| d.issuer = event_target_value(&ev))
                                    class=move || input_class("")
                                />
                                <input
                                    type="date"
                                    prop:value=move || draft.with(|d| d.date.clone())
                                    on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                                    class=move || input_class("")
                                />
                                <textarea
                                    placeholder="Description (optional)"
                                    rows=3
                                    prop:value=move || draft.with(|d| d.description.clone())
                                    on:input=move |ev| {
                                        draft.update(|d| d.description = event_target_value(&ev))
                                    }
                                    class=move || input_class("resize-none")
                                ></textarea>
                                {move || {
                                    error
                                        .get()
                                        .map(|e| {
                                            view! {
                                                <p class=move || {
                                                    format!("text-sm {}", theme.pick(("text-red-400", "text-red-600")))
                                                }>{e.to_string()}</p>
                                            }
                                        })
                                }}
                                <div class="flex gap-3">
                                    <button
                                        type="submit"
                                        class="px-6 py-2 rounded-lg font-semibold transition-all duration-300 bg-green-500 text-white hover:bg-green-600"
                                    >
                                        "Add"
                                    </button>
                                    <button
                                        type="button"
                                        on:click=move |_| close_form()
                                        class=move || {
                                            format!(
                                                "px-6 py-2 rounded-lg font-semibold transition-all duration-300 text-white {}",
                                                theme.pick(("bg-gray-600 hover:bg-gray-700", "bg-gray-400 hover:bg-gray-500")),
                                            )
                                        }
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        </form>
                    </Reveal>
                </Show>

                {move || {
                    if list.with(|l| l.is_empty()) {
                        Either::Left(view! { <EmptyState /> })
                    } else {
                        Either::Right(view! {
                            <Reveal
                                direction=Direction::Up
                                delay=500
                                class="grid md:grid-cols-2 lg:grid-cols-3 gap-8"
                            >
                                <For
                                    each=move || list.with(|l| l.items().to_vec())
                                    key=|cert| cert.id
                                    children=move |cert| view! { <CertificationCard cert /> }
                                />
                            </Reveal>
                        })
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    let theme = use_theme();

    view! {
        <Reveal direction=Direction::Up delay=500 class="text-center">
            <div class=move || {
                format!("inline-flex items-center gap-3 px-8 py-4 rounded-full border {}", theme.tone(Tone::Pill))
            }>
                <Icon
                    glyph=Glyph::Award
                    class=Signal::derive(move || format!("text-xl {}", theme.tone(Tone::Accent)))
                />
                <span class=move || theme.tone(Tone::Body)>
                    "No certifications added yet. Click \"Add Certification\" to get started!"
                </span>
            </div>
        </Reveal>
    }
}

#[component]
fn CertificationCard(cert: Certification) -> impl IntoView {
    let theme = use_theme();
    let date = cert.display_date();
    let description = cert.description.clone();

    view! {
        <div class=move || {
            format!(
                "group p-6 rounded-xl border transition-all duration-300 transform hover:scale-105 {} {}",
                theme.tone(Tone::Card),
                theme.tone(Tone::CardHover),
            )
        }>
            <div class="flex items-start justify-between mb-4">
                <div class="p-3 rounded-lg bg-gradient-to-r from-yellow-500 to-orange-500 text-white text-xl">
                    <Icon glyph=Glyph::Award />
                </div>
                {date
                    .map(|date| {
                        view! {
                            <div class=move || {
                                format!("flex items-center gap-2 {}", theme.tone(Tone::Muted))
                            }>
                                <Icon glyph=Glyph::Calendar class="text-sm" />
                                <span class="text-sm">{date}</span>
                            </div>
                        }
                    })}
            </div>
            <h3 class=move || {
                format!("text-xl font-bold mb-2 {}", theme.tone(Tone::Heading))
            }>{cert.title}</h3>
            <p class=move || format!("font-medium mb-3 {}", theme.tone(Tone::Accent))>{cert.issuer}</p>
            {description
                .map(|text| {
                    view! {
                        <p class=move || {
                            format!("text-sm leading-relaxed {}", theme.tone(Tone::Body))
                        }>{text}</p>
                    }
                })}
        </div>
    }
}
