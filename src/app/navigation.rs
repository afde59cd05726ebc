use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{Glyph, OWNER_INITIALS};
use crate::nav::{active_section, is_scrolled, SectionRect, NAV_ITEMS};
use crate::style::Tone;

use super::icon::Icon;
use super::theme::use_theme;

/// Smoothly scrolls the section with `id` into view. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        log::debug!("no section #{id} to scroll to");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn section_rect(id: &str) -> Option<SectionRect> {
    let rect = document().get_element_by_id(id)?.get_bounding_client_rect();
    Some(SectionRect {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

#[component]
pub fn Navigation() -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal("home");
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    Effect::watch(
        move || scroll_y.get(),
        move |_, _, _| {
            let sections = NAV_ITEMS.iter().map(|item| (item.id, section_rect(item.id)));
            if let Some(id) = active_section(sections) {
                set_active.set(id);
            }
        },
        false,
    );

    let go_to = move |id: &'static str| {
        scroll_to_section(id);
        set_active.set(id);
        set_menu_open.set(false);
    };

    let link_class = move |id: &'static str, extra: &'static str| {
        let tone = if active.get() == id {
            Tone::NavLinkActive
        } else {
            Tone::NavLink
        };
        format!("flex items-center rounded-lg transition-all duration-300 {extra} {}", theme.tone(tone))
    };

    view! {
        <nav class=move || {
            let backdrop = if scrolled.get() { theme.tone(Tone::NavBar) } else { "bg-transparent" };
            format!("fixed top-0 left-0 right-0 z-40 transition-all duration-300 {backdrop}")
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        on:click=move |_| go_to("home")
                        class=move || {
                            format!(
                                "text-2xl font-bold bg-clip-text text-transparent {}",
                                theme
                                    .pick((
                                        "bg-gradient-to-r from-cyan-400 to-blue-500",
                                        "bg-gradient-to-r from-blue-600 to-purple-600",
                                    )),
                            )
                        }
                    >
                        {OWNER_INITIALS}
                    </button>

                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <button
                                        on:click=move |_| go_to(item.id)
                                        class=move || link_class(item.id, "space-x-2 px-4 py-2 text-sm font-medium")
                                    >
                                        <Icon glyph=item.icon />
                                        <span>{item.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class=move || {
                            format!("md:hidden mr-16 p-2 rounded-lg transition-colors {}", theme.tone(Tone::NavLink))
                        }
                        aria-label="Toggle menu"
                    >
                        <Icon
                            glyph=Glyph::Menu
                            class=Signal::derive(move || {
                                if menu_open.get() { "hidden".to_string() } else { "text-xl".to_string() }
                            })
                        />
                        <Icon
                            glyph=Glyph::Close
                            class=Signal::derive(move || {
                                if menu_open.get() { "text-xl".to_string() } else { "hidden".to_string() }
                            })
                        />
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div class=move || {
                        format!("md:hidden rounded-lg mt-2 mb-4 border {}", theme.tone(Tone::MobileMenu))
                    }>
                        <div class="px-2 pt-2 pb-3 space-y-1">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <button
                                            on:click=move |_| go_to(item.id)
                                            class=move || {
                                                link_class(item.id, "w-full space-x-3 px-3 py-2 text-base font-medium")
                                            }
                                        >
                                            <Icon glyph=item.icon />
                                            <span>{item.label}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
