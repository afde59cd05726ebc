use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_mouse, use_window, UseMouseReturn};
use wasm_bindgen::JsCast;

use crate::cursor::{CursorState, INTERACTIVE_SELECTOR};

use super::theme::use_theme;

/// Dot and trailing ring that follow the pointer and grow over anything
/// clickable.
#[component]
pub fn AnimatedCursor() -> impl IntoView {
    let theme = use_theme();
    let UseMouseReturn { x, y, .. } = use_mouse();
    let (hovering, set_hovering) = signal(false);

    let _ = use_event_listener(use_window(), ev::mouseover, move |ev| {
        let over_interactive = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
            .is_some();
        set_hovering.set(over_interactive);
    });

    let cursor = Memo::new(move |_| CursorState {
        x: x.get(),
        y: y.get(),
        hovering: hovering.get(),
    });

    view! {
        <div
            class=move || {
                format!(
                    "fixed top-0 left-0 w-4 h-4 rounded-full pointer-events-none z-[9999] mix-blend-difference transition-transform duration-100 ease-out {} {}",
                    theme.pick(("bg-cyan-400", "bg-blue-500")),
                    cursor.get().dot_scale_class(),
                )
            }
            style=move || cursor.get().dot_transform()
        ></div>
        <div
            class=move || {
                format!(
                    "fixed top-0 left-0 w-8 h-8 rounded-full border-2 pointer-events-none z-[9998] transition-all duration-300 ease-out {} {}",
                    theme.pick(("border-cyan-400", "border-blue-500")),
                    cursor.get().ring_scale_class(),
                )
            }
            style=move || cursor.get().ring_transform()
        ></div>
    }
}
