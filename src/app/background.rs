use leptos::prelude::*;

use crate::decor::{grid_overlay_style, BLOBS};

use super::theme::use_theme;

/// Fixed layer of drifting gradient blobs behind the page.
#[component]
pub fn Background() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none z-0">
            {BLOBS
                .iter()
                .map(|blob| {
                    view! {
                        <div class=move || blob.class(theme.is_dark()) style=blob.style()></div>
                    }
                })
                .collect_view()}
            <div
                class="absolute inset-0 opacity-5"
                style=move || grid_overlay_style(theme.is_dark())
            ></div>
        </div>
    }
}
