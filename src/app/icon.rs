use leptos::prelude::*;

use crate::content::Glyph;

#[component]
pub fn Icon(glyph: Glyph, #[prop(into, default = "".into())] class: Signal<String>) -> impl IntoView {
    view! { <i class=move || format!("{} {}", glyph.class_name(), class.get()) aria-hidden="true"></i> }
}
