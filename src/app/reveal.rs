use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_supported, UseIntersectionObserverOptions,
};

use crate::reveal::{Direction, RevealConfig, DEFAULT_DURATION_MS};
use crate::visibility::{
    observed_element, Transition, VisibilityObserver, VisibilityState, DEFAULT_THRESHOLD,
};

/// Tracks whether `target` has scrolled into view. Once it has, the signal
/// stays `true` and the observer is disconnected.
///
/// Without IntersectionObserver support the target counts as visible as soon
/// as it mounts.
pub fn use_visibility(target: NodeRef<html::Div>, threshold: f64) -> Signal<bool> {
    let observer = StoredValue::new(VisibilityObserver::new(threshold));
    let (is_visible, set_is_visible) = signal(false);
    let supported = use_supported(|| {
        js_sys::Reflect::has(&window(), &"IntersectionObserver".into()).unwrap_or(false)
    });
    let observed = Signal::derive_local(move || observed_element(supported.get(), target.get()));

    let _ = use_intersection_observer_with_options(
        observed,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, watcher| {
            let batch = entries
                .iter()
                .map(|entry| (entry.is_intersecting(), entry.intersection_ratio()));
            let transition = observer.try_update_value(|o| o.on_entries(batch));
            if transition == Some(Transition::Revealed) {
                watcher.disconnect();
                set_is_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![observer.with_value(|o| o.threshold())]),
    );

    Effect::new(move |_| {
        if target.get().is_none() {
            return;
        }
        let state = observer.try_update_value(|o| o.attach(supported.get()));
        if state == Some(VisibilityState::Revealed) {
            set_is_visible.set(true);
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|o| o.detach());
    });

    is_visible.into()
}

/// Hides its children until they scroll into view, then slides them in from
/// `direction`.
#[component]
pub fn Reveal(
    #[prop(optional)] direction: Direction,
    /// Milliseconds to wait after becoming visible.
    #[prop(optional)]
    delay: u32,
    #[prop(default = DEFAULT_DURATION_MS)] duration: u32,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let config = RevealConfig::new(direction, delay, duration);
    let node_ref = NodeRef::<html::Div>::new();
    let is_visible = use_visibility(node_ref, threshold);

    view! {
        <div
            node_ref=node_ref
            class=move || config.class(is_visible.get(), &class)
            style=config.style()
        >
            {children()}
        </div>
    }
}
