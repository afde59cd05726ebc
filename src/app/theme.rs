use leptos::prelude::*;

use crate::content::Glyph;
use crate::style::{style_for, Tone};
use crate::theme::{ThemeStore, THEME_KEY};

use super::icon::Icon;
use super::local_storage::LocalStorageSlot;

/// Page-wide light/dark flag. Every section reads it through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<ThemeStore<LocalStorageSlot>>,
    is_dark: Memo<bool>,
}

impl ThemeContext {
    pub fn provide() -> Self {
        let slot = LocalStorageSlot::new(THEME_KEY);
        let stored = slot.value();
        let store = RwSignal::new(ThemeStore::new(slot));
        let is_dark = Memo::new(move |_| store.with(|s| s.is_dark()));
        let ctx = Self { store, is_dark };

        // the stored token only shows up after hydration
        Effect::watch(
            move || stored.get(),
            move |_, _, _| {
                store.update(|s| {
                    s.hydrate();
                });
            },
            true,
        );

        #[cfg(feature = "hydrate")]
        Effect::watch(
            move || is_dark.get(),
            move |dark, _, _| apply_root_class(*dark),
            true,
        );

        provide_context(ctx);
        ctx
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn tone(&self, tone: Tone) -> &'static str {
        style_for(self.is_dark(), tone)
    }

    /// Picks between a `(dark, light)` pair.
    pub fn pick<T>(&self, pair: (T, T)) -> T {
        if self.is_dark() {
            pair.0
        } else {
            pair.1
        }
    }

    pub fn toggle(&self) {
        self.store.update(|s| {
            s.toggle();
        });
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(feature = "hydrate")]
fn apply_root_class(is_dark: bool) {
    let Some(root) = document().document_element() else {
        log::warn!("no root element to apply theme to");
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", is_dark) {
        log::warn!("couldn't apply theme class: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            on:click=move |_| theme.toggle()
            class=move || {
                format!(
                    "fixed top-6 right-6 z-50 p-3 rounded-full transition-all duration-300 transform hover:scale-110 group {}",
                    theme
                        .pick((
                            "bg-gray-800 text-yellow-400 hover:bg-gray-700 shadow-lg shadow-yellow-400/20",
                            "bg-white text-gray-800 hover:bg-gray-50 shadow-lg shadow-gray-900/20",
                        )),
                )
            }
            aria-label="Toggle theme"
        >
            <div class="relative w-6 h-6">
                <Icon
                    glyph=Glyph::Sun
                    class=Signal::derive(move || {
                        format!(
                            "absolute inset-0 text-2xl transition-all duration-300 {}",
                            theme.pick(("opacity-100 rotate-0", "opacity-0 rotate-90")),
                        )
                    })
                />
                <Icon
                    glyph=Glyph::Moon
                    class=Signal::derive(move || {
                        format!(
                            "absolute inset-0 text-2xl transition-all duration-300 {}",
                            theme.pick(("opacity-0 -rotate-90", "opacity-100 rotate-0")),
                        )
                    })
                />
            </div>
            <div class=move || {
                format!(
                    "absolute top-full right-0 mt-2 px-3 py-1 rounded-lg text-sm font-medium opacity-0 group-hover:opacity-100 transition-opacity duration-300 whitespace-nowrap {}",
                    theme.tone(Tone::Tooltip),
                )
            }>{move || theme.pick(("Switch to Light", "Switch to Dark"))}</div>
        </button>
    }
}
