use leptos::{either::Either, ev, html, prelude::*, task::spawn_local};

use crate::content::{Glyph, OWNER_NAME};
use crate::profile_image::{ImageStore, MAX_UPLOAD_BYTES, PROFILE_IMAGE_KEY};
use crate::style::Tone;

use super::icon::Icon;
use super::local_storage::LocalStorageSlot;
use super::theme::use_theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PictureSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PictureSize {
    fn frame(self) -> &'static str {
        match self {
            PictureSize::Small => "w-24 h-24",
            PictureSize::Medium => "w-32 h-32",
            PictureSize::Large => "w-48 h-48",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            PictureSize::Small => "text-3xl",
            PictureSize::Medium => "text-5xl",
            PictureSize::Large => "text-7xl",
        }
    }

    fn badge(self) -> &'static str {
        match self {
            PictureSize::Small => "w-8 h-8 text-sm",
            PictureSize::Medium => "w-10 h-10 text-base",
            PictureSize::Large => "w-12 h-12 text-lg",
        }
    }
}

async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Round profile photo. With `editable` set, a badge opens a dialog to pick,
/// drop or remove the picture; the choice is kept in local storage.
#[component]
pub fn ProfilePicture(
    #[prop(optional)] size: PictureSize,
    #[prop(default = true)] editable: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let theme = use_theme();
    let slot = LocalStorageSlot::new(PROFILE_IMAGE_KEY);
    let (stored, failure) = (slot.value(), slot.failure());
    let store = RwSignal::new(ImageStore::new(slot));
    let file_input = NodeRef::<html::Input>::new();

    Effect::watch(
        move || stored.get(),
        move |_, _, _| store.update(|s| s.hydrate()),
        true,
    );
    Effect::watch(
        move || failure.get(),
        move |error, _, _| {
            if let Some(error) = error.clone() {
                store.update(|s| s.record_storage_error(error));
            }
        },
        false,
    );

    let handle_file = move |file: web_sys::File| {
        let media_type = file.type_();
        let size = file.size() as u64;
        let accepted = store
            .try_update(|s| s.begin_upload(&media_type, size).is_ok())
            .unwrap_or(false);
        if !accepted {
            return;
        }
        spawn_local(async move {
            let read = read_file(&file).await;
            store.try_update(|s| {
                // failures are kept on the store and shown in the dialog
                let _ = s.finish_upload(&media_type, read);
            });
        });
    };

    let open_picker = move || {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let picture = move || match store.with(|s| s.current().map(str::to_string)) {
        Some(src) => Either::Left(view! {
            <img src=src alt=OWNER_NAME class="w-full h-full object-cover" />
        }),
        None => Either::Right(view! {
            <div class=move || {
                format!(
                    "w-full h-full flex items-center justify-center {}",
                    theme
                        .pick((
                            "bg-gradient-to-br from-gray-700 to-gray-800",
                            "bg-gradient-to-br from-gray-100 to-gray-200",
                        )),
                )
            }>
                <Icon
                    glyph=Glyph::User
                    class=Signal::derive(move || {
                        format!("{} {}", size.placeholder(), theme.pick(("text-gray-400", "text-gray-500")))
                    })
                />
            </div>
        }),
    };

    let dialog = move || {
        store.with(|s| s.is_dialog_open()).then(|| {
            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
                    <div class=move || {
                        format!(
                            "relative w-full max-w-md p-6 rounded-2xl border {}",
                            theme.tone(Tone::Modal),
                        )
                    }>
                        <div class="flex items-center justify-between mb-6">
                            <h3 class=move || {
                                format!("text-xl font-bold {}", theme.tone(Tone::Heading))
                            }>"Update Profile Picture"</h3>
                            <button
                                on:click=move |_| store.update(|s| s.close_dialog())
                                class=move || {
                                    format!("p-2 rounded-lg transition-colors {}", theme.tone(Tone::NavLink))
                                }
                                aria-label="Close"
                            >
                                <Icon glyph=Glyph::Close class="text-xl" />
                            </button>
                        </div>

                        <div
                            on:dragover=move |ev: ev::DragEvent| {
                                ev.prevent_default();
                                store.update(|s| s.drag_over());
                            }
                            on:dragleave=move |ev: ev::DragEvent| {
                                ev.prevent_default();
                                store.update(|s| s.drag_leave());
                            }
                            on:drop=move |ev: ev::DragEvent| {
                                ev.prevent_default();
                                store.update(|s| s.drag_leave());
                                let file = ev
                                    .data_transfer()
                                    .and_then(|dt| dt.files())
                                    .and_then(|files| files.get(0));
                                if let Some(file) = file {
                                    handle_file(file);
                                }
                            }
                            class=move || {
                                let tone = if store.with(|s| s.is_dragging()) {
                                    Tone::DropZoneActive
                                } else {
                                    Tone::DropZone
                                };
                                format!(
                                    "border-2 border-dashed rounded-xl p-8 text-center transition-all duration-300 {}",
                                    theme.tone(tone),
                                )
                            }
                        >
                            <Icon
                                glyph=Glyph::Upload
                                class=Signal::derive(move || {
                                    format!("text-5xl block mb-4 {}", theme.tone(Tone::Muted))
                                })
                            />
                            <p class=move || {
                                format!("text-lg font-medium mb-2 {}", theme.tone(Tone::Heading))
                            }>"Drop your image here"</p>
                            <p class=move || {
                                format!("text-sm mb-4 {}", theme.tone(Tone::Muted))
                            }>"or click to browse files"</p>
                            <button
                                on:click=move |_| open_picker()
                                class=move || {
                                    format!(
                                        "px-6 py-2 rounded-lg font-medium transition-all duration-300 {}",
                                        theme.tone(Tone::PrimaryButton),
                                    )
                                }
                            >
                                "Choose File"
                            </button>
                        </div>

                        {move || {
                            store
                                .with(|s| s.last_error().map(|e| e.to_string()))
                                .map(|message| {
                                    view! {
                                        <p class=move || {
                                            format!("mt-4 text-sm {}", theme.pick(("text-red-400", "text-red-600")))
                                        }>{message}</p>
                                    }
                                })
                        }}

                        {move || {
                            store
                                .with(|s| s.has_image())
                                .then(|| {
                                    view! {
                                        <div class="mt-6 flex justify-center">
                                            <button
                                                on:click=move |_| store.update(|s| s.remove())
                                                class=move || {
                                                    format!(
                                                        "px-4 py-2 rounded-lg text-sm font-medium transition-colors {}",
                                                        theme.tone(Tone::Danger),
                                                    )
                                                }
                                            >
                                                "Remove Current Picture"
                                            </button>
                                        </div>
                                    }
                                })
                        }}

                        <div class=move || {
                            format!("mt-6 text-xs text-center {}", theme.tone(Tone::Muted))
                        }>
                            <p>"Supported formats: JPG, PNG, GIF, WebP"</p>
                            <p>{format!("Maximum file size: {:.1}MB", MAX_UPLOAD_BYTES as f64 / (1024.0 * 1024.0))}</p>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class=format!("relative {class}")>
            <div class=move || {
                format!(
                    "relative {} rounded-full overflow-hidden border-4 shadow-2xl transition-all duration-300 {}",
                    size.frame(),
                    theme
                        .pick((
                            "border-cyan-400 shadow-cyan-400/30",
                            "border-blue-500 shadow-blue-500/30",
                        )),
                )
            }>
                {picture}
                {move || {
                    store
                        .with(|s| s.is_loading())
                        .then(|| {
                            view! {
                                <div class="absolute inset-0 flex items-center justify-center rounded-full bg-black/50">
                                    <div class="w-8 h-8 border-4 border-white border-t-transparent rounded-full animate-spin"></div>
                                </div>
                            }
                        })
                }}
            </div>

            {editable
                .then(|| {
                    view! {
                        <button
                            on:click=move |_| store.update(|s| s.open_dialog())
                            class=move || {
                                format!(
                                    "absolute bottom-0 right-0 {} rounded-full flex items-center justify-center shadow-lg transition-all duration-300 hover:scale-110 {}",
                                    size.badge(),
                                    theme.tone(Tone::PrimaryButton),
                                )
                            }
                            aria-label="Change profile picture"
                        >
                            <Icon glyph=Glyph::Camera />
                        </button>
                    }
                })}

            <input
                node_ref=file_input
                type="file"
                accept="image/*"
                class="hidden"
                on:change=move |ev| {
                    let input: web_sys::HtmlInputElement = event_target(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        handle_file(file);
                    }
                    input.set_value("");
                }
            />
            {dialog}
        </div>
    }
}
