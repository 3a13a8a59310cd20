//! 写真ギャラリーコンポーネント
//!
//! GET /photosの一覧をサムネイルのグリッドで表示する。`version`が
//! 進むたびに再取得する（アップロード成功後のリフレッシュ）。

use captioner_common::{ApiError, Photo};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;

#[derive(Clone, PartialEq)]
enum GalleryState {
    Loading,
    Failed(ApiError),
    Loaded,
}

#[component]
pub fn Gallery(version: ReadSignal<u32>) -> impl IntoView {
    let (photos, set_photos) = signal(Vec::<Photo>::new());
    let (state, set_state) = signal(GalleryState::Loading);

    // 初回マウント時と、versionが進むたびに一覧を取り直す
    Effect::new(move |_| {
        version.get();
        set_state.set(GalleryState::Loading);
        spawn_local(async move {
            match api::fetch_photos().await {
                Ok(list) => {
                    let _ = set_photos.try_set(list);
                    let _ = set_state.try_set(GalleryState::Loaded);
                }
                Err(error) => {
                    let _ = set_state.try_set(GalleryState::Failed(error));
                }
            }
        });
    });

    view! {
        {move || match state.get() {
            GalleryState::Loading => {
                view! { <div class="gallery-note text-muted">"Loading gallery…"</div> }.into_any()
            }
            GalleryState::Failed(error) => {
                let class = match &error {
                    ApiError::Network(reason) if reason == "Failed to fetch" => {
                        "gallery-note text-muted"
                    }
                    _ => "gallery-note gallery-error",
                };
                view! { <div class=class>{error.user_message()}</div> }.into_any()
            }
            GalleryState::Loaded if photos.with(|list| list.is_empty()) => {
                view! { <div class="gallery-note text-muted">"No photos found."</div> }.into_any()
            }
            GalleryState::Loaded => view! {
                <div class="photo-gallery">
                    <For
                        each=move || photos.get()
                        key=|photo| photo.hash.clone()
                        children=move |photo| view! { <PhotoCard photo=photo /> }
                    />
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn PhotoCard(photo: Photo) -> impl IntoView {
    let alt = photo.alt_text().to_string();
    let caption = photo.caption.clone().filter(|c| !c.is_empty());

    view! {
        <div class="photo-card">
            <img src=api::thumbnail_url(&photo.hash) alt=alt loading="lazy" />
            <div class="photo-caption">
                {match caption {
                    Some(text) => view! { <span>{text}</span> }.into_any(),
                    None => view! { <em class="text-muted">"No caption"</em> }.into_any(),
                }}
            </div>
        </div>
    }
}
