//! 写真アップロードコンポーネント
//!
//! multipart form data（フィールド名`file`）でPOST /photosする。
//! 成功したら入力をリセットし、親にレコードを渡してギャラリーを
//! リフレッシュさせる。

use captioner_common::{ApiError, Photo};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;

/// アップロード失敗のインライン文言
///
/// 409は同一コンテンツの重複アップロード
fn upload_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { status: 409, .. } => "Photo with this hash already exists.".to_string(),
        other => other.user_message(),
    }
}

#[component]
pub fn UploadPhoto<F>(on_uploaded: F) -> impl IntoView
where
    F: Fn(Photo) + 'static + Clone + Send,
{
    let input_ref = NodeRef::<html::Input>::new();
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let file = input_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            set_error.set(Some("Please choose a file.".to_string()));
            return;
        };

        set_uploading.set(true);
        let on_uploaded = on_uploaded.clone();
        spawn_local(async move {
            match api::upload_photo(&file).await {
                Ok(photo) => {
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                    on_uploaded(photo);
                }
                Err(error) => {
                    let _ = set_error.try_set(Some(upload_error_message(&error)));
                }
            }
            let _ = set_uploading.try_set(false);
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <label for="photo-upload">"Choose photo:"</label>
            <input
                node_ref=input_ref
                id="photo-upload"
                type="file"
                accept="image/*"
                aria-label="Choose photo"
                on:change=move |_| set_error.set(None)
            />
            <button type="submit" disabled=move || uploading.get()>
                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
            </button>
            {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
        </form>
    }
}
