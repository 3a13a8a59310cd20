//! キャプションエディタコンポーネント
//!
//! ランダムに1枚を表示し、テキストエリアの編集をデバウンス付きで
//! 自動保存する。状態遷移はすべて`CaptionController`が持ち、この
//! コンポーネントはタイマーとfetchの実行だけを受け持つ。

use captioner_common::{
    load_error_message, CaptionController, EditorState, SaveRequest, DEBOUNCE_MS,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::debounce::Debounce;

/// 表示の切り替え単位。キーストロークごとのカード再構築を避けるため
/// 状態機械の状態をここまで粗くしてからビューに渡す
#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Loading,
    Failed,
    Ready,
}

/// ランダム写真の取得を開始する
fn load_random(editor: RwSignal<CaptionController>, debounce: Debounce) {
    debounce.cancel();
    editor.update(|e| e.begin_load());
    spawn_local(async move {
        match api::fetch_random_photo().await {
            Ok(photo) => {
                let _ = editor.try_update(|e| e.apply_load_success(photo));
            }
            Err(error) => {
                let _ = editor.try_update(|e| e.apply_load_failure(error));
            }
        }
    });
}

/// ディスパッチ済みの保存リクエストを実行する
fn dispatch_save(editor: RwSignal<CaptionController>, request: SaveRequest) {
    spawn_local(async move {
        let SaveRequest { token, hash, caption } = request;
        match api::patch_caption(&hash, &caption).await {
            Ok(photo) => {
                let _ = editor.try_update(|e| e.apply_save_success(token, photo));
            }
            Err(error) => {
                gloo::console::error!(format!("caption save failed: {}", error));
                let _ = editor.try_update(|e| e.apply_save_failure(token, error));
            }
        }
    });
}

#[component]
pub fn CaptionEditor() -> impl IntoView {
    let editor = RwSignal::new(CaptionController::new());
    let debounce = Debounce::new();

    // マウント時に1枚ロード
    load_random(editor, debounce);

    let phase = Memo::new(move |_| {
        editor.with(|e| match e.state() {
            EditorState::Loading => Phase::Loading,
            EditorState::LoadFailed(_) => Phase::Failed,
            _ => Phase::Ready,
        })
    });
    let load_error = Memo::new(move |_| {
        editor.with(|e| match e.state() {
            EditorState::LoadFailed(error) => Some(load_error_message(error)),
            _ => None,
        })
    });
    let draft = Memo::new(move |_| editor.with(|e| e.draft().to_string()));
    let photo_meta = Memo::new(move |_| {
        editor.with(|e| e.photo().map(|p| (p.hash.clone(), p.filename.clone())))
    });
    let status = Memo::new(move |_| editor.with(|e| e.status_line()));

    view! {
        <section class="caption-card">
            {move || match phase.get() {
                Phase::Loading => {
                    view! { <p class="text-muted">"Loading random photo…"</p> }.into_any()
                }
                Phase::Failed => view! {
                    <p class="load-error">{move || load_error.get().unwrap_or_default()}</p>
                    <button
                        class="btn"
                        aria-label="Retry load"
                        on:click=move |_| load_random(editor, debounce)
                    >
                        "Retry"
                    </button>
                }
                .into_any(),
                Phase::Ready => view! {
                    <figure class="photo-frame">
                        <img
                            src=move || {
                                photo_meta.get().map(|(hash, _)| api::image_url(&hash)).unwrap_or_default()
                            }
                            alt=move || {
                                photo_meta.get().map(|(_, filename)| filename).unwrap_or_default()
                            }
                        />
                    </figure>
                    <p class="filename">
                        {move || {
                            photo_meta
                                .get()
                                .map(|(_, filename)| format!("Filename: {}", filename))
                                .unwrap_or_default()
                        }}
                    </p>
                    <textarea
                        aria-label="Edit caption"
                        placeholder="Enter a caption…"
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            let mut armed = None;
                            editor.update(|e| armed = e.edit(&text));
                            if let Some(token) = armed {
                                debounce.arm(DEBOUNCE_MS, move || {
                                    let request =
                                        editor.try_update(|e| e.debounce_fired(token)).flatten();
                                    if let Some(request) = request {
                                        dispatch_save(editor, request);
                                    }
                                });
                            }
                        }
                    ></textarea>
                    <div class="caption-actions">
                        <button
                            class="btn"
                            on:click=move |_| {
                                debounce.cancel();
                                let mut request = None;
                                editor.update(|e| request = e.save_now());
                                if let Some(request) = request {
                                    dispatch_save(editor, request);
                                }
                            }
                        >
                            "Save Caption"
                        </button>
                        <button
                            class="btn"
                            aria-label="Next random photo"
                            on:click=move |_| load_random(editor, debounce)
                        >
                            "Next"
                        </button>
                    </div>
                    <p class="save-status">{move || status.get().unwrap_or_default()}</p>
                }
                .into_any(),
            }}
        </section>
    }
}
