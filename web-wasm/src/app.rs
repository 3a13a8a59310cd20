//! メインアプリケーションコンポーネント
//!
//! セッションフラグでログインフォームと本体を切り替える。本体は
//! ランダム写真のキャプションエディタ + ギャラリー + アップロード。

use captioner_common::{Photo, SessionStore};
use leptos::prelude::*;

use crate::components::{
    caption_editor::CaptionEditor, gallery::Gallery, header::Header, login_form::LoginForm,
    logout_button::LogoutButton, upload_photo::UploadPhoto,
};
use crate::session::BrowserSession;

#[component]
pub fn App() -> impl IntoView {
    let store = BrowserSession;
    let (authenticated, set_authenticated) = signal(store.read());

    // アップロード成功のたびに進み、ギャラリーの再取得を起こす
    let (gallery_version, set_gallery_version) = signal(0u32);

    let on_login = move |_: ()| {
        store.write(true);
        set_authenticated.set(true);
    };
    let on_logout = move |_: ()| {
        store.clear();
        set_authenticated.set(false);
    };
    let on_uploaded = move |_photo: Photo| {
        set_gallery_version.update(|version| *version += 1);
    };

    view! {
        <div class="container">
            <Header />

            <Show
                when=move || authenticated.get()
                fallback=move || view! { <LoginForm on_login=on_login /> }
            >
                <LogoutButton on_logout=on_logout />
                <CaptionEditor />
                <Gallery version=gallery_version />
                <UploadPhoto on_uploaded=on_uploaded />
            </Show>
        </div>
    }
}
