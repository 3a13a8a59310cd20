//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Captioner Photo Gallery"</h1>
            <p class="text-muted">"Effortlessly manage your photo captions."</p>
        </header>
    }
}
