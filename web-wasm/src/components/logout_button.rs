//! ログアウトボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn LogoutButton<F>(on_logout: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <button
            class="logout-button"
            aria-label="Logout"
            on:click=move |_| on_logout(())
        >
            "Logout"
        </button>
    }
}
