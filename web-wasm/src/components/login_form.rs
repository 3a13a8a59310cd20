//! ログインフォームコンポーネント
//!
//! パスワードをPOST /loginへ送り、`success`ならコールバック経由で
//! セッションフラグを立てる。失敗はインラインで表示する。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;

#[component]
pub fn LoginForm<F>(on_login: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);
        set_pending.set(true);

        let on_login = on_login.clone();
        let entered = password.get_untracked();
        spawn_local(async move {
            match api::login(&entered).await {
                Ok(response) if response.success => on_login(()),
                Ok(_) => {
                    let _ = set_error.try_set(Some("Incorrect password.".to_string()));
                }
                Err(error) => {
                    let _ = set_error.try_set(Some(error.user_message()));
                }
            }
            let _ = set_pending.try_set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <label for="password">"Password:"</label>
            <input
                type="password"
                id="password"
                aria-label="Password"
                placeholder="Enter password…"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Logging in..." } else { "Log in" }}
            </button>
            {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
        </form>
    }
}
