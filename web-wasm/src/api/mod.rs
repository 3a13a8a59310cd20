//! バックエンドAPI連携
//!
//! fetch層の失敗はすべてここで`ApiError`の3分類に変換する。
//! 呼び出し側（コンポーネント）には`Result`しか見せない。

pub mod auth;
pub mod photos;

pub use auth::login;
pub use photos::{
    fetch_photos, fetch_random_photo, image_url, patch_caption, thumbnail_url, upload_photo,
};

use captioner_common::ApiError;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// バックエンドのオリジン（ローカル固定）
pub const API_URL: &str = "http://localhost:8000";

/// JS側のthrow値を`ApiError`へ変換
///
/// fetchの失敗は`TypeError`（例: "Failed to fetch"）で届く。
/// Errorオブジェクトでも文字列でもない値は`Unknown`に落とす。
pub(crate) fn js_error(value: JsValue) -> ApiError {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        ApiError::Network(String::from(error.message()))
    } else if let Some(message) = value.as_string() {
        ApiError::Network(message)
    } else {
        ApiError::Unknown
    }
}

/// ボディなしのGETリクエストを組み立てる
pub(crate) fn get_request(url: &str) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    Request::new_with_str_and_init(url, &opts).map_err(js_error)
}

/// JSONボディ付きのリクエストを組み立てる
pub(crate) fn json_request(method: &str, url: &str, body: &str) -> Result<Request, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    Ok(request)
}

/// リクエストを送出し、失敗ステータスは`Http`に変換する
pub(crate) async fn send(request: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Unknown)?;
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response_value.dyn_into().map_err(|_| ApiError::Unknown)?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            detail: response.status_text(),
        });
    }
    Ok(response)
}

/// レスポンスボディをJSONとして読みデシリアライズする
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(js_error)?;
    let json = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Network(e.to_string()))
}
