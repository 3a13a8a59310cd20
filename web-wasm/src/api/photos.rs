//! 写真エンドポイント
//!
//! 一覧・ランダム取得・キャプション更新・アップロードのfetchラッパー

use captioner_common::{ApiError, CaptionPatch, Photo};
use web_sys::{File, FormData, Request, RequestInit, RequestMode};

use super::{get_request, js_error, json_request, read_json, send, API_URL};

/// 原寸画像のURL
pub fn image_url(hash: &str) -> String {
    format!("{}/photos/{}/image", API_URL, hash)
}

/// サムネイルのURL（ギャラリーのグリッドで使う）
pub fn thumbnail_url(hash: &str) -> String {
    format!("{}/photos/{}/thumbnail", API_URL, hash)
}

/// GET /photos — 全写真の一覧
pub async fn fetch_photos() -> Result<Vec<Photo>, ApiError> {
    let request = get_request(&format!("{}/photos", API_URL))?;
    let response = send(request).await?;
    read_json(response).await
}

/// GET /photos/random — ランダムに1枚
///
/// データセットが空のときは404が返る（呼び出し側で空状態として扱う）
pub async fn fetch_random_photo() -> Result<Photo, ApiError> {
    let request = get_request(&format!("{}/photos/random", API_URL))?;
    let response = send(request).await?;
    read_json(response).await
}

/// PATCH /photos/{hash}/caption — キャプション更新
///
/// サーバは更新後のレコード全体を返し、それが正となる
pub async fn patch_caption(hash: &str, caption: &str) -> Result<Photo, ApiError> {
    let body = serde_json::to_string(&CaptionPatch {
        caption: caption.to_string(),
    })
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let url = format!("{}/photos/{}/caption", API_URL, hash);
    let request = json_request("PATCH", &url, &body)?;
    let response = send(request).await?;
    read_json(response).await
}

/// POST /photos — multipart form data（フィールド名`file`）でアップロード
///
/// Content-Typeはブラウザがboundary付きで設定するので触らない
pub async fn upload_photo(file: &File) -> Result<Photo, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());
    let url = format!("{}/photos", API_URL);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

    let response = send(request).await?;
    read_json(response).await
}
