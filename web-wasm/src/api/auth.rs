//! ログインエンドポイント

use captioner_common::{ApiError, LoginRequest, LoginResponse};

use super::{json_request, read_json, send, API_URL};

/// POST /login — パスワード照合
///
/// 成否は`success`フラグで返る（失敗でもHTTPとしては200）
pub async fn login(password: &str) -> Result<LoginResponse, ApiError> {
    let body = serde_json::to_string(&LoginRequest {
        password: password.to_string(),
    })
    .map_err(|e| ApiError::Network(e.to_string()))?;
    let request = json_request("POST", &format!("{}/login", API_URL), &body)?;
    let response = send(request).await?;
    read_json(response).await
}
