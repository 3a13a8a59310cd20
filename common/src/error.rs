//! エラー型定義
//!
//! load/save共通のエラー分類。fetch層の失敗はすべて操作の境界で
//! この3種に変換され、そのままユーザー向け文言に写像される。

use thiserror::Error;

/// API呼び出しの失敗分類
///
/// - `Network`: リクエストを送れなかった、またはレスポンスを
///   パースできなかった
/// - `Http`: レスポンスは届いたが失敗ステータスだった
/// - `Unknown`: Errorオブジェクトでも文字列でもない値がthrowされた
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("unknown error")]
    Unknown,
}

impl ApiError {
    /// インラインで表示するユーザー向け文言
    ///
    /// ブラウザのfetchは到達不能時に"Failed to fetch"を投げるので、
    /// その場合だけ接続確認を促すメッセージに置き換える。
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(reason) if reason == "Failed to fetch" => {
                "Couldn’t reach the backend. Is it running?".to_string()
            }
            ApiError::Network(reason) => format!("Error: {}", reason),
            ApiError::Http { status, detail } if detail.is_empty() => {
                format!("Error: HTTP {}", status)
            }
            ApiError::Http { detail, .. } => format!("Error: {}", detail),
            ApiError::Unknown => "Unknown error".to_string(),
        }
    }
}
