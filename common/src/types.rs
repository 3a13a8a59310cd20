//! 写真レコードとAPIリクエスト/レスポンスの型定義
//!
//! バックエンドが正とするデータ。クライアントは取得した`Photo`を
//! そのまま保持し、`caption`だけをドラフトでシャドウする。

use serde::{Deserialize, Serialize};

/// サーバに保存された1枚の写真とそのキャプション
///
/// `hash`はコンテンツハッシュ（不変のID）。キャプション更新と
/// 画像取得のパスセグメントの両方に使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub hash: String,
    pub filename: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl Photo {
    /// 画像のalt属性用テキスト（キャプションがなければファイル名）
    pub fn alt_text(&self) -> &str {
        self.caption
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.filename)
    }
}

/// PATCH /photos/{hash}/caption のリクエストボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionPatch {
    pub caption: String,
}

/// POST /login のリクエストボディ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /login のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
}
