//! キャプションエディタの状態機械
//!
//! fetch→表示→編集→デバウンス保存のライフサイクルを純粋な状態遷移
//! として持つ。タイマーもHTTPもここには無い: UI側は`edit`が返す
//! デバウンストークンでタイマーを張り、発火時に`debounce_fired`、
//! レスポンス到着時に`apply_save_success`/`apply_save_failure`を
//! 呼ぶだけでよい。ネイティブの`cargo test`で全遷移を検証できる。

use crate::error::ApiError;
use crate::types::Photo;

/// デバウンス間隔（ミリ秒）
pub const DEBOUNCE_MS: u32 = 500;

/// エディタの状態
///
/// `Loading → Ready → Saving → Ready | SaveFailed`。
/// `LoadFailed`は`Loading`からのみ到達し、リトライまで留まる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Loading,
    Ready,
    Saving,
    LoadFailed(ApiError),
    SaveFailed(ApiError),
}

/// 発行すべき保存リクエスト
///
/// `hash`と`caption`はディスパッチ時点の値を固定する。`token`は
/// 単調増加の連番で、古い保存のレスポンスを捨てるために使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub token: u64,
    pub hash: String,
    pub caption: String,
}

/// ランダム写真の取得失敗をユーザー向け文言にする
///
/// 404は「写真が1枚も無い」を意味するので、到達不能とは区別して
/// 空データセットのメッセージを出す。
pub fn load_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { status: 404, .. } => "No photos found.".to_string(),
        other => other.user_message(),
    }
}

/// キャプションエディタコントローラ
#[derive(Debug, Clone)]
pub struct CaptionController {
    state: EditorState,
    photo: Option<Photo>,
    draft: String,
    debounce_token: u64,
    armed: Option<u64>,
    save_token: u64,
}

impl CaptionController {
    /// マウント直後の状態（ロード中）で生成する
    pub fn new() -> Self {
        Self {
            state: EditorState::Loading,
            photo: None,
            draft: String::new(),
            debounce_token: 0,
            armed: None,
            save_token: 0,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    /// 編集中のドラフト（未保存のキャプション）
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// デバウンスタイマーが張られたままか
    pub fn has_pending_edit(&self) -> bool {
        self.armed.is_some()
    }

    /// 保存状態のインライン表示文言
    pub fn status_line(&self) -> Option<String> {
        match &self.state {
            EditorState::Saving => Some("Saving…".to_string()),
            EditorState::SaveFailed(error) => {
                Some(format!("Save failed: {}", error.user_message()))
            }
            _ => None,
        }
    }

    /// ロード開始（マウント時、Nextボタン、LoadFailedからのリトライ）
    ///
    /// 表示は即座にLoadingへ移る。張られたデバウンスと飛行中の保存は
    /// ここでトークンを進めて無効化する: 前の写真への保存レスポンスが
    /// 後から届いても状態を上書きしない。
    pub fn begin_load(&mut self) {
        self.state = EditorState::Loading;
        self.armed = None;
        self.save_token += 1;
    }

    /// ロード成功: レコードを差し替え、ドラフトをサーバ値に合わせる
    /// （captionがnullなら空文字）
    pub fn apply_load_success(&mut self, photo: Photo) {
        self.draft = photo.caption.clone().unwrap_or_default();
        self.photo = Some(photo);
        self.state = EditorState::Ready;
    }

    /// ロード失敗: 理由を保持してLoadFailedに留まる
    pub fn apply_load_failure(&mut self, error: ApiError) {
        self.photo = None;
        self.state = EditorState::LoadFailed(error);
    }

    /// キャプション編集
    ///
    /// ドラフトは同期的に更新し、新しいデバウンストークンを返す。
    /// 呼び出し側は前のタイマーを破棄してこのトークンで張り直す。
    /// 写真が無ければno-op。
    pub fn edit(&mut self, text: &str) -> Option<u64> {
        self.photo.as_ref()?;
        self.draft = text.to_string();
        self.debounce_token += 1;
        self.armed = Some(self.debounce_token);
        Some(self.debounce_token)
    }

    /// デバウンスタイマー発火
    ///
    /// トークンが最新の`edit`のものでなければ古い発火なのでNone。
    /// 最新なら保存リクエストをディスパッチする。ウィンドウ内に何回
    /// 編集しても、発行される保存は最後の値を載せた1件だけになる。
    pub fn debounce_fired(&mut self, token: u64) -> Option<SaveRequest> {
        if self.armed != Some(token) {
            return None;
        }
        self.armed = None;
        self.dispatch_save()
    }

    /// 明示的な保存（Save Captionボタン）
    ///
    /// 張られたデバウンスは取り下げて即時ディスパッチする。
    pub fn save_now(&mut self) -> Option<SaveRequest> {
        self.armed = None;
        self.dispatch_save()
    }

    fn dispatch_save(&mut self) -> Option<SaveRequest> {
        let photo = self.photo.as_ref()?;
        self.save_token += 1;
        self.state = EditorState::Saving;
        Some(SaveRequest {
            token: self.save_token,
            hash: photo.hash.clone(),
            caption: self.draft.clone(),
        })
    }

    /// 保存成功の反映
    ///
    /// トークンが最新ディスパッチと一致しないレスポンスは捨てる
    /// （last-dispatched-wins）。レコードはサーバの返答で差し替える。
    /// ただしディスパッチ後にユーザーが打鍵していたら（デバウンスが
    /// 再armされていたら）ドラフトは潰さない — 次のサイクルが新しい
    /// テキストを保存する。
    pub fn apply_save_success(&mut self, token: u64, photo: Photo) {
        if token != self.save_token {
            return;
        }
        if self.armed.is_none() {
            self.draft = photo.caption.clone().unwrap_or_default();
        }
        self.photo = Some(photo);
        self.state = EditorState::Ready;
    }

    /// 保存失敗の反映
    ///
    /// ドラフトは決して巻き戻さない。自動リトライはせず、次の
    /// 編集+デバウンスが暗黙のリトライ経路になる。
    pub fn apply_save_failure(&mut self, token: u64, error: ApiError) {
        if token != self.save_token {
            return;
        }
        self.state = EditorState::SaveFailed(error);
    }
}

impl Default for CaptionController {
    fn default() -> Self {
        Self::new()
    }
}
