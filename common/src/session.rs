//! セッションフラグの読み書き
//!
//! 認証状態はブラウザのlocalStorageに入る単なるboolean。直接
//! グローバルを触らず、読み書きを差し替え可能なコラボレータとして
//! 切り出しておく（テストでは`MemorySession`を注入する）。

use std::cell::Cell;

/// localStorage上のフラグのキー名
pub const SESSION_KEY: &str = "authenticated";

/// 認証フラグの保存先
pub trait SessionStore {
    fn read(&self) -> bool;
    fn write(&self, authenticated: bool);
    /// ログアウト時に呼ぶ。以後`read`はfalseを返す
    fn clear(&self);
}

/// テスト用のインメモリ実装
#[derive(Debug, Default)]
pub struct MemorySession(Cell<bool>);

impl SessionStore for MemorySession {
    fn read(&self) -> bool {
        self.0.get()
    }

    fn write(&self, authenticated: bool) {
        self.0.set(authenticated);
    }

    fn clear(&self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_unauthenticated() {
        let session = MemorySession::default();
        assert!(!session.read());
    }

    #[test]
    fn test_write_then_read() {
        let session = MemorySession::default();
        session.write(true);
        assert!(session.read());
        session.write(false);
        assert!(!session.read());
    }

    #[test]
    fn test_clear_resets_flag() {
        let session = MemorySession::default();
        session.write(true);
        session.clear();
        assert!(!session.read());
    }
}
