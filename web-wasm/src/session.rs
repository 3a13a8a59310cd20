//! ブラウザセッション
//!
//! 認証フラグをlocalStorageの固定キーに保存する`SessionStore`実装

use captioner_common::{SessionStore, SESSION_KEY};
use gloo::storage::{LocalStorage, Storage};

/// localStorageを使うセッションストア
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn read(&self) -> bool {
        LocalStorage::get(SESSION_KEY).unwrap_or(false)
    }

    fn write(&self, authenticated: bool) {
        let _ = LocalStorage::set(SESSION_KEY, authenticated);
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn session_flag_roundtrip() {
        let session = BrowserSession;
        session.write(true);
        assert!(session.read());
        session.clear();
        assert!(!session.read());
    }
}
