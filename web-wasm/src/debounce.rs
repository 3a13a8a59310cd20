//! デバウンスタイマーのスコープ付きハンドル
//!
//! 生のタイマーIDを浮かせたままにせず、保留中のタイムアウトを
//! 最大1つだけ所有するハンドルにまとめる。張り直しは前のタイマーの
//! 破棄（= キャンセル）を兼ね、リアクティブオーナーの破棄時にも
//! 保留分が必ず取り消される。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// 保留中のタイムアウトを1つだけ持つデバウンスハンドル
///
/// `gloo`の`Timeout`はdropでキャンセルされるので、スロットの
/// 入れ替え・取り出しがそのまま取り消しになる。
#[derive(Clone, Copy)]
pub struct Debounce {
    slot: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debounce {
    /// 現在のリアクティブオーナーにteardown時のキャンセルを登録する
    pub fn new() -> Self {
        let slot = StoredValue::new_local(None);
        on_cleanup(move || slot.update_value(|pending| *pending = None));
        Self { slot }
    }

    /// `millis`後に`callback`を発火するタイマーを張る。
    /// 既に張られていたタイマーは取り消される。
    pub fn arm(&self, millis: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, callback);
        self.slot.update_value(|pending| *pending = Some(timeout));
    }

    /// 保留中のタイマーを取り消す
    pub fn cancel(&self) {
        self.slot.update_value(|pending| *pending = None);
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new()
    }
}
