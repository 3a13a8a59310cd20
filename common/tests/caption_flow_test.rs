//! キャプション編集フローの結合テスト
//!
//! ロード→編集→デバウンス保存→サーバエコー反映までを、UI層を
//! 介さずコントローラだけで通しで検証する

use captioner_common::{ApiError, CaptionController, EditorState, Photo};

fn server_photo(caption: Option<&str>) -> Photo {
    Photo {
        hash: "c0ffee".to_string(),
        filename: "sunset.jpg".to_string(),
        caption: caption.map(str::to_string),
    }
}

/// マウント→ロード→タイプ→デバウンス発火→エコー反映のハッピーパス
#[test]
fn test_full_edit_and_autosave_cycle() {
    let mut editor = CaptionController::new();
    assert_eq!(*editor.state(), EditorState::Loading);

    editor.apply_load_success(server_photo(None));
    assert_eq!(editor.draft(), "");

    // タイプ中はキーストロークごとにタイマーが張り直される
    let mut last_token = 0;
    for text in ["G", "Go", "Gol", "Golden hour"] {
        last_token = editor.edit(text).expect("photo is loaded");
    }

    // 発火するのは最後のタイマーだけ
    let request = editor.debounce_fired(last_token).expect("one save dispatched");
    assert_eq!(request.caption, "Golden hour");
    assert_eq!(request.hash, "c0ffee");
    assert_eq!(*editor.state(), EditorState::Saving);

    // サーバのエコーが正となる
    editor.apply_save_success(request.token, server_photo(Some("Golden hour")));
    assert_eq!(*editor.state(), EditorState::Ready);
    assert_eq!(editor.draft(), "Golden hour");
}

/// 保存失敗→そのまま打ち直し→次のサイクルで回復する暗黙リトライ経路
#[test]
fn test_failed_save_recovers_on_next_cycle() {
    let mut editor = CaptionController::new();
    editor.apply_load_success(server_photo(Some("old")));

    let request = editor
        .edit("new caption")
        .and_then(|t| editor.debounce_fired(t))
        .expect("save dispatched");
    editor.apply_save_failure(request.token, ApiError::Network("Failed to fetch".to_string()));

    // ドラフトは巻き戻らない
    assert_eq!(editor.draft(), "new caption");
    assert_eq!(
        editor.status_line().unwrap(),
        "Save failed: Couldn’t reach the backend. Is it running?"
    );

    // 次の編集+デバウンスが成功すれば普通にReadyへ戻る
    let retry = editor
        .edit("new caption!")
        .and_then(|t| editor.debounce_fired(t))
        .expect("retry dispatched");
    editor.apply_save_success(retry.token, server_photo(Some("new caption!")));
    assert_eq!(*editor.state(), EditorState::Ready);
}

/// Nextで次のランダム写真へ移ると、前の写真の編集サイクルは無効になる
#[test]
fn test_next_random_photo_supersedes_previous_cycle() {
    let mut editor = CaptionController::new();
    editor.apply_load_success(server_photo(Some("first")));

    let pending = editor.edit("typed but not saved").unwrap();
    let inflight = editor.save_now().expect("save dispatched");

    editor.begin_load();
    assert_eq!(*editor.state(), EditorState::Loading);

    let next = Photo {
        hash: "deadbeef".to_string(),
        filename: "harbor.jpg".to_string(),
        caption: None,
    };
    editor.apply_load_success(next);

    // 前の写真向けのタイマー発火と保存レスポンスはどちらも捨てられる
    assert_eq!(editor.debounce_fired(pending), None);
    editor.apply_save_success(inflight.token, server_photo(Some("typed but not saved")));

    assert_eq!(editor.photo().unwrap().hash, "deadbeef");
    assert_eq!(editor.draft(), "");
    assert_eq!(*editor.state(), EditorState::Ready);
}
