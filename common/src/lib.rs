//! Captioner Common Library
//!
//! Web(WASM)クライアントと共有される型とキャプション編集ロジック

pub mod editor;
pub mod error;
pub mod session;
pub mod types;

pub use editor::{load_error_message, CaptionController, EditorState, SaveRequest, DEBOUNCE_MS};
pub use error::ApiError;
pub use session::{MemorySession, SessionStore, SESSION_KEY};
pub use types::{CaptionPatch, LoginRequest, LoginResponse, Photo};
