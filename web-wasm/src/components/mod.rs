//! UIコンポーネント

pub mod caption_editor;
pub mod gallery;
pub mod header;
pub mod login_form;
pub mod logout_button;
pub mod upload_photo;
