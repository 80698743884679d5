use directories::{BaseDirs, UserDirs};
use std::path::PathBuf;

pub const SETTINGS_FILE_NAME: &str = "password_app_config.json";
pub const SAVED_PASSWORDS_DIR: &str = "Saved Passwords";

pub fn documents_dir() -> PathBuf {
    if let Some(docs) = UserDirs::new().and_then(|u| u.document_dir().map(|d| d.to_path_buf())) {
        return docs;
    }
    if let Some(base) = BaseDirs::new() {
        return base.home_dir().join("Documents");
    }
    // Fallback: current dir
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn default_settings_file() -> PathBuf {
    documents_dir().join(SETTINGS_FILE_NAME)
}

pub fn default_save_path() -> PathBuf {
    documents_dir().join(SAVED_PASSWORDS_DIR)
}
