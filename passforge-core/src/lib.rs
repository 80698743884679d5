pub mod clipboard;
pub mod errors;
pub mod generator;
pub mod models;
pub mod persistence;
pub mod session;
pub mod store;
pub mod theme;

pub use clipboard::{copy_current, memory::MemoryClipboard, Clipboard};
pub use errors::*;
pub use generator::*;
pub use models::*;
pub use persistence::{password_file_path, save};
pub use session::*;
pub use store::{memory::MemorySettings, SettingsRepository};
pub use theme::{Palette, Rgb};
