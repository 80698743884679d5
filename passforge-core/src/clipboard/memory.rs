use crate::{clipboard::Clipboard, ExportError};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails, for exercising error paths.
    pub fn unavailable() -> Self {
        Self {
            contents: Mutex::new(None),
            unavailable: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ExportError> {
        if self.unavailable {
            return Err(ExportError::Clipboard("no clipboard".into()));
        }
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}
