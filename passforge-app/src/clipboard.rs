use passforge_core::{Clipboard, ExportError};
use std::cell::RefCell;

/// System clipboard via `arboard`. The handle is kept for the lifetime of
/// this value; on X11/Wayland the contents are served only while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: RefCell<Option<arboard::Clipboard>>,
    until_replaced: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// For one-shot commands that exit right after copying: on Linux each
    /// write blocks until another program takes over the clipboard.
    pub fn until_replaced() -> Self {
        Self {
            inner: RefCell::new(None),
            until_replaced: true,
        }
    }

    pub fn holds_until_replaced(&self) -> bool {
        self.until_replaced
    }

    #[cfg(target_os = "linux")]
    fn set_text_blocking(cb: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
        use arboard::SetExtLinux;
        cb.set().wait().text(text.to_string())
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text_blocking(cb: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
        cb.set_text(text.to_string())
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ExportError> {
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            let cb = arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
            *slot = Some(cb);
        }
        let Some(cb) = slot.as_mut() else {
            return Err(ExportError::Clipboard("not initialized".into()));
        };
        let res = if self.until_replaced {
            Self::set_text_blocking(cb, text)
        } else {
            cb.set_text(text.to_string())
        };
        res.map_err(|e| ExportError::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_clipboard_holds_contents() {
        assert!(SystemClipboard::until_replaced().holds_until_replaced());
        assert!(!SystemClipboard::new().holds_until_replaced());
    }
}
