use crate::ExportError;

pub mod memory;

/// Destination for copied passwords.
pub trait Clipboard {
    fn set_text(&self, text: &str) -> Result<(), ExportError>;
}

impl<C: Clipboard + ?Sized> Clipboard for &C {
    fn set_text(&self, text: &str) -> Result<(), ExportError> {
        (**self).set_text(text)
    }
}

/// Replaces the clipboard contents with `password`.
pub fn copy_current<C: Clipboard + ?Sized>(
    password: &str,
    clipboard: &C,
) -> Result<(), ExportError> {
    if password.is_empty() {
        return Err(ExportError::NoPasswordAvailable);
    }
    clipboard.set_text(password)?;
    tracing::info!("copied password to clipboard");
    Ok(())
}
