use thiserror::Error;

// Display strings double as the status line text shown to the user.

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Select at least one option")]
    NoCharacterClassSelected,
    #[error("Password length must be at least 1")]
    InvalidLength,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Generate a password first")]
    NoPasswordAvailable,
    #[error("Enter a password name")]
    EmptyName,
    #[error("Password name cannot contain path separators")]
    InvalidName,
    #[error("Path does not exist!")]
    DirectoryNotFound,
    #[error("Could not write password file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Generate a password first")]
    NoPasswordAvailable,
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not write settings: {0}")]
    Serialize(#[from] serde_json::Error),
}
