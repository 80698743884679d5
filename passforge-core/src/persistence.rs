use crate::PersistenceError;
use std::fs;
use std::path::{Path, PathBuf};

pub const PASSWORD_FILE_EXTENSION: &str = "txt";

pub fn password_file_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(format!("{name}.{PASSWORD_FILE_EXTENSION}"))
}

/// The file must land directly inside the output directory.
fn is_plain_name(name: &str) -> bool {
    !name.contains(['/', '\\'])
}

/// Writes `password` verbatim to `<directory>/<name>.txt`.
///
/// The directory must already exist; it is never created. An existing file
/// with the same name is truncated and replaced without prompting.
pub fn save(
    password: &str,
    name: &str,
    directory: &Path,
) -> Result<PathBuf, PersistenceError> {
    if password.is_empty() {
        return Err(PersistenceError::NoPasswordAvailable);
    }
    if name.trim().is_empty() {
        return Err(PersistenceError::EmptyName);
    }
    if !is_plain_name(name) {
        return Err(PersistenceError::InvalidName);
    }
    if !directory.is_dir() {
        return Err(PersistenceError::DirectoryNotFound);
    }

    let path = password_file_path(directory, name);
    fs::write(&path, password)?;
    tracing::info!(path = %path.display(), "saved password file");
    Ok(path)
}
