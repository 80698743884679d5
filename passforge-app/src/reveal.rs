use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Opens `dir` in the platform file browser without waiting for it.
pub fn open_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("The path does not exist!");
    }

    #[cfg(target_os = "windows")]
    let mut cmd = Command::new("explorer");
    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut cmd = Command::new("xdg-open");

    cmd.arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("could not open {}", dir.display()))?;
    tracing::info!(dir = %dir.display(), "opened output directory");
    Ok(())
}
