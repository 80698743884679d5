use passforge_core::{Settings, SettingsError, SettingsRepository};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub mod paths;

/// On-disk shape. Each key is read on its own: a missing or mistyped key
/// falls back to its default without discarding the others.
#[derive(Default, Serialize, Deserialize)]
struct FileImage {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    save_path: Option<PathBuf>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    dark_mode: Option<bool>,
}

fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(serde_json::from_value(value).ok())
}

impl FileImage {
    fn from_settings(s: &Settings) -> Self {
        Self {
            save_path: Some(s.save_path.clone()),
            dark_mode: Some(s.dark_mode),
        }
    }

    fn into_settings(self, defaults: Settings) -> Settings {
        Settings {
            save_path: self.save_path.unwrap_or(defaults.save_path),
            dark_mode: self.dark_mode.unwrap_or(defaults.dark_mode),
        }
    }
}

pub fn default_settings() -> Settings {
    Settings::new(paths::default_save_path(), false)
}

pub struct SettingsStore {
    path: PathBuf,
    defaults: Settings,
}

impl SettingsStore {
    pub fn open_default() -> Self {
        Self::open_with(paths::default_settings_file(), default_settings())
    }

    pub fn open_with(path: PathBuf, defaults: Settings) -> Self {
        Self { path, defaults }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }

    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            let settings = self.defaults.clone();
            match self.save(&settings) {
                Ok(()) => {
                    tracing::info!(path = %self.path.display(), "created default settings file")
                }
                Err(e) => tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not create settings file"
                ),
            }
            return settings;
        }

        match read_image(&self.path) {
            Ok(img) => img.into_settings(self.defaults.clone()),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unreadable settings file, using defaults"
                );
                self.defaults.clone()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_vec_pretty(&FileImage::from_settings(settings))?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }
}

impl SettingsRepository for SettingsStore {
    fn load(&self) -> Settings {
        SettingsStore::load(self)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        SettingsStore::save(self, settings)
    }
}

fn read_image(path: &Path) -> io::Result<FileImage> {
    let buf = fs::read_to_string(path)?;
    let img = serde_json::from_str::<FileImage>(&buf)?;
    Ok(img)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
