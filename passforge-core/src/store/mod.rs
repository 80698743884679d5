use crate::{Settings, SettingsError};

pub mod memory;

pub trait SettingsRepository {
    /// Never fails; implementations fall back to defaults.
    fn load(&self) -> Settings;
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}
