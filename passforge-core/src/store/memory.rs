use crate::{store::SettingsRepository, Settings, SettingsError};
use parking_lot::RwLock;

pub struct MemorySettings {
    settings: RwLock<Settings>,
    saves: RwLock<usize>,
}

impl MemorySettings {
    pub fn new(initial: Settings) -> Self {
        Self {
            settings: RwLock::new(initial),
            saves: RwLock::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        *self.saves.read()
    }
}

impl SettingsRepository for MemorySettings {
    fn load(&self) -> Settings {
        self.settings.read().clone()
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        *self.settings.write() = settings.clone();
        *self.saves.write() += 1;
        Ok(())
    }
}
