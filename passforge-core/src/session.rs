use crate::{
    clipboard::{self, Clipboard},
    generator, persistence,
    store::SettingsRepository,
    theme::Palette,
    ExportError, GeneratedPassword, GenerationError, GenerationRequest, PersistenceError, Settings,
    SettingsError,
};
use rand::Rng;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line feedback for the user after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(err: impl std::fmt::Display) -> Self {
        Self {
            kind: StatusKind::Error,
            text: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// Application state: the applied settings and the current password.
pub struct Session {
    settings: Settings,
    current: Option<GeneratedPassword>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            current: None,
        }
    }

    pub fn open<S: SettingsRepository + ?Sized>(store: &S) -> Self {
        Self::new(store.load())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.settings.dark_mode)
    }

    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    fn current_str(&self) -> &str {
        self.current.as_ref().map(|p| p.as_str()).unwrap_or("")
    }

    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<&GeneratedPassword, GenerationError> {
        self.generate_with(request, &mut rand::thread_rng())
    }

    /// Replaces the current password on success; a failed attempt keeps the previous one.
    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<&GeneratedPassword, GenerationError> {
        let value = generator::generate_with(request, rng)?;
        Ok(self.current.insert(GeneratedPassword::new(value, request.clone())))
    }

    pub fn save_current(&self, name: &str) -> Result<PathBuf, PersistenceError> {
        persistence::save(self.current_str(), name, &self.settings.save_path)
    }

    pub fn copy_current<C: Clipboard + ?Sized>(&self, clipboard: &C) -> Result<(), ExportError> {
        clipboard::copy_current(self.current_str(), clipboard)
    }

    /// Persists `settings` and, only once written, makes them the applied settings.
    pub fn apply_settings<S: SettingsRepository + ?Sized>(
        &mut self,
        settings: Settings,
        store: &S,
    ) -> Result<(), SettingsError> {
        store.save(&settings)?;
        tracing::info!(
            save_path = %settings.save_path.display(),
            dark_mode = settings.dark_mode,
            "applied settings"
        );
        self.settings = settings;
        Ok(())
    }

    pub fn generate_status(&mut self, request: &GenerationRequest) -> Status {
        match self.generate(request) {
            Ok(p) => Status::info(p.as_str()),
            Err(e) => Status::error(e),
        }
    }

    pub fn save_status(&self, name: &str) -> Status {
        match self.save_current(name) {
            Ok(_) => Status::success("Password saved successfully!"),
            Err(e) => Status::error(e),
        }
    }

    pub fn copy_status<C: Clipboard + ?Sized>(&self, clipboard: &C) -> Status {
        match self.copy_current(clipboard) {
            Ok(()) => Status::success("Password copied to clipboard!"),
            Err(e) => Status::error(e),
        }
    }

    pub fn apply_status<S: SettingsRepository + ?Sized>(
        &mut self,
        settings: Settings,
        store: &S,
    ) -> Status {
        match self.apply_settings(settings, store) {
            Ok(()) => Status::success("Settings applied"),
            Err(e) => Status::error(e),
        }
    }
}
