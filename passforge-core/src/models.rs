use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 100;
pub const DEFAULT_LENGTH: usize = 10;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Symbols,
}

impl CharClass {
    /// Pool order used by the generator.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharClass::Upper => "UPPERCASE LETTERS",
            CharClass::Lower => "LOWERCASE LETTERS",
            CharClass::Digits => "NUMBERS",
            CharClass::Symbols => "SYMBOLS",
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.alphabet().contains(ch)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GenerationRequest {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.include_upper,
            CharClass::Lower => self.include_lower,
            CharClass::Digits => self.include_digits,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        match class {
            CharClass::Upper => self.include_upper = on,
            CharClass::Lower => self.include_lower = on,
            CharClass::Digits => self.include_digits = on,
            CharClass::Symbols => self.include_symbols = on,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let on = self.includes(class);
        self.set(class, !on);
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.includes(*c))
    }

    /// Concatenated alphabets of the enabled classes, in `CharClass::ALL` order.
    pub fn pool(&self) -> Vec<char> {
        self.enabled_classes()
            .flat_map(|c| c.alphabet().chars())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPassword {
    value: String,
    request: GenerationRequest,
}

impl GeneratedPassword {
    pub(crate) fn new(value: String, request: GenerationRequest) -> Self {
        Self { value, request }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub save_path: PathBuf,
    pub dark_mode: bool,
}

impl Settings {
    pub fn new(save_path: impl Into<PathBuf>, dark_mode: bool) -> Self {
        Self {
            save_path: save_path.into(),
            dark_mode,
        }
    }
}
