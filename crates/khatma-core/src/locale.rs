//! English/French language selection for rendered text.

use std::{fmt, str::FromStr};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Selects the string for this language from an English/French pair.
    ///
    /// ```rust
    /// use khatma_core::locale::Language;
    ///
    /// assert_eq!(Language::French.pick("Dashboard", "Tableau de bord"), "Tableau de bord");
    /// ```
    pub fn pick(self, en: &'static str, fr: &'static str) -> &'static str {
        match self {
            Language::English => en,
            Language::French => fr,
        }
    }

    pub fn code(self) -> &'static str {
        self.pick("en", "fr")
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "fr" | "french" | "français" | "francais" => Ok(Language::French),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
