//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::locale::Language;

/// Wrapper type for displaying a one-line operation outcome.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    pub lang: Language,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            lang: Language::default(),
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            lang: Language::default(),
        }
    }

    /// Render the status prefix in another language.
    pub fn in_language(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success {
            self.lang.pick("Success:", "Succès :")
        } else {
            self.lang.pick("Error:", "Erreur :")
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}
