//! Book kinds a reading plan can be built around.

use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// Page count of the fixed canonical text (standard Madani mushaf).
pub const FIXED_WORK_PAGES: u32 = 602;

/// The book a plan is divided over.
///
/// Serialized with a `bookType` tag (`"quran"` or `"custom"`) and an
/// optional `bookName`, so it can be flattened into the plan document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "bookType")]
pub enum BookKind {
    /// The Quran, with a known fixed length
    #[serde(rename = "quran")]
    FixedWork,

    /// Any other book, named by the user
    #[serde(rename = "custom")]
    CustomWork {
        #[serde(rename = "bookName")]
        name: String,
    },
}

impl BookKind {
    /// Page count implied by the kind, if it has one.
    pub fn default_pages(&self) -> Option<u32> {
        match self {
            BookKind::FixedWork => Some(FIXED_WORK_PAGES),
            BookKind::CustomWork { .. } => None,
        }
    }

    /// Short identifier used on the command line and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookKind::FixedWork => "quran",
            BookKind::CustomWork { .. } => "custom",
        }
    }

    /// Heading shown for plans over this book.
    pub fn title(&self, lang: Language) -> String {
        match self {
            BookKind::FixedWork => lang.pick("Quran Reading", "Lecture du Coran").to_string(),
            BookKind::CustomWork { name } => name.clone(),
        }
    }
}
