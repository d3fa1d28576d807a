//! Participant model definition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::PageRange;

/// One assignee within a plan, owning a contiguous page range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique identifier, generated with the plan
    pub id: Uuid,

    /// Display name (trimmed, never empty)
    pub name: String,

    /// First assigned page (1-based, inclusive)
    pub start_page: u32,

    /// Last assigned page (inclusive)
    pub end_page: u32,

    /// Daily quota to finish the range within the plan's window
    pub pages_per_day: u32,

    /// Percentage of the range read, in `[0, 100]`
    pub progress: f64,
}

impl Participant {
    /// The assigned page range.
    pub fn range(&self) -> PageRange {
        PageRange {
            start_page: self.start_page,
            end_page: self.end_page,
        }
    }

    /// Number of pages assigned.
    pub fn range_width(&self) -> u32 {
        self.range().width()
    }

    /// Pages read, reconstructed from the stored percentage.
    pub fn pages_read_estimate(&self) -> u32 {
        (self.progress * f64::from(self.range_width()) / 100.0).round() as u32
    }

    /// Whether the whole range has been read.
    pub fn is_finished(&self) -> bool {
        self.progress >= 100.0
    }
}
