//! Pure summarizers turning entity collections into status summaries.
//!
//! Everything here is synchronous, side-effect-free, and idempotent:
//! the same input snapshot always produces the same summary.

pub mod parts;
pub mod status;

pub use parts::{summarize_parts, PartSummary};
pub use status::{summarize_status, StatusSummary};

use serde::{Deserialize, Serialize};

/// Label reported when a repair has no part requests at all.
pub const NO_PARTS_LABEL: &str = "none";

/// Label reported when a repair has no quotes / purchase orders yet.
pub const NOT_CREATED_LABEL: &str = "not-created";

/// The single most-urgent status chosen to represent a whole
/// collection in a compact UI chip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Primary {
    pub label: String,
    pub count: usize,
    pub total: usize,
}

impl Primary {
    pub fn new(label: impl Into<String>, count: usize, total: usize) -> Self {
        Self {
            label: label.into(),
            count,
            total,
        }
    }

    /// The empty-collection placeholder for part summaries.
    pub fn no_parts() -> Self {
        Self::new(NO_PARTS_LABEL, 0, 0)
    }

    /// The empty-collection placeholder for vocabulary summaries.
    pub fn not_created() -> Self {
        Self::new(NOT_CREATED_LABEL, 0, 0)
    }
}
