use serde::{Deserialize, Serialize};

use super::{Linked, StatusRecord};

/// A price quotation tied to a repair ticket.
///
/// Status is a free-form string; the quote service writes values from
/// [`crate::stages::QUOTE_STATUS_ORDER`] but unknown values must be
/// tolerated and preserved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub repair_id: String,
    pub status: String,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Quote {
    pub fn new(
        id: impl Into<String>,
        repair_id: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            repair_id: repair_id.into(),
            status: status.into(),
            is_deleted: false,
        }
    }
}

impl Linked for Quote {
    fn id(&self) -> &str {
        &self.id
    }

    fn repair_id(&self) -> &str {
        &self.repair_id
    }
}

impl StatusRecord for Quote {
    fn status(&self) -> &str {
        &self.status
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
