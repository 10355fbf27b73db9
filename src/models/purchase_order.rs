use serde::{Deserialize, Serialize};

use super::{Linked, StatusRecord};

/// A procurement order tied to a repair ticket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub repair_id: String,
    pub status: String,
    #[serde(default)]
    pub is_deleted: bool,
}

impl PurchaseOrder {
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

impl Linked for PurchaseOrder {
    fn id(&self) -> &str {
        &self.id
    }

    fn repair_id(&self) -> &str {
        &self.repair_id
    }
}

impl StatusRecord for PurchaseOrder {
    fn status(&self) -> &str {
        &self.status
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
