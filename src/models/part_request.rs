use serde::{Deserialize, Serialize};

use super::Linked;

/// Enum representing the possible statuses of a part request.
///
/// The vocabulary is fixed and owned by the parts service. `Cancelled`
/// requests are excluded from every aggregate alongside deleted ones.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PartStatus {
    Requested,
    Quoted,
    Ordered,
    Arrived,
    Replaced,
    Cancelled,
}

/// One line-item of parts needed for a repair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartRequest {
    /// Unique identifier for the part request.
    pub id: String,
    /// Identifier of the repair ticket this request belongs to.
    pub repair_id: String,
    /// Current lifecycle status.
    pub status: PartStatus,
    /// Reference to the purchase order covering this request, once one
    /// has been attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Soft-delete marker; deleted requests contribute to nothing.
    #[serde(default)]
    pub is_deleted: bool,
}

impl PartRequest {
    pub fn new(
        id: impl Into<String>,
        repair_id: impl Into<String>,
        status: PartStatus,
    ) -> Self {
        Self {
            id: id.into(),
            repair_id: repair_id.into(),
            status,
            order_id: None,
            is_deleted: false,
        }
    }

    pub fn with_order(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// An order reference counts as "set" only when present and
    /// non-blank; upstream stores leave cleared references as empty
    /// strings rather than removing the field.
    pub fn has_order_ref(&self) -> bool {
        self.order_id
            .as_deref()
            .map_or(false, |oid| !oid.trim().is_empty())
    }
}

impl Linked for PartRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn repair_id(&self) -> &str {
        &self.repair_id
    }
}
