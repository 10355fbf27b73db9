use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repair ticket, as seen by the serial-scoped aggregator.
///
/// Only the identifier and timestamps matter here; everything else a
/// ticket carries (customer, symptoms, work logs) stays with the
/// repairs service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepairTicket {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl RepairTicket {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            serial_number: None,
            updated_at: None,
            created_at: None,
            is_deleted: false,
        }
    }

    /// Timestamp used when picking the most recently touched ticket:
    /// last update, falling back to creation time, then the epoch.
    pub fn effective_timestamp(&self) -> i64 {
        self.updated_at
            .or(self.created_at)
            .map_or(0, |t| t.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn effective_timestamp_prefers_updated_at() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let mut ticket = RepairTicket::new("R1");
        assert_eq!(ticket.effective_timestamp(), 0);

        ticket.created_at = Some(created);
        assert_eq!(ticket.effective_timestamp(), created.timestamp_millis());

        ticket.updated_at = Some(updated);
        assert_eq!(ticket.effective_timestamp(), updated.timestamp_millis());
    }
}
