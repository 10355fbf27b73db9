//! Lookup collaborators feeding the aggregator.
//!
//! Each trait declares an indexed per-repair accessor with a default
//! implementation that scans `get_all`. Whether a backend actually has
//! an index is that backend's concern: scan-only sources implement
//! just `get_all` and inherit the fallbacks, indexed sources override
//! the per-repair accessors. The aggregator always calls the same
//! methods either way.

pub mod memory;

pub use memory::{MemoryStore, OrderStore, PartsStore, QuoteStore};

use std::collections::HashSet;

use crate::errors::LookupError;
use crate::models::{Linked, PartRequest, PurchaseOrder, Quote};

fn scan_for_repair<T: Linked>(all: Vec<T>, repair_id: &str) -> Vec<T> {
    all.into_iter()
        .filter(|record| record.repair_id() == repair_id)
        .collect()
}

fn scan_for_repairs<T: Linked>(all: Vec<T>, repair_ids: &[String]) -> Vec<T> {
    let ids: HashSet<&str> = repair_ids.iter().map(String::as_str).collect();
    all.into_iter()
        .filter(|record| ids.contains(record.repair_id()))
        .collect()
}

/// Read-only source of part requests.
pub trait PartsLookup: Send + Sync {
    fn get_all(&self) -> Result<Vec<PartRequest>, LookupError>;

    fn get_for_repair(&self, repair_id: &str) -> Result<Vec<PartRequest>, LookupError> {
        Ok(scan_for_repair(self.get_all()?, repair_id))
    }

    /// Union of the records for a set of repairs. The default scans
    /// the full table once with id-set membership; indexed backends
    /// override with per-id index hits.
    fn get_for_repairs(&self, repair_ids: &[String]) -> Result<Vec<PartRequest>, LookupError> {
        Ok(scan_for_repairs(self.get_all()?, repair_ids))
    }
}

/// Read-only source of quotes.
pub trait QuoteLookup: Send + Sync {
    fn get_all(&self) -> Result<Vec<Quote>, LookupError>;

    fn get_for_repair(&self, repair_id: &str) -> Result<Vec<Quote>, LookupError> {
        Ok(scan_for_repair(self.get_all()?, repair_id))
    }

    fn get_for_repairs(&self, repair_ids: &[String]) -> Result<Vec<Quote>, LookupError> {
        Ok(scan_for_repairs(self.get_all()?, repair_ids))
    }
}

/// Read-only source of purchase orders.
pub trait OrderLookup: Send + Sync {
    fn get_all(&self) -> Result<Vec<PurchaseOrder>, LookupError>;

    fn get_for_repair(&self, repair_id: &str) -> Result<Vec<PurchaseOrder>, LookupError> {
        Ok(scan_for_repair(self.get_all()?, repair_id))
    }

    fn get_for_repairs(&self, repair_ids: &[String]) -> Result<Vec<PurchaseOrder>, LookupError> {
        Ok(scan_for_repairs(self.get_all()?, repair_ids))
    }
}
