use dashmap::DashMap;

use crate::errors::LookupError;
use crate::models::{Linked, PartRequest, PurchaseOrder, Quote};

use super::{OrderLookup, PartsLookup, QuoteLookup};

/// In-memory record store with a repair-id index.
///
/// Holds a snapshot of one entity type, typically hydrated by the
/// host's sync layer, and serves the indexed lookups the aggregator
/// prefers. Concurrent readers and writers are fine; each call sees
/// whatever snapshot the store currently holds.
pub struct MemoryStore<T> {
    records: DashMap<String, T>,
    by_repair: DashMap<String, Vec<String>>,
}

pub type PartsStore = MemoryStore<PartRequest>;
pub type QuoteStore = MemoryStore<Quote>;
pub type OrderStore = MemoryStore<PurchaseOrder>;

impl<T: Linked + Clone> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            by_repair: DashMap::new(),
        }
    }

    /// Inserts or replaces a record, keeping the repair index in step
    /// when a record moves between repairs.
    pub fn upsert(&self, record: T) {
        let id = record.id().to_string();
        let repair_id = record.repair_id().to_string();

        if let Some(previous) = self.records.insert(id.clone(), record) {
            if previous.repair_id() == repair_id {
                return;
            }
            self.unindex(previous.repair_id(), &id);
        }

        self.by_repair.entry(repair_id).or_default().push(id);
    }

    pub fn remove(&self, id: &str) -> Option<T> {
        let (_, removed) = self.records.remove(id)?;
        self.unindex(removed.repair_id(), id);
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.records.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&self) {
        self.records.clear();
        self.by_repair.clear();
    }

    fn unindex(&self, repair_id: &str, id: &str) {
        if let Some(mut bucket) = self.by_repair.get_mut(repair_id) {
            bucket.retain(|rid| rid != id);
        }
    }

    fn snapshot(&self) -> Vec<T> {
        self.records
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn indexed_for_repair(&self, repair_id: &str) -> Vec<T> {
        match self.by_repair.get(repair_id) {
            Some(ids) => ids
                .iter()
                .filter_map(|id| self.records.get(id).map(|entry| entry.value().clone()))
                .collect(),
            None => Vec::new(),
        }
    }

    fn indexed_for_repairs(&self, repair_ids: &[String]) -> Vec<T> {
        let mut out = Vec::new();
        for repair_id in repair_ids {
            out.extend(self.indexed_for_repair(repair_id));
        }
        out
    }
}

impl<T: Linked + Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl PartsLookup for MemoryStore<PartRequest> {
    fn get_all(&self) -> Result<Vec<PartRequest>, LookupError> {
        Ok(self.snapshot())
    }

    fn get_for_repair(&self, repair_id: &str) -> Result<Vec<PartRequest>, LookupError> {
        Ok(self.indexed_for_repair(repair_id))
    }

    fn get_for_repairs(&self, repair_ids: &[String]) -> Result<Vec<PartRequest>, LookupError> {
        Ok(self.indexed_for_repairs(repair_ids))
    }
}

impl QuoteLookup for MemoryStore<Quote> {
    fn get_all(&self) -> Result<Vec<Quote>, LookupError> {
        Ok(self.snapshot())
    }

    fn get_for_repair(&self, repair_id: &str) -> Result<Vec<Quote>, LookupError> {
        Ok(self.indexed_for_repair(repair_id))
    }

    fn get_for_repairs(&self, repair_ids: &[String]) -> Result<Vec<Quote>, LookupError> {
        Ok(self.indexed_for_repairs(repair_ids))
    }
}

impl OrderLookup for MemoryStore<PurchaseOrder> {
    fn get_all(&self) -> Result<Vec<PurchaseOrder>, LookupError> {
        Ok(self.snapshot())
    }

    fn get_for_repair(&self, repair_id: &str) -> Result<Vec<PurchaseOrder>, LookupError> {
        Ok(self.indexed_for_repair(repair_id))
    }

    fn get_for_repairs(&self, repair_ids: &[String]) -> Result<Vec<PurchaseOrder>, LookupError> {
        Ok(self.indexed_for_repairs(repair_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartStatus;

    #[test]
    fn upsert_indexes_by_repair() {
        let store = PartsStore::new();
        store.upsert(PartRequest::new("P1", "R1", PartStatus::Requested));
        store.upsert(PartRequest::new("P2", "R1", PartStatus::Quoted));
        store.upsert(PartRequest::new("P3", "R2", PartStatus::Ordered));

        assert_eq!(store.len(), 3);
        assert_eq!(store.get_for_repair("R1").unwrap().len(), 2);
        assert_eq!(store.get_for_repair("R2").unwrap().len(), 1);
        assert!(store.get_for_repair("R3").unwrap().is_empty());
    }

    #[test]
    fn upsert_replaces_without_duplicating_the_index() {
        let store = PartsStore::new();
        store.upsert(PartRequest::new("P1", "R1", PartStatus::Requested));
        store.upsert(PartRequest::new("P1", "R1", PartStatus::Quoted));

        let hits = store.get_for_repair("R1").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].status, PartStatus::Quoted);
    }

    #[test]
    fn upsert_moves_records_between_repairs() {
        let store = PartsStore::new();
        store.upsert(PartRequest::new("P1", "R1", PartStatus::Requested));
        store.upsert(PartRequest::new("P1", "R2", PartStatus::Requested));

        assert!(store.get_for_repair("R1").unwrap().is_empty());
        assert_eq!(store.get_for_repair("R2").unwrap().len(), 1);
    }

    #[test]
    fn remove_drops_the_index_entry_too() {
        let store = PartsStore::new();
        store.upsert(PartRequest::new("P1", "R1", PartStatus::Requested));

        let removed = store.remove("P1");
        assert!(removed.is_some());
        assert!(store.is_empty());
        assert!(store.get_for_repair("R1").unwrap().is_empty());
        assert!(store.remove("P1").is_none());
    }

    #[test]
    fn get_for_repairs_unions_in_id_order() {
        let store = PartsStore::new();
        store.upsert(PartRequest::new("P1", "R1", PartStatus::Requested));
        store.upsert(PartRequest::new("P2", "R2", PartStatus::Quoted));

        let ids = vec!["R2".to_string(), "R1".to_string()];
        let hits = store.get_for_repairs(&ids).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].repair_id, "R2");
        assert_eq!(hits[1].repair_id, "R1");
    }
}
