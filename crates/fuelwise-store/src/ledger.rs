//! Expense ledger store
//!
//! Owns the ordered expense collection (newest-first by insertion) and
//! writes the whole collection through the key-value collaborator after
//! every mutation. In-memory state is updated before the write, so a failed
//! write leaves memory ahead of disk; the caller decides whether to retry.

use chrono::Utc;

use fuelwise_domain::model::{ExpenseDraft, ExpenseRecord};
use fuelwise_types::{Error, ExpenseFilter, Result};

use crate::kv::KeyValueStore;

/// Storage key the mobile app used for the receipt collection
pub const RECEIPTS_KEY: &str = "fuel_receipts";

pub struct LedgerStore<S: KeyValueStore> {
    store: S,
    records: Vec<ExpenseRecord>,
    last_id: i64,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Load the ledger from the collaborator. Absent or corrupt payloads
    /// start an empty ledger rather than failing.
    pub fn load(store: S) -> Result<Self> {
        let records: Vec<ExpenseRecord> = match store.get(RECEIPTS_KEY)? {
            Some(payload) => serde_json::from_str(&payload).unwrap_or_default(),
            None => Vec::new(),
        };
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Ok(Self { store, records, last_id })
    }

    /// All records, newest-first by insertion
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Next id: current time in milliseconds, bumped past any id already
    /// issued so ids stay strictly increasing
    fn next_id(&mut self) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        self.last_id = if candidate > self.last_id { candidate } else { self.last_id + 1 };
        self.last_id
    }

    /// Validate, prepend, and persist a new expense
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let id = self.next_id();
        let record = draft.into_record(id)?;
        self.records.insert(0, record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Replace the fields of an existing record, keeping its id and position
    pub fn update(&mut self, id: i64, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let record = draft.into_record(id)?;
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::RecordNotFound(id))?;
        *slot = record.clone();
        self.persist()?;
        Ok(record)
    }

    /// Delete every record matching the predicate; returns the removed count
    pub fn remove_where<F>(&mut self, predicate: F) -> Result<usize>
    where
        F: Fn(&ExpenseRecord) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !predicate(r));
        let removed = before - self.records.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Delete a single record by id
    pub fn remove_by_id(&mut self, id: i64) -> Result<ExpenseRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::RecordNotFound(id))?;
        let record = self.records.remove(index);
        self.persist()?;
        Ok(record)
    }

    /// Delete all records in (`year`, `month` 1-12) passing the filter
    pub fn clear_month(&mut self, year: i32, month: u32, filter: ExpenseFilter) -> Result<usize> {
        self.remove_where(|r| {
            r.year_month() == (year, month) && filter.matches(r.fuel_type)
        })
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.records)
            .map_err(|e| Error::Persistence(e.to_string()))?;
        self.store
            .set(RECEIPTS_KEY, &payload)
            .map_err(|e| Error::Persistence(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{FileKeyValueStore, MemoryKeyValueStore};
    use chrono::TimeZone;
    use fuelwise_types::ExpenseFuel;
    use tempfile::tempdir;

    fn draft(station: &str, fuel: ExpenseFuel, total: f64, month: u32) -> ExpenseDraft {
        ExpenseDraft {
            station: station.to_string(),
            fuel_type: fuel,
            price_per_unit: 1.50,
            total_cost: total,
            timestamp: Utc.with_ymd_and_hms(2025, month, 10, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let mut ledger = LedgerStore::load(MemoryKeyValueStore::new()).unwrap();
        ledger.add(draft("Shell Bedford", ExpenseFuel::Petrol, 45.60, 3)).unwrap();
        ledger.add(draft("Esso Kempston", ExpenseFuel::Diesel, 52.00, 3)).unwrap();

        let stations: Vec<&str> =
            ledger.records().iter().map(|r| r.station.as_str()).collect();
        assert_eq!(stations, vec!["Esso Kempston", "Shell Bedford"]);
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut ledger = LedgerStore::load(MemoryKeyValueStore::new()).unwrap();
        let a = ledger.add(draft("A", ExpenseFuel::Petrol, 10.0, 1)).unwrap();
        let b = ledger.add(draft("B", ExpenseFuel::Petrol, 10.0, 1)).unwrap();
        let c = ledger.add(draft("C", ExpenseFuel::Petrol, 10.0, 1)).unwrap();
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn test_round_trip_through_file_store() {
        let dir = tempdir().unwrap();

        let stored = {
            let store = FileKeyValueStore::open(dir.path().to_path_buf()).unwrap();
            let mut ledger = LedgerStore::load(store).unwrap();
            ledger.add(draft("Shell Bedford", ExpenseFuel::Petrol, 45.60, 3)).unwrap()
        };

        let store = FileKeyValueStore::open(dir.path().to_path_buf()).unwrap();
        let ledger = LedgerStore::load(store).unwrap();
        assert_eq!(ledger.records(), &[stored]);
    }

    #[test]
    fn test_load_is_fail_soft_on_corrupt_payload() {
        let mut store = MemoryKeyValueStore::new();
        store.set(RECEIPTS_KEY, "not json at all").unwrap();
        let ledger = LedgerStore::load(store).unwrap();
        assert!(ledger.records().is_empty());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut ledger = LedgerStore::load(MemoryKeyValueStore::new()).unwrap();
        ledger.add(draft("A", ExpenseFuel::Petrol, 10.0, 1)).unwrap();
        let target = ledger.add(draft("B", ExpenseFuel::Petrol, 20.0, 1)).unwrap();
        ledger.add(draft("C", ExpenseFuel::Petrol, 30.0, 1)).unwrap();

        let updated = ledger
            .update(target.id, draft("B2", ExpenseFuel::Diesel, 25.0, 2))
            .unwrap();
        assert_eq!(updated.id, target.id);

        let stations: Vec<&str> =
            ledger.records().iter().map(|r| r.station.as_str()).collect();
        assert_eq!(stations, vec!["C", "B2", "A"]);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut ledger = LedgerStore::load(MemoryKeyValueStore::new()).unwrap();
        let err = ledger
            .update(999, draft("X", ExpenseFuel::Petrol, 10.0, 1))
            .unwrap_err();
        assert!(matches!(err, Error::RecordNotFound(999)));
    }

    #[test]
    fn test_clear_month_leaves_other_months_untouched() {
        let mut ledger = LedgerStore::load(MemoryKeyValueStore::new()).unwrap();
        ledger.add(draft("Mar A", ExpenseFuel::Petrol, 10.0, 3)).unwrap();
        ledger.add(draft("Mar B", ExpenseFuel::Diesel, 20.0, 3)).unwrap();
        ledger.add(draft("Apr", ExpenseFuel::Petrol, 30.0, 4)).unwrap();

        let removed = ledger.clear_month(2025, 3, ExpenseFilter::All).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.records()[0].station, "Apr");
    }

    #[test]
    fn test_clear_month_with_fuel_filter() {
        let mut ledger = LedgerStore::load(MemoryKeyValueStore::new()).unwrap();
        ledger.add(draft("Mar petrol", ExpenseFuel::Petrol, 10.0, 3)).unwrap();
        ledger.add(draft("Mar diesel", ExpenseFuel::Diesel, 20.0, 3)).unwrap();

        let removed = ledger.clear_month(2025, 3, ExpenseFilter::Diesel).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(ledger.records()[0].station, "Mar petrol");
    }

    #[test]
    fn test_remove_by_id() {
        let mut ledger = LedgerStore::load(MemoryKeyValueStore::new()).unwrap();
        let kept = ledger.add(draft("Keep", ExpenseFuel::Petrol, 10.0, 1)).unwrap();
        let gone = ledger.add(draft("Gone", ExpenseFuel::Petrol, 20.0, 1)).unwrap();

        let removed = ledger.remove_by_id(gone.id).unwrap();
        assert_eq!(removed.station, "Gone");
        assert_eq!(ledger.records(), &[kept]);

        assert!(matches!(
            ledger.remove_by_id(gone.id).unwrap_err(),
            Error::RecordNotFound(_)
        ));
    }
}
