#[cfg(test)]
#[path = "record_store_test.rs"]
mod tests;

use crate::domain::models::Record;

/// In-memory mirror of the server's records for the mounted table. It is only
/// changed from successful responses, so after every mutation it matches what
/// a fresh listing would return.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
    pub loading: bool,
}

impl RecordStore {
    pub fn records(&self) -> &[Record] {
        return &self.records;
    }

    pub fn len(&self) -> usize {
        return self.records.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        return self.records.iter().find(|record| return record.id == id);
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Result of a listing. A failed listing leaves the table empty.
    pub fn replace_all(&mut self, records: Vec<Record>) {
        self.records = records;
        self.loading = false;
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.loading = false;
    }

    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Swaps the record with `id` for the server's version, keeping its
    /// position. Unknown ids are ignored.
    pub fn replace(&mut self, id: i64, record: Record) {
        if let Some(existing) = self.records.iter_mut().find(|e| return e.id == id) {
            *existing = record;
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.records.retain(|record| return record.id != id);
    }
}
