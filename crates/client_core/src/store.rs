use shared::{
    domain::{ShoeId, ShoeRecord},
    error::{SeedError, StoreError},
    seed::initial_shoes,
};

/// Ordered, in-memory collection of shoe records.
///
/// Ids are unique at all times. Insertion order carries no meaning for display
/// because the view always sorts.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ShoeRecord>,
}

impl RecordStore {
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::from_records(initial_shoes()?))
    }

    pub fn from_records(records: Vec<ShoeRecord>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[ShoeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: ShoeId) -> Option<&ShoeRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: ShoeId) -> bool {
        self.get(id).is_some()
    }

    pub fn add(&mut self, record: ShoeRecord) {
        tracing::debug!(id = %record.id, brand = %record.shoe_brand, "adding shoe");
        self.records.push(record);
    }

    pub fn update(&mut self, id: ShoeId, record: ShoeRecord) -> Result<(), StoreError> {
        let Some(slot) = self.records.iter_mut().find(|r| r.id == id) else {
            tracing::warn!(%id, "update skipped; shoe not found");
            return Err(StoreError::NotFound(id));
        };
        tracing::debug!(%id, "updating shoe");
        *slot = record;
        Ok(())
    }

    pub fn remove(&mut self, id: ShoeId) -> Option<ShoeRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        tracing::debug!(%id, "removing shoe");
        Some(self.records.remove(index))
    }

    /// Fresh id for a new record: the timestamp candidate, or one past the
    /// largest id when the candidate is already taken.
    pub fn next_id(&self, candidate: ShoeId) -> ShoeId {
        if !self.contains(candidate) {
            return candidate;
        }
        let max = self.records.iter().map(|r| r.id.0).max().unwrap_or(0);
        ShoeId(max.saturating_add(1))
    }
}
