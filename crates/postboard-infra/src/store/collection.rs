use std::str::FromStr;

use postboard_core::domain::Record;

/// How a collection picks the ID of a new record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Monotonic counter seeded from the highest stored ID.
    /// IDs are never handed out twice while the process runs.
    #[default]
    Sequential,
    /// `collection length + 1`. A delete followed by a create can reuse
    /// (or duplicate) an ID that is already taken.
    Length,
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdPolicy::Sequential),
            "length" => Ok(IdPolicy::Length),
            other => Err(format!("unknown id policy: {}", other)),
        }
    }
}

/// Ordered, ID-keyed records of one kind.
#[derive(Debug, Clone)]
pub(crate) struct Collection<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Collection<T> {
    pub(crate) fn new(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    pub(crate) fn records(&self) -> &[T] {
        &self.records
    }

    pub(crate) fn find(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub(crate) fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    pub(crate) fn insert(&mut self, policy: IdPolicy, draft: T::Draft) -> T {
        let id = match policy {
            IdPolicy::Sequential => self.next_id,
            IdPolicy::Length => self.records.len() as u64 + 1,
        };
        self.next_id = self.next_id.max(id + 1);

        let record = T::from_draft(id, draft);
        self.records.push(record.clone());
        record
    }

    /// Replace the first record with `id` in place.
    pub(crate) fn replace(&mut self, id: u64, draft: T::Draft) -> Option<T> {
        let slot = self.records.iter_mut().find(|r| r.id() == id)?;
        *slot = T::from_draft(id, draft);
        Some(slot.clone())
    }

    /// Drop every record with `id`, returning how many were removed.
    pub(crate) fn remove(&mut self, id: u64) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        before - self.records.len()
    }
}
