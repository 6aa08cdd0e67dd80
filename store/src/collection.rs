//! Insertion-ordered record collection.

use quill_core::Record;
use std::collections::HashSet;

use crate::error::{StoreError, StoreResult};

/// Records of one kind, kept in insertion order.
///
/// Lookups by id scan the rows; the id set only guards against duplicates
/// and answers `contains` without a scan.
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    rows: Vec<R>,
    ids: HashSet<R::Id>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Collection<R> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            ids: HashSet::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.rows.iter()
    }

    /// Returns true if a record with this id is stored.
    pub fn contains(&self, id: &R::Id) -> bool {
        self.ids.contains(id)
    }

    /// Append a record and return a reference to it.
    pub fn insert(&mut self, record: R) -> StoreResult<&R> {
        if !self.ids.insert(record.id().clone()) {
            return Err(StoreError::duplicate_id(R::KIND, record.id()));
        }
        self.rows.push(record);
        let last = self.rows.len() - 1;
        Ok(&self.rows[last])
    }

    /// Get a record by id.
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        if !self.contains(id) {
            return None;
        }
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Get a record by id, or `NotFound`.
    pub fn find(&self, id: &R::Id) -> StoreResult<&R> {
        self.get(id).ok_or_else(|| StoreError::not_found(R::KIND, id))
    }

    /// Get a mutable reference to a record by id, or `NotFound`.
    ///
    /// Callers must not change the record's id.
    pub fn find_mut(&mut self, id: &R::Id) -> StoreResult<&mut R> {
        self.rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))
    }

    /// Records matching `predicate`, in insertion order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&R>
    where
        P: FnMut(&R) -> bool,
    {
        self.rows.iter().filter(|r| predicate(*r)).collect()
    }

    /// Remove a record by id and return it.
    pub fn remove(&mut self, id: &R::Id) -> StoreResult<R> {
        let position = self
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        let removed = self.rows.remove(position);
        self.ids.remove(removed.id());
        Ok(removed)
    }

    /// Remove every record matching `predicate`.
    ///
    /// Returns the removed records in insertion order; the survivors keep
    /// their relative order.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> Vec<R>
    where
        P: FnMut(&R) -> bool,
    {
        let (removed, kept): (Vec<R>, Vec<R>) =
            std::mem::take(&mut self.rows).into_iter().partition(|r| predicate(r));
        self.rows = kept;
        for record in &removed {
            self.ids.remove(record.id());
        }
        removed
    }
}
