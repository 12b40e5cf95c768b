//! # Record Store
//!
//! [`Collection`] is the ordered, in-memory catalog for the lifetime of a single
//! operation. It is loaded from a snapshot, mutated, and (for mutating
//! commands) written back whole.
//!
//! Positions are the only way to address a record. A position is valid from
//! the load that produced it until the next save: removing a record shifts
//! every later record one slot to the left.

use crate::error::{Result, ShelfError};
use crate::matcher::matches;
use crate::model::{Criteria, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Appends a record at the end.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the record at `index`, shifting later records left.
    pub fn remove_at(&mut self, index: i64) -> Result<Record> {
        let position = self.checked_index(index)?;
        Ok(self.records.remove(position))
    }

    /// Overwrites the record at `index` in place, returning the one it replaced.
    pub fn replace_at(&mut self, index: i64, record: Record) -> Result<Record> {
        let position = self.checked_index(index)?;
        Ok(std::mem::replace(&mut self.records[position], record))
    }

    /// Every record matching `criteria`, with its position, in collection order.
    pub fn search(&self, criteria: &Criteria) -> Vec<(usize, &Record)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches(record, criteria))
            .collect()
    }

    fn checked_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.records.len())
            .ok_or(ShelfError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
