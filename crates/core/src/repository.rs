// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use armory_domain::{Record, RecordId};

/// An owned, in-memory collection of one record kind.
///
/// Records are kept newest first. The repository owns the identifier
/// sequence: it starts after the seeded records and only ever moves forward,
/// so an identifier is never handed out twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository<R> {
    records: Vec<R>,
    next_sequence: u32,
}

impl<R: Record> Repository<R> {
    /// Creates a repository holding `records`, newest first.
    ///
    /// The sequence continues from the number of seeded records.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        let seeded: u32 = u32::try_from(records.len()).unwrap_or(u32::MAX);
        Self {
            records,
            next_sequence: seeded.saturating_add(1),
        }
    }

    /// Creates an empty repository.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Every record, newest first.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// The sequence number the next created record will receive.
    #[must_use]
    pub const fn peek_sequence(&self) -> u32 {
        self.next_sequence
    }

    /// Claims the next sequence number.
    pub(crate) fn allocate(&mut self) -> u32 {
        let sequence: u32 = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }

    /// Inserts a record at the front.
    pub(crate) fn prepend(&mut self, record: R) {
        self.records.insert(0, record);
    }
}

impl<R: Record> Default for Repository<R> {
    fn default() -> Self {
        Self::empty()
    }
}
