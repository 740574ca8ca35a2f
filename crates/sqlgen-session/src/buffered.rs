//! A concrete entity collection backed by an ordered mutation log.

use std::fmt::Write as _;

use sqlgen_model::TableName;

use crate::collection::{ChangeText, EntityCollection, FlushPhase};

/// One buffered mutation of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<R> {
    Insert(R),
    Update(R),
    Delete(R),
}

impl<R> Mutation<R> {
    /// The flush phase this mutation belongs to.
    pub fn phase(&self) -> FlushPhase {
        match self {
            Self::Insert(_) | Self::Update(_) => FlushPhase::Upserts,
            Self::Delete(_) => FlushPhase::Deletes,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }
}

/// Storage collaborator a [`BufferedTable`] flushes into.
///
/// Flushing is synchronous and may be slow or fail; retry policy, if any,
/// lives behind this trait, not in the session.
pub trait RowStore<R> {
    fn insert(&mut self, row: &R) -> anyhow::Result<()>;
    fn update(&mut self, row: &R) -> anyhow::Result<()>;
    fn delete(&mut self, row: &R) -> anyhow::Result<()>;

    /// Optional statement preview for a pending mutation, used by the
    /// change-text capability.
    fn statement_text(&self, _mutation: &Mutation<R>) -> Option<String> {
        None
    }
}

/// Buffered mutations for one table, flushed to a [`RowStore`].
///
/// Mutations accumulate in arrival order during the unit of work. A flush
/// drains only the requested phase; the drained entries are removed only
/// when every one of them was stored, so a failed flush leaves the full
/// log intact for remediation.
pub struct BufferedTable<R, S> {
    table: TableName,
    pending: Vec<Mutation<R>>,
    store: S,
}

impl<R, S: RowStore<R>> BufferedTable<R, S> {
    pub fn new(table: TableName, store: S) -> Self {
        Self {
            table,
            pending: Vec::new(),
            store,
        }
    }

    pub fn insert(&mut self, row: R) {
        self.pending.push(Mutation::Insert(row));
    }

    pub fn update(&mut self, row: R) {
        self.pending.push(Mutation::Update(row));
    }

    pub fn delete(&mut self, row: R) {
        self.pending.push(Mutation::Delete(row));
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<R, S: RowStore<R>> EntityCollection for BufferedTable<R, S> {
    fn table(&self) -> &TableName {
        &self.table
    }

    fn has_pending_work(&self) -> bool {
        !self.pending.is_empty()
    }

    fn flush(&mut self, phase: FlushPhase) -> anyhow::Result<()> {
        for mutation in self.pending.iter().filter(|m| m.phase() == phase) {
            match mutation {
                Mutation::Insert(row) => self.store.insert(row)?,
                Mutation::Update(row) => self.store.update(row)?,
                Mutation::Delete(row) => self.store.delete(row)?,
            }
        }
        self.pending.retain(|m| m.phase() != phase);
        Ok(())
    }

    fn as_change_text(&self) -> Option<&dyn ChangeText> {
        Some(self)
    }
}

impl<R, S: RowStore<R>> ChangeText for BufferedTable<R, S> {
    fn change_text(&self) -> String {
        let mut out = String::new();
        for mutation in &self.pending {
            match self.store.statement_text(mutation) {
                Some(text) => {
                    let _ = writeln!(out, "{text}");
                }
                None => {
                    let _ = writeln!(out, "-- {} {}", mutation.verb(), self.table);
                }
            }
        }
        out
    }
}
