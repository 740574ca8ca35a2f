//! The contract between the session and a buffered entity collection.

use std::fmt;

use sqlgen_model::TableName;

/// Which slice of a collection's pending work a flush call should drain.
///
/// Inserts and updates flush parents-first, deletes flush children-first,
/// so the session drives the two phases separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlushPhase {
    /// Pending inserts and updates, in arrival order.
    Upserts,
    /// Pending deletes, in arrival order.
    Deletes,
}

impl fmt::Display for FlushPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upserts => f.write_str("upsert phase"),
            Self::Deletes => f.write_str("delete phase"),
        }
    }
}

/// Capability for rendering pending changes as text without executing them.
///
/// Collections that can describe their buffered statements implement this;
/// callers discover it through
/// [`EntityCollection::as_change_text`] instead of downcasting.
pub trait ChangeText {
    /// Human-readable preview of the pending mutations.
    fn change_text(&self) -> String;
}

/// A buffered set of not-yet-persisted mutations for one logical table.
///
/// Implementations accumulate mutations during a unit of work and drain the
/// flushed slice of their log only when the corresponding phase succeeds.
pub trait EntityCollection {
    /// The table this collection buffers mutations for.
    fn table(&self) -> &TableName;

    /// True if any mutation is still buffered.
    fn has_pending_work(&self) -> bool;

    /// Flush the pending work of `phase` to storage.
    ///
    /// On failure the unflushed remainder must stay buffered so the caller
    /// can decide on remediation; the session does not retry.
    fn flush(&mut self, phase: FlushPhase) -> anyhow::Result<()>;

    /// The change-text capability, when this collection supports it.
    fn as_change_text(&self) -> Option<&dyn ChangeText> {
        None
    }
}
