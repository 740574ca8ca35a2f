//! The commit coordinator.

use tracing::{debug, info};

use crate::SessionError;
use crate::collection::{EntityCollection, FlushPhase};
use crate::graph::{SchemaDependencies, commit_order};

/// Outcome of a successful [`Session::commit_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Flush invocations that ran (a collection can flush once per phase).
    pub flushed: usize,
    /// Collections skipped because they had no pending work.
    pub skipped: usize,
}

/// Aggregation root for one unit of work.
///
/// Collections register in creation order; commit order is computed from
/// the schema's foreign-key dependencies, never from registration order.
/// Inserts and updates flush parents-first, then deletes flush in the
/// reverse order, so rows created and referenced within the same unit of
/// work satisfy their constraints.
pub struct Session {
    collections: Vec<Box<dyn EntityCollection>>,
    dependencies: Box<dyn SchemaDependencies>,
}

impl Session {
    pub fn new(dependencies: impl SchemaDependencies + 'static) -> Self {
        Self {
            collections: Vec::new(),
            dependencies: Box::new(dependencies),
        }
    }

    /// Register a collection for this unit of work.
    pub fn register(&mut self, collection: Box<dyn EntityCollection>) {
        debug!(table = %collection.table(), "registered entity collection");
        self.collections.push(collection);
    }

    pub fn registered_len(&self) -> usize {
        self.collections.len()
    }

    /// True if any registered collection still buffers mutations.
    pub fn has_pending_work(&self) -> bool {
        self.collections.iter().any(|c| c.has_pending_work())
    }

    /// Flush every collection's pending work in dependency order.
    ///
    /// Stops at the first failure; the error names the failing table and
    /// how many flushes completed before it so the caller can remediate.
    /// With nothing registered this is a no-op success.
    pub fn commit_all(&mut self) -> Result<CommitSummary, SessionError> {
        if self.collections.is_empty() {
            return Ok(CommitSummary::default());
        }

        let tables: Vec<_> = self.collections.iter().map(|c| c.table().clone()).collect();
        let order = commit_order(&tables, self.dependencies.as_ref())?;

        let skipped = self
            .collections
            .iter()
            .filter(|c| !c.has_pending_work())
            .count();

        let mut committed = 0usize;
        for &idx in &order {
            self.flush_one(idx, FlushPhase::Upserts, &mut committed)?;
        }
        for &idx in order.iter().rev() {
            self.flush_one(idx, FlushPhase::Deletes, &mut committed)?;
        }

        info!(flushed = committed, skipped, "commit complete");
        Ok(CommitSummary {
            flushed: committed,
            skipped,
        })
    }

    fn flush_one(
        &mut self,
        idx: usize,
        phase: FlushPhase,
        committed: &mut usize,
    ) -> Result<(), SessionError> {
        let collection = &mut self.collections[idx];
        if !collection.has_pending_work() {
            debug!(table = %collection.table(), %phase, "nothing pending, skipping flush");
            return Ok(());
        }
        let table = collection.table().clone();
        debug!(%table, %phase, "flushing");
        collection.flush(phase).map_err(|reason| SessionError::Flush {
            table,
            phase,
            committed: *committed,
            reason,
        })?;
        *committed += 1;
        Ok(())
    }

    /// Text preview of all pending changes, without executing anything.
    ///
    /// Collections that do not expose the change-text capability contribute
    /// a placeholder line instead.
    pub fn change_text(&self) -> String {
        let mut out = String::new();
        for collection in &self.collections {
            if !collection.has_pending_work() {
                continue;
            }
            match collection.as_change_text() {
                Some(preview) => out.push_str(&preview.change_text()),
                None => {
                    out.push_str("-- ");
                    out.push_str(collection.table().as_str());
                    out.push_str(": pending changes (no preview available)\n");
                }
            }
        }
        out
    }

    /// Whether this session can detect concurrent modification of rows it
    /// is about to write. Always `false`; callers must branch on this
    /// instead of assuming conflicts would be reported.
    pub fn supports_conflict_detection(&self) -> bool {
        false
    }
}
