//! Unit-of-work session for generated data contexts.
//!
//! A [`Session`] owns the entity collections registered for one logical
//! database session and commits their buffered mutations in an order that
//! respects foreign-key dependencies: parents flush their inserts before
//! children, deletes run in the reverse order. The session performs no I/O
//! itself; each collection flushes to its own storage collaborator.
//!
//! One session is one unit of work. It is not designed for concurrent use:
//! registration and commit must be serialized by the caller.

#![deny(unsafe_code)]

mod buffered;
mod collection;
mod error;
mod graph;
mod session;

pub use buffered::{BufferedTable, Mutation, RowStore};
pub use collection::{ChangeText, EntityCollection, FlushPhase};
pub use error::SessionError;
pub use graph::{NoDependencies, SchemaDependencies};
pub use session::{CommitSummary, Session};
