use thiserror::Error;

use sqlgen_model::TableName;

use crate::FlushPhase;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A flush failed; everything the session managed to commit before the
    /// failure is reported so the caller can remediate manually. No
    /// automatic rollback is attempted, the storage transaction model is
    /// the collaborator's concern.
    #[error(
        "commit stopped at table `{table}` during {phase} \
         ({committed} flush(es) completed before the failure): {reason}"
    )]
    Flush {
        table: TableName,
        phase: FlushPhase,
        /// Successful flush invocations across the whole commit run.
        committed: usize,
        reason: anyhow::Error,
    },

    /// The foreign-key graph of the registered tables contains a cycle, so
    /// no valid commit order exists.
    #[error("foreign-key dependency cycle among tables: {}", .tables.join(", "))]
    DependencyCycle { tables: Vec<String> },
}
