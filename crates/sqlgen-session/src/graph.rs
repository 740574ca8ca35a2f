//! Foreign-key dependency graph and commit-order computation.

use std::collections::BTreeMap;

use sqlgen_model::{SchemaDescription, TableName};

use crate::SessionError;

/// Supplies the foreign-key parents of a table.
///
/// The session never trusts registration order; it asks this collaborator
/// for the real dependency structure of the schema.
pub trait SchemaDependencies {
    /// Direct foreign-key parent tables of `table`.
    fn parent_tables(&self, table: &TableName) -> Vec<TableName>;
}

impl SchemaDependencies for SchemaDescription {
    fn parent_tables(&self, table: &TableName) -> Vec<TableName> {
        SchemaDescription::parent_tables(self, table)
    }
}

/// No dependency information: every table is independent and registration
/// order is already a valid commit order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDependencies;

impl SchemaDependencies for NoDependencies {
    fn parent_tables(&self, _table: &TableName) -> Vec<TableName> {
        Vec::new()
    }
}

/// Topological order over the registered tables, parents before children.
///
/// Returns indices into `tables`. Ties break toward the lowest registration
/// index so the order is deterministic across runs. Parents that are not
/// registered in this session are ignored (their rows already exist), as
/// are self-references, which cannot be ordered between two collections.
pub(crate) fn commit_order(
    tables: &[TableName],
    deps: &dyn SchemaDependencies,
) -> Result<Vec<usize>, SessionError> {
    let index_of: BTreeMap<&TableName, usize> = tables
        .iter()
        .enumerate()
        .map(|(idx, name)| (name, idx))
        .collect();

    let mut parents: Vec<Vec<usize>> = Vec::with_capacity(tables.len());
    for (idx, table) in tables.iter().enumerate() {
        let mut local = Vec::new();
        for parent in deps.parent_tables(table) {
            if let Some(&parent_idx) = index_of.get(&parent)
                && parent_idx != idx
                && !local.contains(&parent_idx)
            {
                local.push(parent_idx);
            }
        }
        parents.push(local);
    }

    let mut emitted = vec![false; tables.len()];
    let mut order = Vec::with_capacity(tables.len());
    while order.len() < tables.len() {
        let ready = (0..tables.len()).find(|&idx| {
            !emitted[idx] && parents[idx].iter().all(|&parent| emitted[parent])
        });
        match ready {
            Some(idx) => {
                emitted[idx] = true;
                order.push(idx);
            }
            None => {
                let stuck: Vec<String> = (0..tables.len())
                    .filter(|&idx| !emitted[idx])
                    .map(|idx| tables[idx].to_string())
                    .collect();
                return Err(SessionError::DependencyCycle { tables: stuck });
            }
        }
    }
    Ok(order)
}
