use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid table name: {0:?}")]
    InvalidTableName(String),

    #[error("table {child} references unknown parent table {parent}")]
    UnknownParentTable { child: String, parent: String },
}
