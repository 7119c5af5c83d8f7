use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("no {table} row with id {id:?}")]
    RowNotFound { table: &'static str, id: String },

    #[error("no row under the cursor")]
    NoCursorRow,
}
