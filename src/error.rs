//! Store error types.
//!
//! [`StoreError`] is the central error type for the crate. Read-path
//! operations return it directly; write-path operations convert a subset
//! of these errors into sentinel values (see the persistence module).

/// Failures raised by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A supplied post date was not a valid `YYYY-MM-DD` string.
    #[error("invalid post date {value:?}: expected YYYY-MM-DD")]
    DateParse {
        /// The rejected input string.
        value: String,
    },

    /// The store rejected a write with a key or uniqueness constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// A returned row could not be mapped to a domain entity.
    #[error("row mapping failed: {0}")]
    Mapping(String),

    /// Statement execution failed for any other reason.
    #[error("query execution failed: {0}")]
    Query(String),

    /// The connection pool could not supply a working connection.
    #[error("database connection failed: {0}")]
    Connection(String),
}

impl StoreError {
    /// Returns `true` for errors the insert path converts to the
    /// sentinel id instead of propagating.
    #[must_use]
    pub const fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnNotFound(name) => Self::Mapping(format!("missing column {name}")),
            sqlx::Error::ColumnDecode { index, source } => {
                Self::Mapping(format!("column {index}: {source}"))
            }
            sqlx::Error::Database(db) => {
                // SQLSTATE class 23 covers integrity constraint violations.
                if db.code().as_deref().is_some_and(|c| c.starts_with("23")) {
                    Self::Constraint(db.to_string())
                } else {
                    Self::Query(db.to_string())
                }
            }
            sqlx::Error::Io(io) => Self::Connection(io.to_string()),
            e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                Self::Connection(e.to_string())
            }
            other => Self::Query(other.to_string()),
        }
    }
}
