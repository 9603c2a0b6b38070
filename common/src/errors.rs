// Error handling framework

use thiserror::Error;

/// Request validation errors. Every variant is a rejected request (HTTP 400)
/// raised before any store access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Falta el RIF o Código a buscar")]
    MissingClientKey,

    #[error("Mes inválido, debe ser un número entre 1 y 12")]
    InvalidMonth(String),

    #[error("Año inválido, debe ser un número entre 1900 y 2100")]
    InvalidYear(String),
}

/// Database-specific errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Database health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Row decoding failed: {0}")]
    DecodeFailed(String),
}

/// Errors produced by the search pipelines
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    InvalidRequest(#[from] ValidationError),

    /// A query or row decode failed; `context` is the user-facing summary.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl SearchError {
    pub fn store(context: &'static str) -> impl FnOnce(DatabaseError) -> Self {
        move |source| SearchError::Store { context, source }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                DatabaseError::QueryFailed(db_err.message().to_string())
            }
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => DatabaseError::DecodeFailed(err.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DatabaseError::ConnectionFailed(err.to_string())
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvalidMonth("13".into()).to_string(),
            "Mes inválido, debe ser un número entre 1 y 12"
        );
        assert_eq!(
            ValidationError::MissingClientKey.to_string(),
            "Falta el RIF o Código a buscar"
        );
    }

    #[test]
    fn test_store_error_carries_context_and_source() {
        let err = SearchError::store("Error al ejecutar consulta de facturas")(
            DatabaseError::QueryFailed("relation \"dbo.Factura\" does not exist".into()),
        );
        let text = err.to_string();
        assert!(text.starts_with("Error al ejecutar consulta de facturas: "));
        assert!(text.contains("does not exist"));
    }

    #[test]
    fn test_sqlx_decode_errors_map_to_decode_failed() {
        let err: DatabaseError = sqlx::Error::ColumnNotFound("Codigo".into()).into();
        assert!(matches!(err, DatabaseError::DecodeFailed(_)));

        let err: DatabaseError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DatabaseError::ConnectionFailed(_)));
    }
}
