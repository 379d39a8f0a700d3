use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] tokio_postgres::Error),

    #[error("Query failed: {0}")]
    Query(#[from] tokio_postgres::Error)
}
