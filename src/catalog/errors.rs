//! Catalog error types
//!
//! Error codes:
//! - PLANT_DATASOURCE_UNAVAILABLE (connection could not be established)
//! - PLANT_QUERY_FAILED (statement rejected by the data source)
//!
//! An empty result is never an error.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors returned by [`QueryProjector::fetch`](super::QueryProjector::fetch)
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data source could not be opened
    #[error("Data source unavailable at {path}: {source}")]
    DataSourceUnavailable {
        /// Location of the data source
        path: String,
        /// Driver error
        #[source]
        source: rusqlite::Error,
    },

    /// The data source rejected the query or failed while returning rows
    #[error("Query execution failed: {source}")]
    QueryExecutionError {
        /// Driver error
        #[source]
        source: rusqlite::Error,
    },
}

impl CatalogError {
    /// Connection failure at `path`
    pub fn unavailable(path: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::DataSourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Query failure
    pub fn query(source: rusqlite::Error) -> Self {
        Self::QueryExecutionError { source }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::DataSourceUnavailable { .. } => "PLANT_DATASOURCE_UNAVAILABLE",
            CatalogError::QueryExecutionError { .. } => "PLANT_QUERY_FAILED",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::DataSourceUnavailable { .. } => 503,
            CatalogError::QueryExecutionError { .. } => 500,
        }
    }

    /// Returns true if the connection could not be established
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CatalogError::DataSourceUnavailable { .. })
    }
}
