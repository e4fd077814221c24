//! Observable events for the plant catalog
//!
//! Every log line carries an `event` field with one of these names.
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the plant catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded and validated
    ConfigLoaded,

    // Catalog maintenance
    /// Catalog database created and seeded
    CatalogInitialized,

    // Query operations
    /// Query text and parameters chosen for a criterion
    QueryPlanned,
    /// Query returned zero rows
    NoResults,

    // Data source
    /// Connection to the data source could not be opened
    DataSourceUnavailable,
    /// Data source rejected the statement
    QueryFailed,

    // Web front end
    /// Server bound and serving requests
    Serving,
    /// Request rejected before reaching the catalog
    RequestRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogInitialized => "CATALOG_INITIALIZED",
            Event::QueryPlanned => "QUERY_PLANNED",
            Event::NoResults => "QUERY_NO_RESULTS",
            Event::DataSourceUnavailable => "DATASOURCE_UNAVAILABLE",
            Event::QueryFailed => "QUERY_FAILED",
            Event::Serving => "PLANTS_SERVING",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Returns true if this event reports a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::DataSourceUnavailable | Event::QueryFailed | Event::RequestRejected
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
