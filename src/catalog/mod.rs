//! Plant catalog queries
//!
//! Given a sort criterion, the projector builds a parameterized query,
//! executes it against the SQLite catalog, and returns the rows as
//! column-name -> value records in criterion order.
//!
//! # Invariants
//!
//! - One connection per fetch, closed on every exit path
//! - Caller input only reaches the data source as bound parameters
//! - An empty result is a successful fetch, never an error

mod criterion;
mod errors;
mod projector;
mod query;
mod result;
pub mod seed;

pub use criterion::{Letter, LetterError, SortCriterion};
pub use errors::{CatalogError, CatalogResult};
pub use projector::{DataSourceConfig, QueryProjector};
pub use query::{CatalogQuery, QueryBuilder};
pub use result::{Record, ResultSet};
