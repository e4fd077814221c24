//! # Web front end
//!
//! Serves the catalog over HTTP with axum.
//!
//! # Endpoints
//!
//! - `/plants` - HTML results page (sort links, letter index, paging)
//! - `/plants.json` - the same result as JSON
//! - `/health` - Health check

pub mod config;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use routes::{catalog_routes, health_routes, CatalogState, PlantParams, PlantsResponse};
pub use server::HttpServer;
