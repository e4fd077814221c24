//! plant-catalog - sorted and filtered queries over a plant catalog
//!
//! The core is [`catalog::QueryProjector`]: it turns a
//! [`catalog::SortCriterion`] into a parameterized query, runs it against
//! the SQLite catalog, and returns the rows as ordered records. The CLI and
//! the web front end both display what it returns.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod observability;
pub mod web;
