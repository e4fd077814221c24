//! Query projector for the plant catalog
//!
//! Execution flow (strict order):
//! 1. Open one read-only connection to the data source
//! 2. Build the query for the criterion
//! 3. Prepare and bind parameters
//! 4. Project every row into a `Record`, keyed by reported column names
//! 5. Close the connection and return the ordered records
//!
//! The connection is owned by `fetch` and closes when it goes out of scope,
//! on success and failure alike. No pooling, no retry.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, ErrorCode, OpenFlags};

use crate::observability::{log_event, Event, ObservationScope};

use super::criterion::SortCriterion;
use super::errors::{CatalogError, CatalogResult};
use super::query::{CatalogQuery, QueryBuilder};
use super::result::{Record, ResultSet};

/// Where and how to reach the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceConfig {
    /// SQLite database file
    pub path: PathBuf,
    /// Catalog table name
    pub table: String,
    /// How long to wait on a locked database before failing
    pub busy_timeout: Option<Duration>,
}

impl DataSourceConfig {
    /// Config for `table` in the database at `path`, no busy timeout
    pub fn new(path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            table: table.into(),
            busy_timeout: None,
        }
    }

    /// Set the busy timeout
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = Some(timeout);
        self
    }
}

/// Runs catalog queries and projects the rows into records
#[derive(Debug, Clone)]
pub struct QueryProjector {
    source: DataSourceConfig,
}

impl QueryProjector {
    /// Creates a projector for the given data source
    pub fn new(source: DataSourceConfig) -> Self {
        Self { source }
    }

    /// Fetch the catalog rows selected and ordered by `criterion`.
    ///
    /// Zero matching rows is `Ok` with an empty `ResultSet`.
    pub fn fetch(&self, criterion: &SortCriterion) -> CatalogResult<ResultSet> {
        let span = tracing::info_span!("fetch", criterion = %criterion);
        let scope = ObservationScope::new("FETCH", span);

        let outcome = self.connect().and_then(|conn| {
            let query = QueryBuilder::build(&self.source.table, criterion);
            tracing::debug!(
                parent: scope.span(),
                event = %Event::QueryPlanned,
                sql = %query.sql,
                params = query.params.len(),
            );
            Self::execute(&conn, &query)
        });

        match outcome {
            Ok(results) => {
                if results.is_empty() {
                    scope.span().in_scope(|| log_event(Event::NoResults));
                }
                scope.complete(results.len());
                Ok(results)
            }
            Err(e) => {
                let event = if e.is_unavailable() {
                    Event::DataSourceUnavailable
                } else {
                    Event::QueryFailed
                };
                scope.span().in_scope(|| log_event(event));
                scope.fail(e.code(), &e.to_string());
                Err(e)
            }
        }
    }

    /// Open a read-only connection. A missing database file is an error,
    /// never silently created.
    fn connect(&self) -> CatalogResult<Connection> {
        let path = &self.source.path;
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(path, flags)
            .map_err(|e| CatalogError::unavailable(display_path(path), e))?;

        if let Some(timeout) = self.source.busy_timeout {
            conn.busy_timeout(timeout)
                .map_err(|e| CatalogError::unavailable(display_path(path), e))?;
        }

        Ok(conn)
    }

    fn execute(conn: &Connection, query: &CatalogQuery) -> CatalogResult<ResultSet> {
        let mut stmt = conn
            .prepare(&query.sql)
            .map_err(|e| classify(conn, e))?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(query.params.iter()))
            .map_err(CatalogError::query)?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(CatalogError::query)? {
            let mut record = Record::new();
            for (idx, column) in columns.iter().enumerate() {
                let value = row.get_ref(idx).map_err(CatalogError::query)?;
                record.insert(column.as_str(), project_value(value));
            }
            records.push(record);
        }

        Ok(ResultSet { columns, records })
    }
}

/// Render a column value as text; NULL stays `None`
fn project_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// SQLite opens files lazily; a file that is not a database only fails at
/// first use, and that still means the data source is unavailable.
fn classify(conn: &Connection, e: rusqlite::Error) -> CatalogError {
    match &e {
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::NotADatabase => {
            let path = conn.path().unwrap_or("<unknown>").to_string();
            CatalogError::unavailable(path, e)
        }
        _ => CatalogError::query(e),
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::{create_catalog, NewPlant};
    use crate::catalog::Letter;
    use tempfile::TempDir;

    fn names(results: &ResultSet) -> Vec<&str> {
        results.iter().filter_map(|r| r.get("name")).collect()
    }

    fn setup(plants: &[NewPlant]) -> (TempDir, QueryProjector) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("plants.db");
        create_catalog(&path, "plants", plants).unwrap();
        let projector = QueryProjector::new(DataSourceConfig::new(path, "plants"));
        (tmp, projector)
    }

    #[test]
    fn test_by_name_order() {
        let (_tmp, projector) = setup(&[
            NewPlant::new("Zelkova", "Japanese zelkova", "Ulmaceae"),
            NewPlant::new("Acer", "Maple", "Sapindaceae"),
            NewPlant::new("Betula", "Birch", "Betulaceae"),
        ]);

        let results = projector.fetch(&SortCriterion::ByName).unwrap();
        assert_eq!(names(&results), vec!["Acer", "Betula", "Zelkova"]);
    }

    #[test]
    fn test_columns_come_from_data_source() {
        let (_tmp, projector) = setup(&[NewPlant::new("Acer", "Maple", "Sapindaceae")]);

        let results = projector.fetch(&SortCriterion::ByName).unwrap();
        assert!(results.columns.contains(&"common_name".to_string()));
        assert!(results.columns.contains(&"cultivar_name".to_string()));
        assert_eq!(results.records[0].len(), results.columns.len());
    }

    #[test]
    fn test_null_cultivar_is_none() {
        let (_tmp, projector) = setup(&[NewPlant::new("Acer", "Maple", "Sapindaceae")]);

        let results = projector.fetch(&SortCriterion::ByName).unwrap();
        assert!(results.records[0].has_column("cultivar_name"));
        assert_eq!(results.records[0].get("cultivar_name"), None);
    }

    #[test]
    fn test_letter_without_match_is_empty() {
        let (_tmp, projector) = setup(&[NewPlant::new("Acer", "Maple", "Sapindaceae")]);

        let results = projector
            .fetch(&SortCriterion::ByLetter(Letter::new('z')))
            .unwrap();
        assert!(results.is_empty());
        assert!(!results.columns.is_empty());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let projector =
            QueryProjector::new(DataSourceConfig::new(tmp.path().join("absent.db"), "plants"));

        let err = projector.fetch(&SortCriterion::ByName).unwrap_err();
        assert!(err.is_unavailable());
        assert!(!tmp.path().join("absent.db").exists());
    }

    #[test]
    fn test_project_value() {
        assert_eq!(project_value(ValueRef::Null), None);
        assert_eq!(project_value(ValueRef::Integer(42)), Some("42".to_string()));
        assert_eq!(project_value(ValueRef::Real(1.5)), Some("1.5".to_string()));
        assert_eq!(
            project_value(ValueRef::Text(b"Acer")),
            Some("Acer".to_string())
        );
    }
}
