//! Query construction for catalog fetches
//!
//! Produces the statement text and its bound parameters for a criterion.
//! Caller input only ever reaches the data source as a bound parameter;
//! the statement text depends on the criterion variant and the configured
//! table name alone.

use super::criterion::SortCriterion;

/// Botanical name column
pub const NAME_COLUMN: &str = "name";
/// Common name column
pub const COMMON_NAME_COLUMN: &str = "common_name";
/// Family column
pub const FAMILY_COLUMN: &str = "family";

/// A statement ready to be prepared, with its positional parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Statement text
    pub sql: String,
    /// Positional parameters (`?1`, `?2`, ...)
    pub params: Vec<String>,
    /// Columns in `ORDER BY` order
    pub order_by: Vec<&'static str>,
}

/// Builds catalog queries
pub struct QueryBuilder;

impl QueryBuilder {
    /// Build the query for `criterion` against `table`.
    pub fn build(table: &str, criterion: &SortCriterion) -> CatalogQuery {
        let table = quote_identifier(table);

        let (filter, params, order_by) = match criterion {
            SortCriterion::ByName => (None, Vec::new(), vec![NAME_COLUMN]),
            SortCriterion::ByCommonName => (None, Vec::new(), vec![COMMON_NAME_COLUMN]),
            SortCriterion::ByFamily => (None, Vec::new(), vec![FAMILY_COLUMN, NAME_COLUMN]),
            SortCriterion::ByLetter(letter) => (
                // substr counts characters, so multi-byte letters compare whole
                Some(format!("substr({NAME_COLUMN}, 1, 1) IN (?1, ?2)")),
                vec![letter.lower(), letter.upper()],
                vec![NAME_COLUMN],
            ),
        };

        let mut sql = format!("SELECT * FROM {table}");
        if let Some(filter) = filter {
            sql.push_str(" WHERE ");
            sql.push_str(&filter);
        }
        // Keys ignore case; names equal under NOCASE fall back to byte order.
        let mut keys: Vec<String> = order_by
            .iter()
            .map(|column| format!("{column} COLLATE NOCASE ASC"))
            .collect();
        keys.push(format!("{NAME_COLUMN} ASC"));

        sql.push_str(" ORDER BY ");
        sql.push_str(&keys.join(", "));

        CatalogQuery {
            sql,
            params,
            order_by,
        }
    }
}

/// Quote an SQL identifier, doubling embedded quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Letter;

    #[test]
    fn test_by_name() {
        let q = QueryBuilder::build("plants", &SortCriterion::ByName);
        assert_eq!(
            q.sql,
            "SELECT * FROM \"plants\" ORDER BY name COLLATE NOCASE ASC, name ASC"
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn test_by_common_name() {
        let q = QueryBuilder::build("plants", &SortCriterion::ByCommonName);
        assert_eq!(
            q.sql,
            "SELECT * FROM \"plants\" ORDER BY common_name COLLATE NOCASE ASC, name ASC"
        );
    }

    #[test]
    fn test_by_family_breaks_ties_by_name() {
        let q = QueryBuilder::build("plants", &SortCriterion::ByFamily);
        assert_eq!(
            q.sql,
            "SELECT * FROM \"plants\" \
             ORDER BY family COLLATE NOCASE ASC, name COLLATE NOCASE ASC, name ASC"
        );
        assert_eq!(q.order_by, vec!["family", "name"]);
    }

    #[test]
    fn test_by_letter_binds_both_cases() {
        let q = QueryBuilder::build("plants", &SortCriterion::ByLetter(Letter::new('B')));
        assert_eq!(
            q.sql,
            "SELECT * FROM \"plants\" WHERE substr(name, 1, 1) IN (?1, ?2) \
             ORDER BY name COLLATE NOCASE ASC, name ASC"
        );
        assert_eq!(q.params, vec!["b".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_letter_never_reaches_statement_text() {
        let q = QueryBuilder::build("plants", &SortCriterion::ByLetter(Letter::new('\'')));
        assert!(!q.sql.contains('\''));
        assert_eq!(q.params, vec!["'".to_string(), "'".to_string()]);
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("plants"), "\"plants\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
