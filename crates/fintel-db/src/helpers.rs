//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual
//! datetime format (`SQLite`'s `datetime('now')` vs RFC 3339 written by us).

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use fintel_core::entities::FranchiseBrand;

use crate::error::DatabaseError;

/// Column list matching [`row_to_brand`], unqualified.
pub const BRAND_COLUMNS: &str = "id, name, sector, description, logo_url, website, \
     startup_cost_min, startup_cost_max, net_profit_margin, summary_pdf_url, created_at";

/// Number of columns in [`BRAND_COLUMNS`].
pub const BRAND_COLUMN_COUNT: i32 = 11;

/// [`BRAND_COLUMNS`] qualified with a table alias, e.g. `b.id, b.name, ...`.
#[must_use]
pub fn brand_columns(alias: &str) -> String {
    BRAND_COLUMNS
        .split(", ")
        .map(|column| format!("{alias}.{column}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Current time at the precision stored in the database.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Timestamp format written by every insert: fixed-width micros with `Z`,
/// so lexical order equals chronological order.
#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse a brand starting at column `offset` (see [`BRAND_COLUMNS`]).
///
/// # Errors
///
/// Returns `DatabaseError` if any column has the wrong type.
pub fn row_to_brand(row: &libsql::Row, offset: i32) -> Result<FranchiseBrand, DatabaseError> {
    Ok(FranchiseBrand {
        id: row.get::<String>(offset)?,
        name: row.get::<String>(offset + 1)?,
        sector: row.get::<String>(offset + 2)?,
        description: get_opt_string(row, offset + 3)?.unwrap_or_default(),
        logo_url: get_opt_string(row, offset + 4)?,
        website: get_opt_string(row, offset + 5)?,
        startup_cost_min: row.get::<Option<f64>>(offset + 6)?,
        startup_cost_max: row.get::<Option<f64>>(offset + 7)?,
        net_profit_margin: row.get::<Option<f64>>(offset + 8)?,
        summary_pdf_url: get_opt_string(row, offset + 9)?,
        created_at: parse_datetime(&row.get::<String>(offset + 10)?)?,
    })
}

/// Convert an optional float into a SQL value.
#[must_use]
pub fn opt_real(value: Option<f64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Real)
}

/// Convert an optional string into a SQL value.
#[must_use]
pub fn opt_text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00.000001Z").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc.timestamp(), sqlite.timestamp());
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn timestamp_is_fixed_width() {
        let a = timestamp(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
        let b = timestamp(DateTime::from_timestamp(1_700_000_000, 500_000_000).unwrap());
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn brand_columns_are_qualified() {
        let cols = brand_columns("b");
        assert!(cols.starts_with("b.id, b.name, b.sector"));
        assert_eq!(cols.split(", ").count(), BRAND_COLUMN_COUNT as usize);
    }
}
