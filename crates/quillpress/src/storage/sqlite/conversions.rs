//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types,
//! testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use quillpress_core::blog::Post;

/// Convert a SQLite row to a Post.
///
/// Expected columns: id, title, content, filename, date_created, views, pinned
pub fn row_to_post(row: &Row) -> rusqlite::Result<Post> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let content: String = row.get(2)?;
    let filename: Option<String> = row.get(3)?;
    let date_created: String = row.get(4)?;
    let views: i64 = row.get(5)?;
    let pinned: i64 = row.get(6)?;

    Ok(Post {
        id,
        title,
        content,
        filename,
        date_created: parse_datetime(&date_created)?,
        views,
        pinned: pinned != 0,
    })
}

/// Parse a datetime from RFC 3339 string.
pub fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a datetime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
