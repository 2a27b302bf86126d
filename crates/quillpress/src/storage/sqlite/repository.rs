//! SQLite repository implementation.
//!
//! Implements the `PostRepository` trait from `quillpress_core::storage`
//! on top of a single `tokio_rusqlite` connection.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use quillpress_core::blog::{NewPost, Post, PostChanges};
use quillpress_core::storage::{PostRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_post};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Username and password of the administrator row seeded on first startup.
/// Nothing reads this row; no login flow exists.
const SEED_ADMIN_USERNAME: &str = "admin";
const SEED_ADMIN_PASSWORD: &str = "admin123";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based post repository.
///
/// Owns one background connection through which every statement is
/// serialized. There is no pool and no transaction spanning statements.
pub struct SqlitePostRepository {
    conn: Connection,
}

impl SqlitePostRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file is created if it doesn't exist. The schema is
    /// created idempotently and the admin row is seeded if the table is
    /// empty.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema and seed the admin account.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;

            let admin_count: i64 = conn
                .query_row(schema::COUNT_ADMIN_USERS, [], |row| row.get(0))
                .map_err(wrap_err)?;
            if admin_count == 0 {
                conn.execute(
                    schema::SEED_ADMIN_USER,
                    rusqlite::params![SEED_ADMIN_USERNAME, SEED_ADMIN_PASSWORD],
                )
                .map_err(wrap_err)?;
            }

            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_POSTS_DESC).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_post).map_err(wrap_err)?;

                let mut posts = Vec::new();
                for row_result in rows {
                    posts.push(row_result.map_err(wrap_err)?);
                }
                Ok(posts)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Post"))
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_POST_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_post) {
                    Ok(post) => Ok(Some(post)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", id.to_string()))
    }

    async fn create_post(&self, post: &NewPost) -> Result<i64> {
        let title = post.title.clone();
        let content = post.content.clone();
        let filename = post.filename.clone();
        let date_created = format_datetime(&post.date_created);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_POST,
                    rusqlite::params![title, content, filename, date_created],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Post"))
    }

    async fn update_post(&self, id: i64, changes: &PostChanges) -> Result<()> {
        let title = changes.title.clone();
        let content = changes.content.clone();
        let filename = changes.filename.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_POST,
                        rusqlite::params![id, title, content, filename],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", id.to_string()))
    }

    async fn delete_post(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_POST, [id]).map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", id.to_string()))
    }
}
