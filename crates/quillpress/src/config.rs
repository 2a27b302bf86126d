use std::env;

/// Application configuration loaded from environment variables.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "quillpress.db")
    pub database_path: String,
    /// Directory where uploaded media files are stored (default: "uploads")
    pub upload_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `QUILLPRESS_DB` - SQLite database path (default: "quillpress.db")
    /// - `QUILLPRESS_UPLOADS` - upload directory (default: "uploads")
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("QUILLPRESS_DB")
                .unwrap_or_else(|_| "quillpress.db".to_string()),
            upload_dir: env::var("QUILLPRESS_UPLOADS").unwrap_or_else(|_| "uploads".to_string()),
        }
    }
}
