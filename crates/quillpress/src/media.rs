//! Store for uploaded media files.
//!
//! Files are saved under a fixed upload directory using a sanitized
//! version of the client-supplied filename as the storage key. Two uploads
//! with the same sanitized name overwrite each other; no uniqueness is
//! enforced.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Sanitize a client-supplied filename for use as a storage key.
///
/// Path components are stripped, whitespace becomes `_`, and any character
/// outside ASCII alphanumerics, `.`, `-`, and `_` is dropped. Leading dots
/// are removed so the result can never name a hidden file or `..`.
/// An empty result falls back to `"unnamed"`.
pub fn sanitize_file_name(name: &str) -> String {
    let last = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = last
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned
    }
}

/// Media file store rooted at a fixed upload directory.
#[derive(Debug, Clone)]
pub struct MediaStore {
    upload_dir: PathBuf,
}

impl MediaStore {
    /// Creates a store rooted at `upload_dir`, creating the directory if
    /// it doesn't exist.
    pub fn new(upload_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let upload_dir = upload_dir.into();
        fs::create_dir_all(&upload_dir)?;
        Ok(Self { upload_dir })
    }

    /// Saves uploaded bytes under the sanitized client filename and
    /// returns the stored name.
    pub fn save(&self, client_name: &str, bytes: &[u8]) -> io::Result<String> {
        let name = sanitize_file_name(client_name);
        fs::write(self.upload_dir.join(&name), bytes)?;
        tracing::debug!(file = %name, size = bytes.len(), "saved media file");
        Ok(name)
    }

    /// Removes a stored file. A missing file, or a failing removal, is
    /// tolerated silently.
    pub fn delete(&self, name: &str) {
        let path = self.upload_dir.join(sanitize_file_name(name));
        if path.exists() {
            if let Err(err) = fs::remove_file(&path) {
                tracing::debug!(file = %name, %err, "could not remove media file");
            }
        }
    }

    /// Reads a stored file back, or `None` if it doesn't exist.
    ///
    /// The name is sanitized again on the way in, so a request can never
    /// reach outside the upload directory.
    pub fn open(&self, name: &str) -> Option<Vec<u8>> {
        fs::read(self.upload_dir.join(sanitize_file_name(name))).ok()
    }
}
