//! Persisted access-token cache.
//!
//! Tokens are keyed by user alias, cached in memory, and written back to a
//! JSON file on every mutation so a cleared token stays cleared across
//! editor restarts.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

/// Errors from token store operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Access-token store backed by a JSON file.
pub struct TokenStore {
    path: PathBuf,
    tokens: RwLock<HashMap<String, String>>,
}

impl TokenStore {
    /// Opens the store, loading any existing tokens from disk.
    /// A missing file is an empty store, not an error.
    pub fn new(path: PathBuf) -> Result<Self, TokenError> {
        let tokens = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            let loaded: HashMap<String, String> = serde_json::from_str(&data)?;
            debug!("loaded {} access token(s) from {:?}", loaded.len(), path);
            loaded
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            tokens: RwLock::new(tokens),
        })
    }

    /// Returns the token stored for an alias, if any.
    pub fn get(&self, alias: &str) -> Option<String> {
        self.tokens.read().unwrap().get(alias).cloned()
    }

    /// Stores a token for an alias, replacing any previous one.
    pub fn save(&self, alias: &str, token: &str) -> Result<(), TokenError> {
        {
            let mut map = self.tokens.write().unwrap();
            map.insert(alias.to_string(), token.to_string());
        }
        self.persist()
    }

    /// Removes the token for an alias. Removing an absent alias still
    /// rewrites the file and succeeds.
    pub fn clear(&self, alias: &str) -> Result<(), TokenError> {
        {
            let mut map = self.tokens.write().unwrap();
            map.remove(alias);
        }
        self.persist()
    }

    /// Returns all aliases with a stored token.
    pub fn aliases(&self) -> Vec<String> {
        self.tokens.read().unwrap().keys().cloned().collect()
    }

    fn persist(&self) -> Result<(), TokenError> {
        let map = self.tokens.read().unwrap();
        let json = serde_json::to_string_pretty(&*map)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;
        restrict_permissions(&self.path);
        debug!("persisted {} access token(s) to {:?}", map.len(), self.path);
        Ok(())
    }
}

/// Tokens are credentials; keep the file owner-readable only.
fn restrict_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600));
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
}
