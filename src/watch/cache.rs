// src/watch/cache.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Last seen content hash per watched file.
#[derive(Debug, Default)]
pub struct ContentCache {
    hashes: HashMap<PathBuf, String>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self {
            hashes: HashMap::new(),
        }
    }

    /// Store `hash` for `path`. Returns true if it differs from the previous
    /// one (or there was none).
    pub fn record(&mut self, path: &Path, hash: String) -> bool {
        match self.hashes.get(path) {
            Some(previous) if *previous == hash => false,
            _ => {
                debug!(?path, %hash, "content hash updated");
                self.hashes.insert(path.to_path_buf(), hash);
                true
            }
        }
    }

    /// Forget `path`, so its next event always reloads.
    pub fn invalidate(&mut self, path: &Path) {
        if self.hashes.remove(path).is_some() {
            debug!("invalidated cache for {:?}", path);
        }
    }
}
