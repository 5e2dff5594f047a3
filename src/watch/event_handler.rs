// src/watch/event_handler.rs

//! Event processing logic for file system changes.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::RuntimeEvent;
use crate::fs::FileSystem;
use crate::load::load_event_blocking;
use crate::watch::cache::ContentCache;
use crate::watch::hash::compute_content_hash;
use crate::watch::path_utils::is_same_file;
use crate::watch::WatchTarget;

/// Process a single changed path and reload the document(s) it holds.
///
/// This function:
/// 1. Finds the watch targets the path refers to
/// 2. Skips targets whose content hash did not change
/// 3. Reloads the rest and sends their load events to the runtime
///
/// Returns the number of load events sent.
pub async fn process_file_change(
    fs: Arc<dyn FileSystem>,
    targets: &[WatchTarget],
    path: &Path,
    runtime_tx: &mpsc::Sender<RuntimeEvent>,
    cache: &mut ContentCache,
) -> usize {
    let mut sent = 0;

    for target in targets {
        if !is_same_file(fs.as_ref(), &target.path, path) {
            continue;
        }

        let hash = match compute_content_hash(fs.as_ref(), &target.path) {
            Ok(hash) => hash,
            Err(err) => {
                // Removed, or replaced mid-save. Forget the old hash so the
                // file reloads when it comes back, even with the same content.
                debug!(kind = %target.kind, error = %err, "could not hash changed file");
                cache.invalidate(&target.path);
                continue;
            }
        };

        if !cache.record(&target.path, hash) {
            debug!(kind = %target.kind, ?path, "content unchanged; skipping reload");
            continue;
        }

        info!(kind = %target.kind, path = ?target.path, "input changed; reloading");

        let event = load_event_blocking(Arc::clone(&fs), target.kind, target.path.clone()).await;
        if runtime_tx.send(event).await.is_err() {
            warn!("runtime closed; dropping reload of {}", target.kind);
            break;
        }
        sent += 1;
    }

    sent
}
