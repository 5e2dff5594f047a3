// src/watch/watcher.rs

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::RuntimeEvent;
use crate::fs::FileSystem;
use crate::watch::cache::ContentCache;
use crate::watch::event_handler::process_file_change;
use crate::watch::hash::compute_content_hash;
use crate::watch::path_utils::resolve_watch_path;
use crate::watch::WatchTarget;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher for the given input files and send a fresh
/// load event to `runtime_tx` whenever one of them changes content.
///
/// The parent directory of each file is watched (non-recursively) rather than
/// the file itself, so that editors which save by replacing the file are
/// still picked up.
pub fn spawn_watcher(
    targets: Vec<WatchTarget>,
    fs: Arc<dyn FileSystem>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    // Resolve once so event paths can be compared against absolute paths,
    // including files that do not exist yet.
    let targets: Vec<WatchTarget> = targets
        .into_iter()
        .map(|t| {
            let path = resolve_watch_path(fs.as_ref(), &t.path);
            debug!(kind = %t.kind, ?path, "watch target resolved");
            WatchTarget::new(t.kind, path)
        })
        .collect();

    let dirs: BTreeSet<PathBuf> = targets
        .iter()
        .filter_map(|t| t.path.parent().map(|p| p.to_path_buf()))
        .collect();

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // Not inside the runtime here, so fall back to stderr.
                    eprintln!("jsp-gantt: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("jsp-gantt: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        info!("file watcher started on {:?}", dir);
    }

    // Seed hashes from the current files, which the initial loads read.
    let mut cache = ContentCache::new();
    for target in &targets {
        if let Ok(hash) = compute_content_hash(fs.as_ref(), &target.path) {
            cache.record(&target.path, hash);
        }
    }

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if event.kind.is_access() {
                continue;
            }
            debug!(?event, "received notify event");

            for path in &event.paths {
                process_file_change(Arc::clone(&fs), &targets, path, &runtime_tx, &mut cache)
                    .await;
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}
