// src/watch/mod.rs

//! File watching and change detection for the two input documents.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the
//!   directories holding the problem and answer files.
//! - Content hashing, so that a save that leaves the file unchanged (or the
//!   second of several events for one save) does not reload anything.
//!
//! It does **not** know how geometry is built; it only turns file changes
//! into `ProblemLoaded` / `AnswerLoaded` events.

pub mod cache;
pub mod event_handler;
pub mod hash;
pub mod path_utils;
pub mod watcher;

use std::path::PathBuf;

use crate::types::DocumentKind;

pub use cache::ContentCache;
pub use event_handler::process_file_change;
pub use hash::compute_content_hash;
pub use watcher::{spawn_watcher, WatcherHandle};

/// A watched input file and the document it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub kind: DocumentKind,
    pub path: PathBuf,
}

impl WatchTarget {
    pub fn new(kind: DocumentKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}
