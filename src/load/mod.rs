// src/load/mod.rs

//! Document loading.
//!
//! Each document is read and validated on its own blocking task and reported
//! to the runtime as a single event. The two loads are independent: they may
//! finish in either order, and the core rebuilds once both are present.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::RuntimeEvent;
use crate::errors::{GanttError, Result};
use crate::fs::FileSystem;
use crate::schema::{AnswerDoc, ProblemDoc};
use crate::types::DocumentKind;

/// Read and validate a problem document.
pub fn load_problem(fs: &dyn FileSystem, path: &Path) -> Result<ProblemDoc> {
    let text = fs.read_to_string(path)?;
    ProblemDoc::from_json_str(&text)
}

/// Read and validate an answer document.
pub fn load_answer(fs: &dyn FileSystem, path: &Path) -> Result<AnswerDoc> {
    let text = fs.read_to_string(path)?;
    AnswerDoc::from_json_str(&text)
}

/// Load `path` as a `kind` document and wrap the outcome as a runtime event.
pub fn load_event(fs: &dyn FileSystem, kind: DocumentKind, path: &Path) -> RuntimeEvent {
    debug!(%kind, ?path, "loading document");
    match kind {
        DocumentKind::Problem => RuntimeEvent::ProblemLoaded(load_problem(fs, path)),
        DocumentKind::Answer => RuntimeEvent::AnswerLoaded(load_answer(fs, path)),
    }
}

/// Failure event for `kind`, used when the load itself could not run.
fn failed_event(kind: DocumentKind, err: GanttError) -> RuntimeEvent {
    match kind {
        DocumentKind::Problem => RuntimeEvent::ProblemLoaded(Err(err)),
        DocumentKind::Answer => RuntimeEvent::AnswerLoaded(Err(err)),
    }
}

/// Load a document off the async threads and return the resulting event.
pub async fn load_event_blocking(
    fs: Arc<dyn FileSystem>,
    kind: DocumentKind,
    path: PathBuf,
) -> RuntimeEvent {
    let result =
        tokio::task::spawn_blocking(move || load_event(fs.as_ref(), kind, &path)).await;

    match result {
        Ok(event) => event,
        Err(join_err) => failed_event(
            kind,
            GanttError::Other(anyhow!("{kind} loader task failed: {join_err}")),
        ),
    }
}

/// Spawn an independent load of one document, reporting to `runtime_tx`.
pub fn spawn_load(
    fs: Arc<dyn FileSystem>,
    kind: DocumentKind,
    path: PathBuf,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = load_event_blocking(fs, kind, path).await;
        if runtime_tx.send(event).await.is_err() {
            warn!(%kind, "runtime closed before document load finished");
        }
    })
}
