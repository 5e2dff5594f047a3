// src/engine/mod.rs

//! View engine for jsp-gantt.
//!
//! This module ties together:
//! - the view state (latest problem, answer, selection and published figure)
//! - the rebuild rule: rebuild in full whenever both documents are present
//!   and any input changed
//! - the main runtime event loop that reacts to:
//!   - document loads (initial and from the file watcher)
//!   - selection changes from stdin
//!   - shutdown signals
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use crate::errors::Result;
use crate::schema::{AnswerDoc, ProblemDoc};
use crate::selection::JobSelection;

/// Runtime options used by both the core and the async shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeOptions {
    /// If true, stop after the first rebuild attempt or the first failed
    /// load (used for `--once`).
    pub exit_when_built: bool,
}

/// Events flowing into the runtime from loaders, the watcher and stdin.
#[derive(Debug)]
pub enum RuntimeEvent {
    /// A problem document finished loading (or failed to).
    ProblemLoaded(Result<ProblemDoc>),
    /// An answer document finished loading (or failed to).
    AnswerLoaded(Result<AnswerDoc>),
    /// The user picked another job to highlight.
    SelectionChanged(JobSelection),
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod event_handlers;
pub mod runtime;
pub mod state;

pub use core::CoreRuntime;
pub use event_handlers::{CoreCommand, CoreStep};
pub use runtime::Runtime;
pub use state::ViewState;
