// src/engine/core.rs

//! Pure core runtime state machine.
//!
//! This module contains a synchronous, deterministic "core runtime" that
//! consumes [`RuntimeEvent`]s and produces:
//! - an updated view state
//! - a list of commands describing what the IO shell should do next
//!
//! The async shell (`engine::runtime::Runtime`) is responsible for:
//! - reading events from channels
//! - handing published figures to the render sink
//! - handling Ctrl+C / shutdown
//!
//! The core is unit tested without any Tokio, channels or filesystem.

use crate::config::PlotSection;
use crate::engine::event_handlers::{
    handle_answer_loaded, handle_problem_loaded, handle_selection_changed, CoreStep,
};
use crate::engine::state::ViewState;
use crate::engine::{RuntimeEvent, RuntimeOptions};
use crate::selection::JobSelection;

/// Pure core runtime state.
///
/// It has **no** channels, no Tokio types, and does not perform any IO.
#[derive(Debug)]
pub struct CoreRuntime {
    state: ViewState,
    plot: PlotSection,
    options: RuntimeOptions,
}

impl CoreRuntime {
    pub fn new(plot: PlotSection, selection: JobSelection, options: RuntimeOptions) -> Self {
        Self {
            state: ViewState::new(selection),
            plot,
            options,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn options(&self) -> RuntimeOptions {
        self.options
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Handle a single runtime event, updating state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: RuntimeEvent) -> CoreStep {
        match event {
            RuntimeEvent::ProblemLoaded(result) => {
                handle_problem_loaded(&mut self.state, &self.plot, &self.options, result)
            }
            RuntimeEvent::AnswerLoaded(result) => {
                handle_answer_loaded(&mut self.state, &self.plot, &self.options, result)
            }
            RuntimeEvent::SelectionChanged(selection) => {
                handle_selection_changed(&mut self.state, &self.plot, &self.options, selection)
            }
            RuntimeEvent::ShutdownRequested => CoreStep {
                commands: Vec::new(),
                keep_running: false,
            },
        }
    }
}
