// src/engine/event_handlers.rs

//! Event handling logic for the core runtime.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::PlotSection;
use crate::engine::state::ViewState;
use crate::engine::RuntimeOptions;
use crate::errors::Result;
use crate::geometry::{build_from_documents, Figure, PlotScale};
use crate::schema::{AnswerDoc, ProblemDoc};
use crate::selection::JobSelection;
use crate::types::DocumentKind;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum CoreCommand {
    /// Hand this figure to the render sink. It replaces any earlier one.
    Publish(Arc<Figure>),
    /// A load or rebuild failed; the previously published figure stays.
    ReportError(String),
    /// Request that the process exits (used for `--once`).
    RequestExit,
}

/// Decision returned by the core after handling a single `RuntimeEvent`.
#[derive(Debug, Clone)]
pub struct CoreStep {
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    /// Figures published by this step, in order.
    pub fn published(&self) -> impl Iterator<Item = &Arc<Figure>> {
        self.commands.iter().filter_map(|c| match c {
            CoreCommand::Publish(figure) => Some(figure),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            CoreCommand::ReportError(msg) => Some(msg.as_str()),
            _ => None,
        })
    }
}

/// Outcome of handling one event, before once-mode is applied.
enum Outcome {
    /// Nothing was attempted (still waiting for a document, or no change).
    Idle,
    /// A rebuild or a load failure happened.
    Settled(Vec<CoreCommand>),
}

/// Handle a finished problem load.
///
/// A failed load keeps the previous problem, if any.
pub fn handle_problem_loaded(
    state: &mut ViewState,
    plot: &PlotSection,
    options: &RuntimeOptions,
    result: Result<ProblemDoc>,
) -> CoreStep {
    let outcome = match result {
        Ok(problem) => {
            info!(
                operations = problem.operation_count(),
                machines = problem.machine_count(),
                "problem loaded"
            );
            state.set_problem(problem);
            rebuild(state, plot)
        }
        Err(err) => load_failed(state, DocumentKind::Problem, &err.to_string()),
    };
    finish(outcome, options)
}

/// Handle a finished answer load.
///
/// A failed load keeps the previous answer, if any.
pub fn handle_answer_loaded(
    state: &mut ViewState,
    plot: &PlotSection,
    options: &RuntimeOptions,
    result: Result<AnswerDoc>,
) -> CoreStep {
    let outcome = match result {
        Ok(answer) => {
            info!(
                machines = answer.machine_rows(),
                tasks = answer.task_count(),
                "answer loaded"
            );
            state.set_answer(answer);
            rebuild(state, plot)
        }
        Err(err) => load_failed(state, DocumentKind::Answer, &err.to_string()),
    };
    finish(outcome, options)
}

/// Handle a new job selection. Re-selecting the current job is a no-op.
pub fn handle_selection_changed(
    state: &mut ViewState,
    plot: &PlotSection,
    options: &RuntimeOptions,
    selection: JobSelection,
) -> CoreStep {
    if !state.set_selection(selection) {
        debug!(%selection, "selection unchanged");
        return finish(Outcome::Idle, options);
    }

    info!(%selection, "selection changed");
    finish(rebuild(state, plot), options)
}

/// Rebuild geometry and figure from scratch if both documents are present.
fn rebuild(state: &mut ViewState, plot: &PlotSection) -> Outcome {
    if !state.is_ready() {
        debug!(
            problem = state.problem().is_some(),
            answer = state.answer().is_some(),
            "waiting for both documents before building"
        );
        return Outcome::Idle;
    }

    let built = build_from_documents(
        state.problem(),
        state.answer(),
        state.selection(),
        PlotScale::from(plot),
    );

    match built {
        Ok(geometry) => {
            let figure = Arc::new(Figure::from_geometry(&geometry, plot));
            state.replace_output(Arc::new(geometry), Arc::clone(&figure));
            Outcome::Settled(vec![CoreCommand::Publish(figure)])
        }
        Err(err) => {
            let message = format!("rebuild failed: {err}");
            error!(error = %err, "rebuild failed; keeping previous figure");
            state.record_error(message.clone());
            Outcome::Settled(vec![CoreCommand::ReportError(message)])
        }
    }
}

fn load_failed(state: &mut ViewState, kind: DocumentKind, err: &str) -> Outcome {
    let message = format!("failed to load {kind}: {err}");
    error!(%kind, error = %err, "document load failed; keeping previous version");
    state.record_error(message.clone());
    Outcome::Settled(vec![CoreCommand::ReportError(message)])
}

/// Apply once-mode: the first settled outcome ends the run.
fn finish(outcome: Outcome, options: &RuntimeOptions) -> CoreStep {
    match outcome {
        Outcome::Idle => CoreStep {
            commands: Vec::new(),
            keep_running: true,
        },
        Outcome::Settled(mut commands) => {
            let keep_running = !options.exit_when_built;
            if !keep_running {
                commands.push(CoreCommand::RequestExit);
            }
            CoreStep {
                commands,
                keep_running,
            }
        }
    }
}
