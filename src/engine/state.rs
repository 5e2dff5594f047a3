// src/engine/state.rs

//! Latest inputs and outputs of the view.

use std::sync::Arc;

use crate::geometry::{Figure, Geometry};
use crate::schema::{AnswerDoc, ProblemDoc};
use crate::selection::JobSelection;

/// What the view currently holds.
///
/// Outputs are shared immutably; a rebuild swaps in new `Arc`s and never
/// touches the previous values, so a figure handed to a sink stays valid.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    problem: Option<Arc<ProblemDoc>>,
    answer: Option<Arc<AnswerDoc>>,
    selection: JobSelection,
    geometry: Option<Arc<Geometry>>,
    figure: Option<Arc<Figure>>,
    last_error: Option<String>,
}

impl ViewState {
    pub fn new(selection: JobSelection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Both documents are loaded, so geometry can be built.
    pub fn is_ready(&self) -> bool {
        self.problem.is_some() && self.answer.is_some()
    }

    pub fn problem(&self) -> Option<&ProblemDoc> {
        self.problem.as_deref()
    }

    pub fn answer(&self) -> Option<&AnswerDoc> {
        self.answer.as_deref()
    }

    pub fn selection(&self) -> JobSelection {
        self.selection
    }

    pub fn geometry(&self) -> Option<&Arc<Geometry>> {
        self.geometry.as_ref()
    }

    pub fn figure(&self) -> Option<&Arc<Figure>> {
        self.figure.as_ref()
    }

    /// Message of the most recent failed load or rebuild, cleared by the next
    /// successful rebuild.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn set_problem(&mut self, problem: ProblemDoc) {
        self.problem = Some(Arc::new(problem));
    }

    pub(crate) fn set_answer(&mut self, answer: AnswerDoc) {
        self.answer = Some(Arc::new(answer));
    }

    /// Returns false when `selection` is already current.
    pub(crate) fn set_selection(&mut self, selection: JobSelection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        true
    }

    pub(crate) fn replace_output(&mut self, geometry: Arc<Geometry>, figure: Arc<Figure>) {
        self.geometry = Some(geometry);
        self.figure = Some(figure);
        self.last_error = None;
    }

    pub(crate) fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }
}
