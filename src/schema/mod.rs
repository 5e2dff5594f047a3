// src/schema/mod.rs

//! Input documents: the problem (what has to be done) and the answer (when and
//! where each operation runs).
//!
//! Documents go through two stages:
//! 1. a structural presence check on the decoded JSON value
//!    ([`problem_is_set`], [`answer_is_set`]);
//! 2. typed validation into [`ProblemDoc`] / [`AnswerDoc`], done once at load
//!    time. Anything downstream only ever sees validated documents.

pub mod answer;
pub mod problem;

use serde_json::Value;

pub use answer::{AnswerDoc, ScheduledTask};
pub use problem::{Operation, ProblemDoc};

/// JSON key whose presence marks a problem document as set.
pub const PROBLEM_KEY: &str = "operations";

/// JSON key whose presence marks an answer document as set.
pub const ANSWER_KEY: &str = "process_list";

/// True iff `problem` carries an `operations` field.
///
/// This is a presence check only; the field's contents are validated by
/// [`ProblemDoc::from_value`].
pub fn problem_is_set(problem: &Value) -> bool {
    problem.get(PROBLEM_KEY).is_some()
}

/// True iff `answer` carries a `process_list` field.
pub fn answer_is_set(answer: &Value) -> bool {
    answer.get(ANSWER_KEY).is_some()
}
