// src/schema/answer.rs

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{GanttError, Result};
use crate::schema::answer_is_set;
use crate::types::OperationId;

/// One entry of a machine's schedule. The end time is not stored; it follows
/// from the referenced operation's duration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScheduledTask {
    pub operation_id: OperationId,
    pub start_time: f64,
}

impl ScheduledTask {
    pub fn new(operation_id: OperationId, start_time: f64) -> Self {
        Self {
            operation_id,
            start_time,
        }
    }
}

/// Validated answer document: `process_list[m]` is machine `m`'s task list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnswerDoc {
    process_list: Vec<Vec<ScheduledTask>>,
}

impl AnswerDoc {
    pub fn new(process_list: Vec<Vec<ScheduledTask>>) -> Self {
        Self { process_list }
    }

    /// Validate a decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        if !answer_is_set(&value) {
            return Err(GanttError::Schema(
                "answer document has no `process_list` field".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| GanttError::Schema(format!("answer document: {e}")))
    }

    /// Decode and validate answer JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn process_list(&self) -> &[Vec<ScheduledTask>] {
        &self.process_list
    }

    /// Number of machine rows in the schedule.
    pub fn machine_rows(&self) -> usize {
        self.process_list.len()
    }

    /// Total number of scheduled tasks over all machines.
    pub fn task_count(&self) -> usize {
        self.process_list.iter().map(Vec::len).sum()
    }

    /// Latest start time over all tasks, `None` for an empty schedule.
    pub fn max_start_time(&self) -> Option<f64> {
        self.process_list
            .iter()
            .flatten()
            .map(|task| task.start_time)
            .reduce(f64::max)
    }
}
