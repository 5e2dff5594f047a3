// src/schema/problem.rs

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{GanttError, Result};
use crate::schema::problem_is_set;
use crate::types::{JobId, OperationId};

/// One unit of work. `id` is its position in the problem's operation list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation {
    pub id: OperationId,
    pub job_id: JobId,
    pub duration: f64,
}

/// Validated problem document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemDoc {
    operations: Vec<Operation>,
    machine_count: usize,
}

/// Problem as written by the solver. Extra fields (`id`, `machine`,
/// `job_size`, `operation_table`) are ignored.
#[derive(Debug, Deserialize)]
struct RawProblemDoc {
    operations: Vec<RawOperation>,
    machine_size: usize,
}

#[derive(Debug, Deserialize)]
struct RawOperation {
    time: f64,
    job: JobId,
}

impl ProblemDoc {
    /// Build a problem from `(duration, job_id)` pairs, in operation-id order.
    pub fn new<I>(machine_count: usize, operations: I) -> Self
    where
        I: IntoIterator<Item = (f64, JobId)>,
    {
        let operations = operations
            .into_iter()
            .enumerate()
            .map(|(id, (duration, job_id))| Operation {
                id,
                job_id,
                duration,
            })
            .collect();

        Self {
            operations,
            machine_count,
        }
    }

    /// Validate a decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        if !problem_is_set(&value) {
            return Err(GanttError::Schema(
                "problem document has no `operations` field".to_string(),
            ));
        }

        let raw: RawProblemDoc = serde_json::from_value(value)
            .map_err(|e| GanttError::Schema(format!("problem document: {e}")))?;

        Ok(Self::new(
            raw.machine_size,
            raw.operations.into_iter().map(|op| (op.time, op.job)),
        ))
    }

    /// Decode and validate problem JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn operation(&self, id: OperationId) -> Option<&Operation> {
        self.operations.get(id)
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Number of distinct jobs referenced by the operations.
    pub fn job_count(&self) -> usize {
        self.operations
            .iter()
            .map(|op| op.job_id)
            .collect::<BTreeSet<_>>()
            .len()
    }
}
