#![allow(dead_code)]

use jsp_gantt::schema::{AnswerDoc, ProblemDoc, ScheduledTask};
use jsp_gantt::types::JobId;
use serde_json::{json, Value};

/// Builder for problem documents, as typed values or as solver JSON.
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    machine_count: usize,
    operations: Vec<(f64, JobId)>,
}

impl ProblemBuilder {
    pub fn new(machine_count: usize) -> Self {
        Self {
            machine_count,
            operations: Vec::new(),
        }
    }

    /// Append an operation; its id is its position.
    pub fn op(mut self, duration: f64, job: JobId) -> Self {
        self.operations.push((duration, job));
        self
    }

    pub fn build(self) -> ProblemDoc {
        ProblemDoc::new(self.machine_count, self.operations)
    }

    pub fn to_json(&self) -> Value {
        let operations: Vec<Value> = self
            .operations
            .iter()
            .map(|(time, job)| json!({ "time": time, "job": job }))
            .collect();
        json!({
            "operations": operations,
            "machine_size": self.machine_count,
        })
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

/// Builder for answer documents: one `machine()` call per machine row.
#[derive(Debug, Clone, Default)]
pub struct AnswerBuilder {
    process_list: Vec<Vec<(usize, f64)>>,
}

impl AnswerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a machine row of `(operation_id, start_time)` pairs.
    pub fn machine(mut self, tasks: &[(usize, f64)]) -> Self {
        self.process_list.push(tasks.to_vec());
        self
    }

    pub fn build(self) -> AnswerDoc {
        AnswerDoc::new(
            self.process_list
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|(op, start)| ScheduledTask::new(op, start))
                        .collect()
                })
                .collect(),
        )
    }

    pub fn to_json(&self) -> Value {
        let rows: Vec<Value> = self
            .process_list
            .iter()
            .map(|row| {
                Value::Array(
                    row.iter()
                        .map(|(op, start)| json!({ "operation_id": op, "start_time": start }))
                        .collect(),
                )
            })
            .collect();
        json!({ "process_list": rows })
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

/// The two-operation example: job 0 runs 2 units on machine 1 from t=0,
/// job 1 runs 3 units on machine 2 from t=1.
pub fn two_job_problem() -> ProblemBuilder {
    ProblemBuilder::new(2).op(2.0, 0).op(3.0, 1)
}

pub fn two_job_answer() -> AnswerBuilder {
    AnswerBuilder::new().machine(&[(0, 0.0)]).machine(&[(1, 1.0)])
}
