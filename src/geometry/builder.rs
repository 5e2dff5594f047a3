// src/geometry/builder.rs

//! Join of a problem and an answer into positioned rectangles.

use tracing::{debug, trace, warn};

use crate::errors::{GanttError, Result};
use crate::geometry::rect::{AxisBounds, Geometry, OperationRect};
use crate::geometry::PlotScale;
use crate::schema::{AnswerDoc, ProblemDoc};
use crate::selection::JobSelection;

/// Margin applied to both axis bounds.
pub const MARGIN_FACTOR: f64 = 1.1;

/// Gated entry point: fails with `Precondition` unless both documents are
/// present.
pub fn build_from_documents(
    problem: Option<&ProblemDoc>,
    answer: Option<&AnswerDoc>,
    selection: JobSelection,
    scale: PlotScale,
) -> Result<Geometry> {
    match (problem, answer) {
        (Some(problem), Some(answer)) => build(problem, answer, selection, scale),
        (None, None) => Err(GanttError::Precondition(
            "neither problem nor answer is loaded".to_string(),
        )),
        (None, Some(_)) => Err(GanttError::Precondition(
            "problem is not loaded".to_string(),
        )),
        (Some(_), None) => Err(GanttError::Precondition(
            "answer is not loaded".to_string(),
        )),
    }
}

/// Build the geometry for `answer` scheduled against `problem`.
///
/// Rects are emitted machine by machine, in each machine's list order.
/// The x bound follows the latest *start* time, so the last bar of the
/// busiest machine may reach past it.
pub fn build(
    problem: &ProblemDoc,
    answer: &AnswerDoc,
    selection: JobSelection,
    scale: PlotScale,
) -> Result<Geometry> {
    if answer.machine_rows() > problem.machine_count() {
        warn!(
            rows = answer.machine_rows(),
            machine_count = problem.machine_count(),
            "answer has more machine rows than the problem declares"
        );
    }

    let mut rects = Vec::with_capacity(answer.task_count());
    let mut max_start: Option<f64> = None;

    for (machine_index, tasks) in answer.process_list().iter().enumerate() {
        for task in tasks {
            let operation = problem.operation(task.operation_id).ok_or_else(|| {
                GanttError::UnknownOperation {
                    operation_id: task.operation_id,
                    operation_count: problem.operation_count(),
                }
            })?;

            let rect = OperationRect {
                start_time: task.start_time,
                end_time: task.start_time + operation.duration,
                machine: machine_index + 1,
                job_id: operation.job_id,
                operation_id: task.operation_id,
                selected: selection.matches(operation.job_id),
            };
            trace!(?rect, "emit rect");
            rects.push(rect);

            max_start = Some(match max_start {
                Some(m) => m.max(task.start_time),
                None => task.start_time,
            });
        }
    }

    let axis = AxisBounds {
        x_max: scale.unit_width * max_start.unwrap_or(0.0) * MARGIN_FACTOR,
        y_max: scale.unit_height * problem.machine_count() as f64 * MARGIN_FACTOR,
    };

    debug!(
        rects = rects.len(),
        %selection,
        x_max = axis.x_max,
        y_max = axis.y_max,
        "geometry built"
    );

    Ok(Geometry { rects, axis })
}
