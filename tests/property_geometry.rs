// tests/property_geometry.rs

use std::collections::HashSet;

use proptest::prelude::*;

use jsp_gantt::geometry::{build, PlotScale, MARGIN_FACTOR};
use jsp_gantt::schema::{AnswerDoc, ProblemDoc, ScheduledTask};
use jsp_gantt::selection::JobSelection;

// Strategy for a valid (problem, answer) pair: every scheduled operation id is
// taken modulo the operation count, so all references resolve.
fn documents_strategy() -> impl Strategy<Value = (ProblemDoc, AnswerDoc)> {
    (1..6usize, 1..20usize).prop_flat_map(|(machines, ops)| {
        let operations = proptest::collection::vec((0.0..50.0f64, 0..5u64), ops);
        let rows = proptest::collection::vec(
            proptest::collection::vec((any::<usize>(), 0.0..200.0f64), 0..8),
            machines,
        );

        (operations, rows).prop_map(move |(operations, rows)| {
            let problem = ProblemDoc::new(machines, operations);
            let process_list = rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|(op, start)| ScheduledTask::new(op % ops, start))
                        .collect()
                })
                .collect();
            (problem, AnswerDoc::new(process_list))
        })
    })
}

proptest! {
    #[test]
    fn test_every_task_becomes_a_consistent_rect(
        (problem, answer) in documents_strategy(),
        job in 0..6u64,
    ) {
        let geometry = build(&problem, &answer, JobSelection::job(job), PlotScale::UNIT).unwrap();

        prop_assert_eq!(geometry.rects.len(), answer.task_count());

        let tasks = answer.process_list().iter().enumerate().flat_map(|(m, row)| {
            row.iter().map(move |task| (m, task))
        });
        for (rect, (machine_index, task)) in geometry.rects.iter().zip(tasks) {
            let op = problem.operation(task.operation_id).unwrap();
            prop_assert_eq!(rect.machine, machine_index + 1);
            prop_assert_eq!(rect.start_time, task.start_time);
            prop_assert_eq!(rect.end_time, task.start_time + op.duration);
            prop_assert_eq!(rect.job_id, op.job_id);
            prop_assert_eq!(rect.selected, op.job_id == job);
        }

        let selected_jobs: HashSet<_> = geometry.selected().map(|r| r.job_id).collect();
        prop_assert!(selected_jobs.len() <= 1);
    }

    #[test]
    fn test_bounds_follow_latest_start(
        (problem, answer) in documents_strategy(),
        unit_width in 0.1..10.0f64,
        unit_height in 0.1..10.0f64,
    ) {
        let scale = PlotScale::new(unit_width, unit_height);
        let geometry = build(&problem, &answer, JobSelection::NONE, scale).unwrap();

        let max_start = answer.max_start_time().unwrap_or(0.0);
        prop_assert_eq!(geometry.axis.x_max, unit_width * max_start * MARGIN_FACTOR);
        prop_assert_eq!(
            geometry.axis.y_max,
            unit_height * problem.machine_count() as f64 * MARGIN_FACTOR
        );
        prop_assert_eq!(geometry.selected().count(), 0);
    }

    #[test]
    fn test_build_is_pure((problem, answer) in documents_strategy(), job in 0..6u64) {
        let a = build(&problem, &answer, JobSelection::job(job), PlotScale::UNIT).unwrap();
        let b = build(&problem, &answer, JobSelection::job(job), PlotScale::UNIT).unwrap();
        prop_assert_eq!(a, b);
    }
}
