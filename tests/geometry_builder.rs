// tests/geometry_builder.rs

use jsp_gantt::errors::GanttError;
use jsp_gantt::geometry::{build, build_from_documents, OperationRect, PlotScale};
use jsp_gantt::selection::JobSelection;
use jsp_gantt_test_utils::builders::{two_job_answer, two_job_problem, AnswerBuilder, ProblemBuilder};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_join_produces_one_rect_per_task() {
    let problem = two_job_problem().build();
    let answer = two_job_answer().build();

    let geometry = build(&problem, &answer, JobSelection::NONE, PlotScale::UNIT).unwrap();

    assert_eq!(
        geometry.rects,
        vec![
            OperationRect {
                start_time: 0.0,
                end_time: 2.0,
                machine: 1,
                job_id: 0,
                operation_id: 0,
                selected: false,
            },
            OperationRect {
                start_time: 1.0,
                end_time: 4.0,
                machine: 2,
                job_id: 1,
                operation_id: 1,
                selected: false,
            },
        ]
    );
}

#[test]
fn test_selection_highlights_only_matching_job() {
    let problem = two_job_problem().build();
    let answer = two_job_answer().build();

    let geometry = build(&problem, &answer, JobSelection::job(1), PlotScale::UNIT).unwrap();
    let selected: Vec<_> = geometry.rects.iter().map(|r| r.selected).collect();
    assert_eq!(selected, vec![false, true]);

    let geometry = build(&problem, &answer, JobSelection::job(0), PlotScale::UNIT).unwrap();
    let selected: Vec<_> = geometry.rects.iter().map(|r| r.selected).collect();
    assert_eq!(selected, vec![true, false]);

    let geometry = build(&problem, &answer, JobSelection::job(99), PlotScale::UNIT).unwrap();
    assert_eq!(geometry.selected().count(), 0);
}

#[test]
fn test_selection_from_text_input() {
    let problem = two_job_problem().build();
    let answer = two_job_answer().build();

    let geometry = build(&problem, &answer, JobSelection::parse("1"), PlotScale::UNIT).unwrap();
    let ids: Vec<_> = geometry.selected().map(|r| r.operation_id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_axis_bounds_use_max_start_time() {
    let problem = two_job_problem().build();
    let answer = two_job_answer().build();

    let geometry = build(&problem, &answer, JobSelection::NONE, PlotScale::UNIT).unwrap();

    // max start is 1 even though the second bar ends at 4.
    assert!(approx_eq(geometry.axis.x_max, 1.1), "x_max = {}", geometry.axis.x_max);
    assert!(approx_eq(geometry.axis.y_max, 2.2), "y_max = {}", geometry.axis.y_max);
}

#[test]
fn test_axis_bounds_scale_with_units() {
    let problem = two_job_problem().build();
    let answer = two_job_answer().build();

    let geometry = build(&problem, &answer, JobSelection::NONE, PlotScale::new(10.0, 40.0)).unwrap();

    assert!(approx_eq(geometry.axis.x_max, 11.0));
    assert!(approx_eq(geometry.axis.y_max, 88.0));
}

#[test]
fn test_rect_order_follows_machine_then_list_order() {
    let problem = ProblemBuilder::new(2)
        .op(1.0, 0)
        .op(1.0, 0)
        .op(1.0, 1)
        .op(1.0, 1)
        .build();
    // Machine 1 lists a later start before an earlier one; order is kept.
    let answer = AnswerBuilder::new()
        .machine(&[(2, 5.0), (0, 0.0)])
        .machine(&[(3, 1.0), (1, 3.0)])
        .build();

    let geometry = build(&problem, &answer, JobSelection::NONE, PlotScale::UNIT).unwrap();
    let order: Vec<_> = geometry
        .rects
        .iter()
        .map(|r| (r.machine, r.operation_id))
        .collect();

    assert_eq!(order, vec![(1, 2), (1, 0), (2, 3), (2, 1)]);
}

#[test]
fn test_build_is_idempotent() {
    let problem = two_job_problem().build();
    let answer = two_job_answer().build();

    let first = build(&problem, &answer, JobSelection::job(1), PlotScale::UNIT).unwrap();
    let second = build(&problem, &answer, JobSelection::job(1), PlotScale::UNIT).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unknown_operation_fails_without_geometry() {
    let problem = two_job_problem().build();
    let answer = AnswerBuilder::new()
        .machine(&[(0, 0.0)])
        .machine(&[(5, 1.0)])
        .build();

    let result = build(&problem, &answer, JobSelection::NONE, PlotScale::UNIT);

    match result {
        Err(GanttError::UnknownOperation {
            operation_id,
            operation_count,
        }) => {
            assert_eq!(operation_id, 5);
            assert_eq!(operation_count, 2);
        }
        Err(e) => panic!("Expected UnknownOperation, got: {:?}", e),
        Ok(g) => panic!("Expected error, got geometry: {:?}", g),
    }
}

#[test]
fn test_empty_schedule_has_zero_width() {
    let problem = two_job_problem().build();
    let answer = AnswerBuilder::new().machine(&[]).machine(&[]).build();

    let geometry = build(&problem, &answer, JobSelection::NONE, PlotScale::UNIT).unwrap();

    assert!(geometry.rects.is_empty());
    assert_eq!(geometry.axis.x_max, 0.0);
    assert!(approx_eq(geometry.axis.y_max, 2.2));
}

#[test]
fn test_extra_machine_rows_are_drawn() {
    // One machine declared, two rows scheduled: drawn, not rejected.
    let problem = ProblemBuilder::new(1).op(1.0, 0).op(1.0, 1).build();
    let answer = AnswerBuilder::new()
        .machine(&[(0, 0.0)])
        .machine(&[(1, 0.0)])
        .build();

    let geometry = build(&problem, &answer, JobSelection::NONE, PlotScale::UNIT).unwrap();

    assert_eq!(geometry.rects.len(), 2);
    assert_eq!(geometry.rects[1].machine, 2);
}

#[test]
fn test_gated_build_requires_both_documents() {
    let problem = two_job_problem().build();
    let answer = two_job_answer().build();

    for (p, a) in [
        (None, None),
        (Some(&problem), None),
        (None, Some(&answer)),
    ] {
        match build_from_documents(p, a, JobSelection::NONE, PlotScale::UNIT) {
            Err(GanttError::Precondition(msg)) => assert!(msg.contains("not loaded")),
            other => panic!("Expected Precondition error, got: {:?}", other),
        }
    }

    let geometry =
        build_from_documents(Some(&problem), Some(&answer), JobSelection::NONE, PlotScale::UNIT)
            .unwrap();
    assert_eq!(geometry.rects.len(), 2);
}
