// tests/schema_documents.rs

use jsp_gantt::errors::GanttError;
use jsp_gantt::schema::{answer_is_set, problem_is_set, AnswerDoc, ProblemDoc, ScheduledTask};
use serde_json::json;

#[test]
fn test_presence_accessors() {
    assert!(!problem_is_set(&json!({})));
    assert!(!answer_is_set(&json!({})));

    assert!(problem_is_set(&json!({ "operations": [] })));
    assert!(!answer_is_set(&json!({ "operations": [] })));

    assert!(answer_is_set(&json!({ "process_list": [] })));
    assert!(!problem_is_set(&json!({ "process_list": [] })));

    // Presence only: the value itself is not inspected.
    assert!(problem_is_set(&json!({ "operations": null })));

    assert!(!problem_is_set(&json!([1, 2, 3])));
    assert!(!answer_is_set(&json!("process_list")));
}

#[test]
fn test_problem_from_solver_json() {
    // Shape written by the solver, including fields the viewer ignores.
    let text = r#"{
        "machine_size": 2,
        "job_size": 2,
        "operation_table": [[0], [1]],
        "operations": [
            { "id": 0, "time": 2, "machine": 1, "job": 0 },
            { "id": 1, "time": 3, "machine": 2, "job": 1 }
        ]
    }"#;

    let problem = ProblemDoc::from_json_str(text).unwrap();

    assert_eq!(problem.machine_count(), 2);
    assert_eq!(problem.operation_count(), 2);
    assert_eq!(problem.job_count(), 2);

    let op = problem.operation(1).unwrap();
    assert_eq!(op.id, 1);
    assert_eq!(op.job_id, 1);
    assert_eq!(op.duration, 3.0);
    assert!(problem.operation(2).is_none());
}

#[test]
fn test_answer_from_json() {
    let text = r#"{
        "process_list": [
            [ { "operation_id": 0, "start_time": 0 }, { "operation_id": 2, "start_time": 4.5 } ],
            [ { "operation_id": 1, "start_time": 1 } ]
        ]
    }"#;

    let answer = AnswerDoc::from_json_str(text).unwrap();

    assert_eq!(answer.machine_rows(), 2);
    assert_eq!(answer.task_count(), 3);
    assert_eq!(answer.process_list()[0][1], ScheduledTask::new(2, 4.5));
    assert_eq!(answer.max_start_time(), Some(4.5));
}

#[test]
fn test_missing_operations_is_schema_error() {
    match ProblemDoc::from_value(json!({ "machine_size": 2 })) {
        Err(GanttError::Schema(msg)) => assert!(msg.contains("operations")),
        other => panic!("Expected Schema error, got: {:?}", other),
    }
}

#[test]
fn test_operation_without_time_is_schema_error() {
    let value = json!({
        "machine_size": 1,
        "operations": [ { "job": 0 } ]
    });

    match ProblemDoc::from_value(value) {
        Err(GanttError::Schema(msg)) => assert!(msg.contains("time"), "message: {msg}"),
        other => panic!("Expected Schema error, got: {:?}", other),
    }
}

#[test]
fn test_operation_without_job_is_schema_error() {
    let value = json!({
        "machine_size": 1,
        "operations": [ { "time": 3 } ]
    });

    assert!(matches!(
        ProblemDoc::from_value(value),
        Err(GanttError::Schema(_))
    ));
}

#[test]
fn test_process_list_must_be_nested_sequences() {
    for bad in [
        json!({ "process_list": 3 }),
        json!({ "process_list": [ { "operation_id": 0, "start_time": 0 } ] }),
        json!({ "process_list": [ [ { "operation_id": 0 } ] ] }),
    ] {
        match AnswerDoc::from_value(bad.clone()) {
            Err(GanttError::Schema(_)) => {}
            other => panic!("Expected Schema error for {bad}, got: {:?}", other),
        }
    }
}

#[test]
fn test_missing_process_list_is_schema_error() {
    match AnswerDoc::from_value(json!({ "operations": [] })) {
        Err(GanttError::Schema(msg)) => assert!(msg.contains("process_list")),
        other => panic!("Expected Schema error, got: {:?}", other),
    }
}

#[test]
fn test_invalid_json_text_is_json_error() {
    assert!(matches!(
        AnswerDoc::from_json_str("{ not json"),
        Err(GanttError::JsonError(_))
    ));
}

#[test]
fn test_empty_answer_has_no_max_start() {
    let answer = AnswerDoc::from_value(json!({ "process_list": [[], []] })).unwrap();
    assert_eq!(answer.task_count(), 0);
    assert_eq!(answer.max_start_time(), None);
}
