// tests/json_sink.rs

use std::path::PathBuf;
use std::sync::Arc;

use jsp_gantt::config::PlotSection;
use jsp_gantt::fs::mock::MockFileSystem;
use jsp_gantt::geometry::{build, Figure, PlotScale};
use jsp_gantt::selection::JobSelection;
use jsp_gantt::sink::{JsonSink, RenderSink};
use jsp_gantt_test_utils::builders::{two_job_answer, two_job_problem};

fn figure(selection: JobSelection) -> Arc<Figure> {
    let geometry = build(
        &two_job_problem().build(),
        &two_job_answer().build(),
        selection,
        PlotScale::UNIT,
    )
    .unwrap();
    Arc::new(Figure::from_geometry(&geometry, &PlotSection::default()))
}

#[tokio::test]
async fn test_file_sink_replaces_output_each_publish() {
    let fs = MockFileSystem::new();
    let out = PathBuf::from("/out/gantt.json");
    let mut sink = JsonSink::new(Arc::new(fs.clone()), Some(out.clone()));

    sink.publish(figure(JobSelection::NONE)).await.unwrap();
    sink.publish(figure(JobSelection::job(1))).await.unwrap();

    assert_eq!(sink.published(), 2);
    // Only the final file remains; the staging file was renamed over it.
    assert_eq!(fs.paths(), vec![out.clone()]);

    let written: serde_json::Value = serde_json::from_str(&fs.contents(&out).unwrap()).unwrap();
    assert_eq!(
        written["layout"]["shapes"][1]["fillcolor"],
        "rgba(50, 171, 96, 0.6)"
    );
    assert_eq!(written["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_report_error_leaves_last_figure_in_place() {
    let fs = MockFileSystem::new();
    let out = PathBuf::from("/out/gantt.json");
    let mut sink = JsonSink::new(Arc::new(fs.clone()), Some(out.clone()));

    sink.publish(figure(JobSelection::job(0))).await.unwrap();
    let before = fs.contents(&out).unwrap();

    sink.report_error("rebuild failed: Unknown operation");

    assert_eq!(fs.contents(&out).unwrap(), before);
    assert_eq!(sink.path(), Some(out.as_path()));
}
