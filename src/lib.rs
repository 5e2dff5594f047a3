// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod geometry;
pub mod input;
pub mod load;
pub mod logging;
pub mod schema;
pub mod selection;
pub mod sink;
pub mod types;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_or_default, ConfigFile};
use crate::engine::{CoreRuntime, Runtime, RuntimeEvent, RuntimeOptions};
use crate::errors::GanttError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::geometry::{build, Geometry};
use crate::load::{load_answer, load_problem, spawn_load};
use crate::schema::{AnswerDoc, ProblemDoc};
use crate::selection::JobSelection;
use crate::sink::JsonSink;
use crate::types::DocumentKind;
use crate::watch::WatchTarget;

/// Input and output locations after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub problem: PathBuf,
    pub answer: PathBuf,
    /// `None` means stdout.
    pub output: Option<PathBuf>,
}

/// CLI flags win over `[input]` / `[output]`.
pub fn resolve_paths(args: &CliArgs, cfg: &ConfigFile) -> errors::Result<ResolvedPaths> {
    let problem = args
        .problem
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| cfg.input.problem.clone())
        .ok_or_else(|| {
            GanttError::ConfigError(
                "no problem document given (use --problem or [input].problem)".to_string(),
            )
        })?;

    let answer = args
        .answer
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| cfg.input.answer.clone())
        .ok_or_else(|| {
            GanttError::ConfigError(
                "no answer document given (use --answer or [input].answer)".to_string(),
            )
        })?;

    let output = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| cfg.output.path.clone());

    Ok(ResolvedPaths {
        problem,
        answer,
        output,
    })
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the two document loaders
/// - the view core and runtime
/// - the JSON sink
/// - (optional) file watcher and stdin selection reader
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))?;
    let paths = resolve_paths(&args, &cfg)?;
    let selection = args
        .job
        .as_deref()
        .map(JobSelection::parse)
        .unwrap_or_default();

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if args.dry_run {
        print_dry_run(fs.as_ref(), &cfg, &paths, selection)?;
        return Ok(());
    }

    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Watch first so that edits racing the initial load are not lost.
    let _watcher_handle = if !args.once {
        let targets = vec![
            WatchTarget::new(DocumentKind::Problem, paths.problem.clone()),
            WatchTarget::new(DocumentKind::Answer, paths.answer.clone()),
        ];
        Some(watch::spawn_watcher(targets, Arc::clone(&fs), rt_tx.clone())?)
    } else {
        None
    };

    if !args.once {
        input::spawn_stdin_reader(rt_tx.clone());
    }

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    info!(problem = ?paths.problem, answer = ?paths.answer, %selection, "loading documents");
    spawn_load(
        Arc::clone(&fs),
        DocumentKind::Problem,
        paths.problem.clone(),
        rt_tx.clone(),
    );
    spawn_load(
        Arc::clone(&fs),
        DocumentKind::Answer,
        paths.answer.clone(),
        rt_tx.clone(),
    );
    drop(rt_tx);

    let options = RuntimeOptions {
        exit_when_built: args.once,
    };

    let core = CoreRuntime::new(cfg.plot.clone(), selection, options);
    let sink = JsonSink::new(Arc::clone(&fs), paths.output.clone());

    let runtime = Runtime::new(core, rt_rx, sink);
    runtime.run().await?;
    Ok(())
}

/// What `--dry-run` reports about a pair of documents.
#[derive(Debug, Clone)]
pub struct DryRunReport {
    pub problem: ProblemDoc,
    pub answer: AnswerDoc,
    pub geometry: Geometry,
}

/// Load both documents and build once, without publishing anything.
pub fn dry_run(
    fs: &dyn FileSystem,
    cfg: &ConfigFile,
    paths: &ResolvedPaths,
    selection: JobSelection,
) -> errors::Result<DryRunReport> {
    let problem = load_problem(fs, &paths.problem)?;
    let answer = load_answer(fs, &paths.answer)?;
    let geometry = build(&problem, &answer, selection, cfg.scale())?;

    Ok(DryRunReport {
        problem,
        answer,
        geometry,
    })
}

/// Simple dry-run output: print settings and document statistics.
fn print_dry_run(
    fs: &dyn FileSystem,
    cfg: &ConfigFile,
    paths: &ResolvedPaths,
    selection: JobSelection,
) -> errors::Result<()> {
    let report = dry_run(fs, cfg, paths, selection)?;

    println!("jsp-gantt dry-run");
    println!(
        "  plot.unit_width = {}, plot.unit_height = {}",
        cfg.plot.unit_width, cfg.plot.unit_height
    );
    println!("  plot.size = {}x{}", cfg.plot.width, cfg.plot.height);
    match &paths.output {
        Some(path) => println!("  output = {}", path.display()),
        None => println!("  output = <stdout>"),
    }
    println!();

    println!("problem ({}):", paths.problem.display());
    println!("  operations: {}", report.problem.operation_count());
    println!("  jobs: {}", report.problem.job_count());
    println!("  machines: {}", report.problem.machine_count());

    println!("answer ({}):", paths.answer.display());
    println!("  machine rows: {}", report.answer.machine_rows());
    println!("  scheduled tasks: {}", report.answer.task_count());
    if let Some(max_start) = report.answer.max_start_time() {
        println!("  latest start: {max_start}");
    }

    println!("geometry:");
    println!("  rects: {}", report.geometry.rects.len());
    println!("  selection: {selection}");
    println!("  selected rects: {}", report.geometry.selected().count());
    println!(
        "  axis: x_max = {}, y_max = {}",
        report.geometry.axis.x_max, report.geometry.axis.y_max
    );

    debug!("dry-run complete (nothing written)");
    Ok(())
}
