// src/engine/runtime.rs

use std::fmt;

use anyhow::anyhow;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::{GanttError, Result};
use crate::sink::RenderSink;

use super::core::CoreRuntime;
use super::{CoreCommand, RuntimeEvent};

/// Drives the view core in response to `RuntimeEvent`s and hands published
/// figures to a `RenderSink`.
///
/// All view semantics live in `CoreRuntime`; this struct only does async IO:
/// reading events from the channel and forwarding commands to the sink.
pub struct Runtime<S: RenderSink> {
    core: CoreRuntime,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    sink: S,
}

impl<S: RenderSink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: RenderSink> Runtime<S> {
    pub fn new(core: CoreRuntime, event_rx: mpsc::Receiver<RuntimeEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Main event loop.
    ///
    /// - Consumes `RuntimeEvent`s from `event_rx`.
    /// - Feeds them into the core runtime.
    /// - Executes commands returned by the core (publish, report, exit).
    ///
    /// In once-mode a failed load, rebuild or publish is returned as the error
    /// of the whole run. In watch mode a failed publish is reported to the
    /// sink and the loop keeps going.
    pub async fn run(mut self) -> Result<()> {
        info!("jsp-gantt runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.core.step(event);

            for command in step.commands {
                self.execute_command(command).await?;
            }

            if !step.keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        if self.core.options().exit_when_built {
            if let Some(message) = self.core.state().last_error() {
                return Err(GanttError::Other(anyhow!("{message}")));
            }
        }

        info!("runtime exiting");
        Ok(())
    }

    /// Consume the runtime and return the sink (used by tests to inspect it).
    pub fn into_sink(self) -> S {
        self.sink
    }

    async fn execute_command(&mut self, command: CoreCommand) -> Result<()> {
        match command {
            CoreCommand::Publish(figure) => {
                debug!(
                    shapes = figure.layout.shapes.len(),
                    "publishing figure"
                );
                if let Err(err) = self.sink.publish(figure).await {
                    // Once-mode has nothing left to show, so the write error
                    // is the outcome of the run.
                    if self.core.options().exit_when_built {
                        return Err(err);
                    }
                    error!(error = %err, "failed to publish figure; keeping previous output");
                    self.sink.report_error(&format!("failed to publish figure: {err}"));
                }
            }
            CoreCommand::ReportError(message) => {
                self.sink.report_error(&message);
            }
            CoreCommand::RequestExit => {
                info!("core issued RequestExit command");
            }
        }
        Ok(())
    }
}
