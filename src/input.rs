// src/input.rs

//! Job selection from a line-oriented reader (stdin in the binary).
//!
//! Every line is one selection, parsed with [`JobSelection::parse`]; a blank
//! line clears the highlight.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::RuntimeEvent;
use crate::errors::Result;
use crate::selection::JobSelection;

/// Forward one `SelectionChanged` per line of `reader` until EOF.
///
/// Returns the number of selections forwarded.
pub async fn forward_selections<R>(reader: R, runtime_tx: &mpsc::Sender<RuntimeEvent>) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut forwarded = 0;

    while let Some(line) = lines.next_line().await? {
        let selection = JobSelection::parse(&line);
        debug!(input = %line.trim(), %selection, "selection input");

        if runtime_tx
            .send(RuntimeEvent::SelectionChanged(selection))
            .await
            .is_err()
        {
            break;
        }
        forwarded += 1;
    }

    Ok(forwarded)
}

/// Read selections from stdin in the background.
///
/// EOF on stdin only ends selection input; the view keeps running.
pub fn spawn_stdin_reader(runtime_tx: mpsc::Sender<RuntimeEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        match forward_selections(stdin, &runtime_tx).await {
            Ok(n) => debug!(forwarded = n, "stdin closed; selection input finished"),
            Err(err) => warn!(error = %err, "failed to read selections from stdin"),
        }
    })
}
