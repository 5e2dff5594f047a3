// src/sink/json.rs

use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::geometry::Figure;

use super::backend::RenderSink;

/// Writes each published figure as JSON.
///
/// - With a path, the file is replaced on every publish (written next to the
///   target, then renamed over it) so a reader never sees half a figure.
/// - Without one, each figure is printed to stdout as a single line.
#[derive(Debug)]
pub struct JsonSink {
    fs: Arc<dyn FileSystem>,
    path: Option<PathBuf>,
    published: usize,
}

impl JsonSink {
    pub fn new(fs: Arc<dyn FileSystem>, path: Option<PathBuf>) -> Self {
        Self {
            fs,
            path,
            published: 0,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of figures written so far.
    pub fn published(&self) -> usize {
        self.published
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("figure"));
    name.push(".tmp");
    path.with_file_name(name)
}

impl RenderSink for JsonSink {
    fn publish(
        &mut self,
        figure: Arc<Figure>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let json = figure.to_json_string()?;

            match &self.path {
                Some(path) => {
                    let staging = staging_path(path);
                    self.fs.write(&staging, json.as_bytes())?;
                    self.fs.rename(&staging, path)?;
                    info!(?path, "figure written");
                }
                None => {
                    let mut stdout = tokio::io::stdout();
                    stdout.write_all(json.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
            }

            self.published += 1;
            Ok(())
        })
    }

    fn report_error(&mut self, message: &str) {
        if self.published > 0 {
            warn!("{message} (last figure left in place)");
        }
    }
}
