// src/sink/backend.rs

//! Pluggable render sink abstraction.
//!
//! The runtime talks to a `RenderSink` instead of writing output itself.
//! This makes it easy to swap in a recording sink in tests while keeping the
//! production writer in [`super::json`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::Result;
use crate::geometry::Figure;

/// Trait abstracting what happens to a freshly built figure.
pub trait RenderSink: Send {
    /// Replace whatever was shown before with `figure`.
    fn publish(
        &mut self,
        figure: Arc<Figure>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Surface a failed load or rebuild. The last published figure stays.
    ///
    /// Errors are already logged by the core; the default does nothing more.
    fn report_error(&mut self, _message: &str) {}
}
