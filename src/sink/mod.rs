// src/sink/mod.rs

//! Where published figures go.
//!
//! - [`backend`]: the `RenderSink` trait the runtime talks to.
//! - [`json`]: the production sink, writing figure JSON to a file or stdout.

pub mod backend;
pub mod json;

pub use backend::RenderSink;
pub use json::JsonSink;
