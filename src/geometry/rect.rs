// src/geometry/rect.rs

use serde::Serialize;

use crate::types::{JobId, OperationId};

/// Geometry of one scheduled operation, in schedule units.
///
/// `machine` is 1-based: machine row `m` of the answer becomes `m + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationRect {
    pub start_time: f64,
    pub end_time: f64,
    pub machine: usize,
    pub job_id: JobId,
    pub operation_id: OperationId,
    pub selected: bool,
}

impl OperationRect {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Upper bounds of both axes, already scaled to plot units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub x_max: f64,
    pub y_max: f64,
}

/// Output of one rebuild. Never patched; a new value replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    /// In draw order: later rects are drawn on top.
    pub rects: Vec<OperationRect>,
    pub axis: AxisBounds,
}

impl Geometry {
    pub fn selected(&self) -> impl Iterator<Item = &OperationRect> {
        self.rects.iter().filter(|r| r.selected)
    }
}
