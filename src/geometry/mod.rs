// src/geometry/mod.rs

//! Schedule-to-geometry mapping.
//!
//! - [`rect`]: the geometry value types (`OperationRect`, `AxisBounds`,
//!   `Geometry`).
//! - [`builder`]: joins a problem with an answer into a `Geometry`.
//! - [`projection`]: turns one rect into a shape outline or a hover trace.
//! - [`figure`]: assembles everything into a renderer-ready figure.
//!
//! Nothing here performs IO. Every function is a pure function of its inputs.

pub mod builder;
pub mod figure;
pub mod projection;
pub mod rect;

pub use builder::{build, build_from_documents, MARGIN_FACTOR};
pub use figure::{AxisLayout, Figure, Layout};
pub use projection::{to_shape, to_trace, ColorPair, Shape, Trace, DEFAULT_COLORS, SELECTED_COLORS};
pub use rect::{AxisBounds, Geometry, OperationRect};

use crate::config::PlotSection;

/// Plot units per time unit (x) and per machine row (y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScale {
    pub unit_width: f64,
    pub unit_height: f64,
}

impl PlotScale {
    pub const UNIT: PlotScale = PlotScale {
        unit_width: 1.0,
        unit_height: 1.0,
    };

    pub fn new(unit_width: f64, unit_height: f64) -> Self {
        Self {
            unit_width,
            unit_height,
        }
    }
}

impl Default for PlotScale {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<&PlotSection> for PlotScale {
    fn from(plot: &PlotSection) -> Self {
        Self::new(plot.unit_width, plot.unit_height)
    }
}
