// src/geometry/projection.rs

//! The two renderable views of an [`OperationRect`].
//!
//! Both serialize to Plotly's vocabulary: a layout `shape` for the visible
//! bar and an invisible `scatter` trace over the same corners so that the
//! renderer has something to hover.

use serde::Serialize;

use crate::geometry::rect::OperationRect;
use crate::geometry::PlotScale;

/// Stroke and fill color of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub stroke: &'static str,
    pub fill: &'static str,
}

pub const DEFAULT_COLORS: ColorPair = ColorPair {
    stroke: "rgb(55, 128, 191)",
    fill: "rgba(55, 128, 191, 0.6)",
};

pub const SELECTED_COLORS: ColorPair = ColorPair {
    stroke: "rgb(50, 171, 96)",
    fill: "rgba(50, 171, 96, 0.6)",
};

const STROKE_WIDTH: f64 = 3.0;

impl ColorPair {
    pub fn for_selected(selected: bool) -> Self {
        if selected {
            SELECTED_COLORS
        } else {
            DEFAULT_COLORS
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeLine {
    pub color: &'static str,
    pub width: f64,
}

/// Outline of one bar in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: ShapeLine,
    pub fillcolor: &'static str,
}

/// Invisible closed polygon carrying the hover label of one bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub fill: &'static str,
    pub opacity: f64,
    pub hoverinfo: &'static str,
    pub showlegend: bool,
    pub text: String,
    pub x: [f64; 5],
    pub y: [f64; 5],
}

/// Plot-space corners `(x0, y0, x1, y1)` of a rect.
fn corners(rect: &OperationRect, scale: PlotScale) -> (f64, f64, f64, f64) {
    (
        scale.unit_width * rect.start_time,
        scale.unit_height * (rect.machine as f64 - 1.0),
        scale.unit_width * rect.end_time,
        scale.unit_height * rect.machine as f64,
    )
}

/// Hover label of a rect: `op_id=<operation_id>, job_id=<job_id>`.
pub fn hover_label(rect: &OperationRect) -> String {
    format!("op_id={}, job_id={}", rect.operation_id, rect.job_id)
}

pub fn to_shape(rect: &OperationRect, scale: PlotScale) -> Shape {
    let (x0, y0, x1, y1) = corners(rect, scale);
    let colors = ColorPair::for_selected(rect.selected);

    Shape {
        kind: "rect",
        xref: "x",
        yref: "y",
        x0,
        y0,
        x1,
        y1,
        line: ShapeLine {
            color: colors.stroke,
            width: STROKE_WIDTH,
        },
        fillcolor: colors.fill,
    }
}

pub fn to_trace(rect: &OperationRect, scale: PlotScale) -> Trace {
    let (x0, y0, x1, y1) = corners(rect, scale);

    Trace {
        kind: "scatter",
        mode: "lines",
        fill: "toself",
        opacity: 0.0,
        hoverinfo: "text",
        showlegend: false,
        text: hover_label(rect),
        // Counter-clockwise from the bottom-left corner, closed.
        x: [x0, x1, x1, x0, x0],
        y: [y0, y0, y1, y1, y0],
    }
}
