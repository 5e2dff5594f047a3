// src/geometry/figure.rs

//! Renderer-ready figure: hover traces as `data`, bars as layout `shapes`.

use serde::Serialize;

use crate::config::PlotSection;
use crate::errors::Result;
use crate::geometry::projection::{to_shape, to_trace, Shape, Trace};
use crate::geometry::rect::Geometry;
use crate::geometry::PlotScale;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub hovermode: &'static str,
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisLayout {
    pub range: [f64; 2],
    pub showgrid: bool,
}

impl Figure {
    pub fn from_geometry(geometry: &Geometry, plot: &PlotSection) -> Self {
        let scale = PlotScale::from(plot);

        let data = geometry.rects.iter().map(|r| to_trace(r, scale)).collect();
        let shapes = geometry.rects.iter().map(|r| to_shape(r, scale)).collect();

        Figure {
            data,
            layout: Layout {
                title: plot.title.clone(),
                width: plot.width,
                height: plot.height,
                hovermode: "closest",
                xaxis: AxisLayout {
                    range: [0.0, geometry.axis.x_max],
                    showgrid: false,
                },
                yaxis: AxisLayout {
                    range: [0.0, geometry.axis.y_max],
                    showgrid: true,
                },
                shapes,
            },
        }
    }

    /// Compact single-line JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
