// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::geometry::PlotScale;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [plot]
/// unit_width = 10.0
/// unit_height = 40.0
/// width = 1600
/// height = 1200
/// title = "ft06"
///
/// [input]
/// problem = "data/ft06.problem.json"
/// answer = "data/ft06.answer.json"
///
/// [output]
/// path = "gantt.json"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub plot: PlotSection,

    #[serde(default)]
    pub input: InputSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub plot: PlotSection,
    pub input: InputSection,
    pub output: OutputSection,
}

impl ConfigFile {
    /// Assemble a config whose sections were already validated.
    pub(crate) fn new_unchecked(
        plot: PlotSection,
        input: InputSection,
        output: OutputSection,
    ) -> Self {
        Self {
            plot,
            input,
            output,
        }
    }

    /// Coordinate scale derived from `[plot]`.
    pub fn scale(&self) -> PlotScale {
        PlotScale::new(self.plot.unit_width, self.plot.unit_height)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            PlotSection::default(),
            InputSection::default(),
            OutputSection::default(),
        )
    }
}

/// `[plot]` section: coordinate scale and figure layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlotSection {
    /// Plot units per time unit (x-axis).
    #[serde(default = "default_unit")]
    pub unit_width: f64,

    /// Plot units per machine row (y-axis).
    #[serde(default = "default_unit")]
    pub unit_height: f64,

    /// Figure width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Figure height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_unit() -> f64 {
    1.0
}

fn default_width() -> u32 {
    1600
}

fn default_height() -> u32 {
    1200
}

fn default_title() -> String {
    "Job-shop schedule".to_string()
}

impl Default for PlotSection {
    fn default() -> Self {
        Self {
            unit_width: default_unit(),
            unit_height: default_unit(),
            width: default_width(),
            height: default_height(),
            title: default_title(),
        }
    }
}

/// `[input]` section. Both paths can be given on the command line instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InputSection {
    #[serde(default)]
    pub problem: Option<PathBuf>,

    #[serde(default)]
    pub answer: Option<PathBuf>,
}

/// `[output]` section.
///
/// Without a `path`, figures are written to stdout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub path: Option<PathBuf>,
}
