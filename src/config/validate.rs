// src/config/validate.rs

use crate::config::model::{ConfigFile, PlotSection, RawConfigFile};
use crate::errors::{GanttError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::GanttError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_plot_section(&raw.plot)?;
        Ok(ConfigFile::new_unchecked(raw.plot, raw.input, raw.output))
    }
}

fn validate_plot_section(plot: &PlotSection) -> Result<()> {
    ensure_positive_unit("unit_width", plot.unit_width)?;
    ensure_positive_unit("unit_height", plot.unit_height)?;

    if plot.width == 0 || plot.height == 0 {
        return Err(GanttError::ConfigError(format!(
            "[plot] width and height must be >= 1 (got {}x{})",
            plot.width, plot.height
        )));
    }

    Ok(())
}

fn ensure_positive_unit(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GanttError::ConfigError(format!(
            "[plot].{name} must be a finite number > 0 (got {value})"
        )));
    }
    Ok(())
}
