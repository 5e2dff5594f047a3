// src/selection.rs

//! Job selection as typed by a user.
//!
//! Selections usually arrive as free text (a text box, a line on stdin) while
//! job ids in the problem document are integers. The text is converted once,
//! here, so that highlighting is a plain integer comparison afterwards.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::types::JobId;

/// The currently highlighted job, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JobSelection(Option<JobId>);

impl JobSelection {
    /// Nothing highlighted.
    pub const NONE: JobSelection = JobSelection(None);

    pub fn job(id: JobId) -> Self {
        JobSelection(Some(id))
    }

    /// Parse user input into a selection.
    ///
    /// Accepted: a whole, non-negative number with optional surrounding
    /// whitespace (`"3"`, `" 3 "`, `"+3"`, `"3.0"`). Everything else,
    /// including blank input, selects nothing.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::NONE;
        }

        if let Ok(id) = trimmed.parse::<JobId>() {
            return Self::job(id);
        }

        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 && v >= 0.0 && v < JobId::MAX as f64 => {
                Self::job(v as JobId)
            }
            _ => Self::NONE,
        }
    }

    pub fn selected_job(&self) -> Option<JobId> {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Whether operations of `job` are highlighted under this selection.
    #[inline]
    pub fn matches(&self, job: JobId) -> bool {
        self.0 == Some(job)
    }
}

impl From<JobId> for JobSelection {
    fn from(id: JobId) -> Self {
        Self::job(id)
    }
}

impl From<Option<JobId>> for JobSelection {
    fn from(id: Option<JobId>) -> Self {
        JobSelection(id)
    }
}

impl FromStr for JobSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for JobSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "job {id}"),
            None => f.write_str("none"),
        }
    }
}
