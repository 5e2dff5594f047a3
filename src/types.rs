use std::fmt;
use std::str::FromStr;

/// Job identifier as it appears in the problem document (`"job"`).
pub type JobId = u64;

/// Operation identifier: the operation's index in the problem document.
pub type OperationId = usize;

/// Which of the two input documents an event or path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Problem,
    Answer,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Problem => "problem",
            DocumentKind::Answer => "answer",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "problem" => Ok(DocumentKind::Problem),
            "answer" => Ok(DocumentKind::Answer),
            other => Err(format!(
                "invalid document kind: {other} (expected \"problem\" or \"answer\")"
            )),
        }
    }
}
