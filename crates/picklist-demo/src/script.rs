//! Replay steps given on the command line.

use std::str::FromStr;

use thiserror::Error;

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Click the row at this position.
    Click(usize),
    /// Re-read the items file. The result is a new sequence instance.
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStepError {
    #[error("unknown step '{0}' (expected 'click:<row>' or 'reload')")]
    Unknown(String),
    #[error("invalid row in step '{0}'")]
    InvalidRow(String),
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "reload" {
            return Ok(Self::Reload);
        }
        match s.split_once(':') {
            Some(("click", row)) => row
                .parse()
                .map(Self::Click)
                .map_err(|_| ParseStepError::InvalidRow(s.to_string())),
            _ => Err(ParseStepError::Unknown(s.to_string())),
        }
    }
}
