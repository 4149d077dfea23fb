use eigensolve::SolveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    #[error("too few columns: found {found} numeric fields, need {required}")]
    TooFewColumns { found: usize, required: usize },

    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl ProcessError {
    pub fn is_internal(&self) -> bool {
        match self {
            ProcessError::Solve(e) => e.is_internal(),
            ProcessError::TooFewColumns { .. } => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid number of head_cols: {head_cols} (expected 0..={max})")]
    HeadColsOutOfRange { head_cols: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}")]
    Line {
        line: usize,
        #[source]
        source: ProcessError,
    },

    #[error("i/o error")]
    Io(#[from] io::Error),
}

impl RunError {
    /// a fault in how the solver was driven rather than in the input
    pub fn is_internal(&self) -> bool {
        match self {
            RunError::Line { source, .. } => source.is_internal(),
            _ => false,
        }
    }

    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, RunError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
