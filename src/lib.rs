//! Principal stresses of symmetric stress tensors given as text columns.
//!
//! Each input line holds `head_cols` passthrough columns followed by the six
//! components `s11 s22 s33 s12 s23 s13`. The line is echoed unchanged with the
//! three principal stresses appended in descending order.
pub mod error;
pub mod format;
mod process;
pub mod record;

pub use eigensolve::{Method, PrincipalStresses, StressTensor};
pub use error::{ConfigError, ProcessError, RunError};
pub use process::{open_input, run, Config, LineProcessor, Summary, MAX_HEAD_COLS};
pub use record::{InputRecord, MAX_FIELDS};
