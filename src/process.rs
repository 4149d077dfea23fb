use crate::error::{ConfigError, ProcessError, RunError};
use crate::format::{augment, suffix};
use crate::record::InputRecord;
use eigensolve::{EigenSolver, Method, PrincipalStresses};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, debug_span, info};

pub const MAX_HEAD_COLS: usize = 6;

/// Run wide settings, fixed before the first line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// passthrough columns in front of the stress components
    pub head_cols: usize,
    pub method: Method,
}

impl Config {
    pub fn new(head_cols: usize) -> Result<Self, ConfigError> {
        if head_cols > MAX_HEAD_COLS {
            return Err(ConfigError::HeadColsOutOfRange {
                head_cols,
                max: MAX_HEAD_COLS,
            });
        }
        Ok(Config {
            head_cols,
            method: Method::default(),
        })
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
}

pub struct LineProcessor {
    config: Config,
    solver: Box<dyn EigenSolver + Send + Sync>,
}

impl LineProcessor {
    pub fn new(config: Config) -> Self {
        LineProcessor {
            config,
            solver: config.method.solver(),
        }
    }

    /// uses `solver` instead of the one named by `config.method`
    pub fn with_solver(config: Config, solver: Box<dyn EigenSolver + Send + Sync>) -> Self {
        LineProcessor { config, solver }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn principal_stresses(&self, record: &InputRecord) -> Result<PrincipalStresses, ProcessError> {
        let tensor = record.tensor(self.config.head_cols)?;
        Ok(self.solver.solve(&tensor)?)
    }

    /// the raw line with the three principal stresses appended, no line terminator
    pub fn process_line(&self, raw: &[u8]) -> Result<Vec<u8>, ProcessError> {
        let record = InputRecord::parse(raw);
        let p = self.principal_stresses(&record)?;
        Ok(augment(record.raw(), &p))
    }

    /// Processes `input` line by line until it is exhausted or a line fails.
    /// Lines written before a failure are flushed.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: W) -> Result<Summary, RunError> {
        let mut out = BufWriter::new(output);
        let mut buf = Vec::new();
        let mut lines = 0;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lines += 1;
            let _span = debug_span!("line", n = lines).entered();
            let record = InputRecord::parse(&buf);
            match self.principal_stresses(&record) {
                Ok(p) => {
                    debug!(p1 = p.p1(), p2 = p.p2(), p3 = p.p3(), "principal stresses");
                    // raw bytes first, the text need not be UTF-8
                    out.write_all(record.raw())?;
                    out.write_all(suffix(&p).as_bytes())?;
                    out.write_all(b"\n")?;
                }
                Err(source) => {
                    out.flush()?;
                    return Err(RunError::Line {
                        line: lines,
                        source,
                    });
                }
            }
        }
        out.flush()?;
        Ok(Summary { lines })
    }
}

pub fn run<R: BufRead, W: Write>(config: Config, input: R, output: W) -> Result<Summary, RunError> {
    info!(head_cols = config.head_cols, method = %config.method, "computing principal stresses");
    let summary = LineProcessor::new(config).run(input, output)?;
    info!(lines = summary.lines, "done");
    Ok(summary)
}

/// standard input for `None` or `-`, the buffered file otherwise
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, RunError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(p).map_err(|source| RunError::Open {
                path: p.to_path_buf(),
                source,
            })?;
            debug!(path = %p.display(), "reading input file");
            Ok(Box::new(BufReader::new(file)))
        }
    }
}
