use anyhow::Context;
use clap::{ArgAction, Parser};
use pstress::{open_input, Config, Method, RunError, Summary};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

const LONG_ABOUT: &str = "\
Computes principal stresses.
If FILE is specified, input is read from FILE.
If FILE is not specified (or is -), input is read from stdin.
It is assumed that each line of the input contains 6 stress components
in the order s11 s22 s33 s12 s23 s13.
Each line can contain other columns, but only the first 12 columns
are read as numbers.
Computed principal stress components are added to each input line and
output to stdout.";

#[derive(Parser, Debug)]
#[command(name = "pstress", version)]
#[command(about = "Computes principal stresses", long_about = LONG_ABOUT)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Number of columns before the stress components
    #[arg(
        short = 'h',
        long = "head-cols",
        value_name = "NUM",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    head_cols: u8,

    /// Eigenvalue algorithm: ql (tridiagonal QL), jacobi (Jacobi rotations)
    /// or trig (closed form)
    #[arg(
        short,
        long,
        value_name = "METHOD",
        default_value_t = Method::Ql,
        value_parser = Method::from_str
    )]
    method: Method,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Input file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let prog = program_name();
    let cli = Cli::parse();

    // stdout carries the data, logs go to stderr
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(summary) => {
            debug!(lines = summary.lines, "exit");
            ExitCode::SUCCESS
        }
        Err(err) => report(&prog, err),
    }
}

fn run(cli: &Cli) -> anyhow::Result<Summary> {
    let config = Config::new(cli.head_cols as usize)
        .context("invalid configuration")?
        .with_method(cli.method);
    let input = open_input(cli.file.as_deref())?;
    let stdout = io::stdout();
    let summary = pstress::run(config, input, stdout.lock())?;
    Ok(summary)
}

/// prints the diagnostic for a fatal error and picks the exit status
fn report(prog: &str, err: anyhow::Error) -> ExitCode {
    let run_err = err.downcast_ref::<RunError>();
    if run_err.map_or(false, RunError::is_broken_pipe) {
        // downstream closed the pipe, nothing left to write to
        return ExitCode::SUCCESS;
    }
    if run_err.map_or(false, RunError::is_internal) {
        eprintln!("{}: INTERNAL ERROR: {:#}", prog, err);
        std::process::abort();
    }
    eprintln!("{}: ERROR: {:#}", prog, err);
    ExitCode::FAILURE
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pstress".to_string())
}
