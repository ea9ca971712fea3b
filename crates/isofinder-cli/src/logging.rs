use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{
        self,
        format::{DefaultFields, FmtSpan, Format},
    },
    prelude::*,
};

/// Directives in this variable (e.g. `isofinder::engine=trace`) replace the `-v` level.
pub const LOG_ENV_VAR: &str = "ISOFINDER_LOG";

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Builds the global filter. `--quiet` wins over everything; unparsable
/// directives fall back to the verbosity level.
pub fn build_filter(level: LevelFilter, directives: Option<&str>) -> EnvFilter {
    if level == LevelFilter::OFF {
        return EnvFilter::new("off");
    }
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

// Workflow and task spans report their busy/idle time when they close.
fn file_layer<S>(file: File) -> fmt::Layer<S, DefaultFields, Format, File> {
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let directives = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(level_filter(verbosity, quiet), directives.as_deref());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    let file_layer = log_file
        .map(|path| File::create(path).map_err(CliError::Io))
        .transpose()?
        .map(file_layer);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
