//! CLI entry point for sketch recognition and training

use clap::Parser;
use sketchmem::io::cli::{Cli, Session};
use sketchmem::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> sketchmem::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    let mut session = Session::open(cli);
    session.run()
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
