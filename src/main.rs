use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

mod cli;
mod exits;
mod pass;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let flags = CliFlags::parse();
    init_logging(&flags);

    cli::run(flags)
}

/// Warn by default; RUST_LOG still wins when set.
fn init_logging(flags: &CliFlags) {
    let level = if flags.quiet {
        LevelFilter::Error
    } else if flags.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
