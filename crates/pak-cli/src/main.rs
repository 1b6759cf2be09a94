use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;

use cli::CliArgs;

pub type CliResult<T> = pak_core::Result<T>;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logger(args.verbose);

    match args.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// `-v` only adds progress messages on stdout, log output starts at `-vv`.
/// `RUST_LOG` overrides both.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
