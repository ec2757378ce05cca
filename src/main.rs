use std::{
    io::{self, stdin},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use mipsfmt::{
    FormatterConfig,
    caller::{self, FormatRequest, Outcome},
};
use tracing::{Level, error};

/// Format a .s (MIPS assembly language) file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input .s file
    input: PathBuf,

    /// Output .s file. If not specified then input will be overwritten
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of spaces to use for a tab. Default: 8
    #[arg(short, long)]
    tab_width: Option<usize>,

    /// Run `mipsy --check` on the input and stop if it is not valid MIPS
    #[arg(long)]
    check: bool,

    /// Keep the formatted code even if its length differs from the original
    #[arg(short, long)]
    yes: bool,

    /// One of `TRACE`, `DEBUG`, `INFO`, `WARN`, or `ERROR`
    #[arg(short, long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(Outcome::Formatted) => ExitCode::SUCCESS,
        Ok(Outcome::Fallback) => {
            eprintln!("Error. The original file was left untouched.");
            ExitCode::FAILURE
        }
        Ok(Outcome::Aborted) => {
            eprintln!("Aborting...");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let mut config = FormatterConfig::load()?;
    if let Some(tab_width) = args.tab_width {
        config.tab_width = tab_width;
    }
    config.validate()?;

    let request = FormatRequest {
        output: args.output,
        check: args.check,
        assume_yes: args.yes,
        ..FormatRequest::new(args.input, config)
    };
    caller::run(&request, stdin().lock(), io::stderr())
}
