pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use irods_core::TranscodeOptions;
use irods_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::init_tracing(&cli.log_level);

    let prefixes = if cli.all { Vec::new() } else { cli.prefixes };
    let opts = TranscodeOptions {
        delimiter: cli.delimiter,
        prefixes,
        fill: cli.fill.into(),
    };
    handlers::handle_format(&cli.input, &cli.output, &cli.groups, &opts)
}
