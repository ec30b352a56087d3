//! `stockledger` command-line entry point.

mod cli;
mod commands;

use clap::Parser;
use stockledger_inventory::LedgerConfig;
use stockledger_observability::LogFormat;

use crate::cli::{Cli, LogFormatArg};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.log_format {
        LogFormatArg::Json => stockledger_observability::init(),
        LogFormatArg::Pretty => stockledger_observability::tracing::init(LogFormat::Pretty),
    }

    let mut config = LedgerConfig::from_env();
    if let Some(file) = cli.file {
        config.data_file = file;
    }
    tracing::debug!(file = %config.data_file.display(), "using inventory file");

    let stdout = std::io::stdout();
    commands::run(cli.command, &config, &mut stdout.lock())
}
