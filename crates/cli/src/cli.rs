//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use stockledger_core::Quantity;

/// Track stock quantities in a JSON inventory file.
#[derive(Debug, Parser)]
#[command(name = "stockledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Inventory file (defaults to $STOCKLEDGER_FILE, then inventory.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, global = true, default_value = "pretty")]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add stock for an item
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: Quantity,
    },

    /// Remove stock for an item
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: Quantity,
    },

    /// Show the quantity of one item
    Qty { item: String },

    /// List items below a threshold
    Low {
        /// Threshold (defaults to $STOCKLEDGER_LOW_STOCK_THRESHOLD, then 5)
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Print the inventory report
    Report,

    /// Run the apple/banana walkthrough against the inventory file
    Demo,
}
