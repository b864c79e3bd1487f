//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 低額請求書をSAPへ送信するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "sapsync")]
#[command(about = "Send low-value invoices from the store to SAP", long_about = None)]
pub struct Args {
    /// Dry run mode - list qualifying invoices without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = "./.sapsync/config.json")]
    pub config: String,
}
