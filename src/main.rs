//! Sapsync - Low Value Invoice Dispatcher
//!
//! 低額請求書をSAP会計システムへ送信

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use sapsync::adapter::config::Config;
use sapsync::driver::{Args, InvoiceDispatchWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = InvoiceDispatchWorkflow::new(config);

    workflow.execute(args).await
}
