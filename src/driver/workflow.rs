//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_invoice_repository::JsonInvoiceRepository;
use crate::adapter::repositories::sap_delivery_repository::SapDeliveryRepository;
use crate::adapter::sap::client::HttpSapClient;
use crate::adapter::sap::models::DispatchMetadata;
use crate::application::use_cases::dispatch_invoices::DispatchInvoicesUseCase;
use crate::application::use_cases::filter_invoices::FilterInvoicesUseCase;

use super::cli::Args;

/// Invoice Dispatch Workflow
pub struct InvoiceDispatchWorkflow {
    config: Config,
}

impl InvoiceDispatchWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the dispatch workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting SAP invoice dispatch...");
        info!("Dry run: {}", args.dry_run);

        // Use injected configuration
        println!("✓ Using configuration:");
        println!("  SAP endpoint: {}", self.config.sap_base_url);
        println!("  Company code: {}", self.config.sap_company_code);
        println!("  Invoice store: {}", self.config.invoice_store_path);

        // Repository and use case construction
        let invoice_repo = Arc::new(JsonInvoiceRepository::new(&self.config.invoice_store_path));
        let filter_use_case = Arc::new(FilterInvoicesUseCase::new(invoice_repo));

        if args.dry_run {
            // Dry run stops after the filter step, without contacting SAP
            let low = filter_use_case.low_value_invoices().await?;
            println!("✓ Dry run: {} low-value invoices would be sent", low.len());
            for invoice in &low {
                println!("  - {} ({})", invoice.name(), invoice.value());
            }
            return Ok(());
        }

        // Batch metadata shared by every document in this run
        let batch_id = uuid::Uuid::new_v4().to_string();
        let source_host = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        let metadata = DispatchMetadata {
            company_code: self.config.sap_company_code.clone(),
            dispatch_batch_id: batch_id.clone(),
            source_host,
        };

        let poster = Arc::new(HttpSapClient::new(&self.config)?);
        println!("✓ Created SAP client");

        let delivery_repo = Arc::new(SapDeliveryRepository::new(poster, metadata));
        let dispatch_use_case = DispatchInvoicesUseCase::new(filter_use_case, delivery_repo);

        let summary = dispatch_use_case.execute().await?;

        println!("✓ Dispatch batch {} finished", batch_id);
        println!("  Sent: {}", summary.sent_count);
        println!("  Failed: {}", summary.failed_count);

        if !summary.is_success() {
            // Failed invoices stay in the store; the caller re-drives them
            println!("⚠ {} invoices still need attention:", summary.failed_count);
            for invoice in &summary.failed_invoices {
                println!("  - {} ({})", invoice.name(), invoice.value());
            }
        }

        Ok(())
    }
}
