//! SAP Client Abstractions
//!
//! クライアントの抽象化と実装

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::error::SapDeliveryError;
use super::models::InvoiceDocument;
use crate::adapter::config::Config;

/// Trait for posting invoice documents to SAP
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SapInvoicePoster: Send + Sync {
    /// Post a single invoice document to the SAP endpoint
    async fn post_invoice(&self, document: &InvoiceDocument) -> Result<(), SapDeliveryError>;
}

/// HTTP-based SAP client implementing SapInvoicePoster
pub struct HttpSapClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl HttpSapClient {
    /// 設定からHTTPクライアントを構築
    ///
    /// # Errors
    ///
    /// HTTPクライアントの構築に失敗した場合にエラーを返す
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client for SAP")?;

        Ok(Self {
            http,
            base_url: config.sap_base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn invoices_endpoint(&self) -> String {
        format!("{}/invoices", self.base_url)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl SapInvoicePoster for HttpSapClient {
    async fn post_invoice(&self, document: &InvoiceDocument) -> Result<(), SapDeliveryError> {
        let response = self
            .http
            .post(self.invoices_endpoint())
            .bearer_auth(&self.api_token)
            .json(document)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SapDeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
