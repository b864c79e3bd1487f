//! SAP Delivery Repository Implementation
//!
//! DeliveryRepositoryのSAP実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::sap::client::SapInvoicePoster;
use crate::adapter::sap::models::{DispatchMetadata, InvoiceDocument};
use crate::domain::entities::invoice::Invoice;
use crate::domain::repositories::delivery_repository::DeliveryRepository;

/// SAP送信リポジトリ
///
/// 請求書をワイヤーモデルに変換し、SAPクライアント経由で送信する
pub struct SapDeliveryRepository {
    poster: Arc<dyn SapInvoicePoster>,
    metadata: DispatchMetadata,
}

impl SapDeliveryRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `poster` - SAPクライアント
    /// * `metadata` - この送信バッチに共通のメタデータ
    pub fn new(poster: Arc<dyn SapInvoicePoster>, metadata: DispatchMetadata) -> Self {
        Self { poster, metadata }
    }
}

#[async_trait]
impl DeliveryRepository for SapDeliveryRepository {
    async fn deliver(&self, invoice: &Invoice) -> Result<()> {
        let document = InvoiceDocument::from_domain(invoice, &self.metadata);

        self.poster
            .post_invoice(&document)
            .await
            .with_context(|| format!("Failed to deliver invoice '{}' to SAP", invoice.name()))
    }
}
