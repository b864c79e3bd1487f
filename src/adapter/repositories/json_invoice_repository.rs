//! JSON Invoice Repository Implementation
//!
//! InvoiceRepositoryのJSON実装（請求書レコードをJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::entities::invoice::Invoice;
use crate::domain::repositories::invoice_repository::InvoiceRepository;

/// JSONファイルベースの請求書リポジトリ
pub struct JsonInvoiceRepository {
    store_path: String,
}

/// 請求書レコード（JSON永続化用の内部表現）
#[derive(Debug, Deserialize, Serialize)]
struct InvoiceRecordJson {
    name: String,
    value: u64,
}

impl JsonInvoiceRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `store_path` - 請求書ストアファイルのパス（チルダ展開される）
    pub fn new(store_path: &str) -> Self {
        let expanded = shellexpand::tilde(store_path).to_string();
        Self {
            store_path: expanded,
        }
    }

    /// ファイルからレコードを読み込む（同期処理）
    fn load_sync(path: &str) -> Result<Vec<InvoiceRecordJson>> {
        let path = Path::new(path);

        if !path.exists() {
            info!("No existing invoice store found, treating as empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).context("Failed to read invoice store file")?;

        let records: Vec<InvoiceRecordJson> =
            serde_json::from_str(&content).context("Failed to parse invoice store JSON")?;

        Ok(records)
    }

    /// ファイルにレコードを保存する（同期処理）
    fn save_sync(path: &str, records: &[InvoiceRecordJson]) -> Result<()> {
        let path = Path::new(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create invoice store directory")?;
        }

        let json =
            serde_json::to_string_pretty(records).context("Failed to serialize invoice store")?;

        fs::write(path, json).context("Failed to write invoice store file")?;

        Ok(())
    }

    /// JSON形式からDomain形式に変換
    fn to_domain(record: InvoiceRecordJson) -> Result<Invoice> {
        Invoice::new(record.name, record.value).context("Invalid invoice record in store")
    }

    /// Domain形式からJSON形式に変換
    fn from_domain(invoice: &Invoice) -> InvoiceRecordJson {
        InvoiceRecordJson {
            name: invoice.name().to_string(),
            value: invoice.value(),
        }
    }
}

#[async_trait]
impl InvoiceRepository for JsonInvoiceRepository {
    async fn all(&self) -> Result<Vec<Invoice>> {
        let path = self.store_path.clone();
        let records = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        records.into_iter().map(Self::to_domain).collect()
    }

    async fn save(&self, invoice: &Invoice) -> Result<()> {
        let path = self.store_path.clone();
        let record = Self::from_domain(invoice);
        tokio::task::spawn_blocking(move || {
            let mut records = Self::load_sync(&path)?;
            records.push(record);
            Self::save_sync(&path, &records)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let path = self.store_path.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &[]))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        info!("Cleared invoice store");
        Ok(())
    }
}
