//! SAP Document Models
//!
//! SAP送信用のワイヤーモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::invoice::Invoice;

/// 送信バッチのメタデータ
///
/// 1回の送信処理で全ドキュメントに共通して付与される情報
#[derive(Debug, Clone)]
pub struct DispatchMetadata {
    /// SAP会社コード
    pub company_code: String,
    /// 送信バッチID
    pub dispatch_batch_id: String,
    /// 送信元ホスト名
    pub source_host: String,
}

/// SAPへ送信する請求書ドキュメント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// 顧客名
    pub invoice_name: String,
    /// 請求額
    pub amount: u64,
    /// SAP会社コード
    pub company_code: String,
    /// 送信バッチID
    pub dispatch_batch_id: String,
    /// 送信元ホスト名
    pub source_host: String,
    /// 送信日時
    pub dispatched_at: DateTime<Utc>,
}

impl InvoiceDocument {
    /// Domain::Invoiceからワイヤーモデルに変換
    pub fn from_domain(invoice: &Invoice, metadata: &DispatchMetadata) -> Self {
        Self {
            invoice_name: invoice.name().to_string(),
            amount: invoice.value(),
            company_code: metadata.company_code.clone(),
            dispatch_batch_id: metadata.dispatch_batch_id.clone(),
            source_host: metadata.source_host.clone(),
            dispatched_at: Utc::now(),
        }
    }
}
