//! # Dispatch Invoices Use Case
//!
//! 低額請求書送信ユースケース

use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use crate::application::use_cases::filter_invoices::FilterInvoicesUseCase;
use crate::domain::entities::dispatch_batch::DispatchBatch;
use crate::domain::entities::invoice::Invoice;
use crate::domain::repositories::delivery_repository::DeliveryRepository;
use crate::domain::repositories::invoice_repository::InvoiceRepository;

/// 送信結果のサマリー
#[derive(Debug, Clone)]
pub struct DispatchSummary {
    /// 送信に成功した請求書の数
    pub sent_count: usize,
    /// 送信に失敗した請求書の数
    pub failed_count: usize,
    /// 送信に失敗した請求書（失敗が発生した順）
    pub failed_invoices: Vec<Invoice>,
}

impl DispatchSummary {
    /// 送信が完全に成功したかチェックします。
    ///
    /// # 戻り値
    ///
    /// 失敗数が0の場合に `true`
    pub fn is_success(&self) -> bool {
        self.failed_count == 0
    }
}

/// 低額請求書送信ユースケース
///
/// 低額請求書を外部会計システムへ1件ずつ送信し、失敗したものを収集する。
/// 1件の失敗がバッチ全体を中断することはない（ベストエフォート送信）。
pub struct DispatchInvoicesUseCase<R: InvoiceRepository, D: DeliveryRepository> {
    filter_use_case: Arc<FilterInvoicesUseCase<R>>,
    delivery_repository: Arc<D>,
}

impl<R: InvoiceRepository, D: DeliveryRepository> DispatchInvoicesUseCase<R, D> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `filter_use_case` - 低額請求書抽出ユースケース
    /// * `delivery_repository` - 送信リポジトリ
    pub fn new(filter_use_case: Arc<FilterInvoicesUseCase<R>>, delivery_repository: Arc<D>) -> Self {
        Self {
            filter_use_case,
            delivery_repository,
        }
    }

    /// 低額請求書を送信し、失敗した請求書のリストを返す
    ///
    /// # Returns
    ///
    /// 送信に失敗した請求書のリスト（失敗が発生した順）
    ///
    /// # Errors
    ///
    /// ストレージの読み取りに失敗した場合にエラーを返す。
    /// 個別の送信失敗はエラーにならず、戻り値のリストに含まれる。
    pub async fn send_low_valued_invoices(&self) -> Result<Vec<Invoice>> {
        Ok(self.execute().await?.failed_invoices)
    }

    /// 低額請求書を送信し、サマリーを返す
    ///
    /// 抽出ユースケースを1回だけ呼び出し、得られた請求書を順番に送信する。
    /// 送信エラーはその請求書を失敗リストへ記録して処理を継続する。
    ///
    /// # Returns
    ///
    /// 送信結果のサマリー
    ///
    /// # Errors
    ///
    /// ストレージの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self) -> Result<DispatchSummary> {
        let batch = DispatchBatch::new(self.filter_use_case.low_value_invoices().await?);

        if batch.is_empty() {
            info!("No low-value invoices to send");
            return Ok(DispatchSummary {
                sent_count: 0,
                failed_count: 0,
                failed_invoices: vec![],
            });
        }

        info!("Sending {} low-value invoices", batch.len());

        let total = batch.len();
        let mut failed_invoices = Vec::new();

        for invoice in batch.into_invoices() {
            match self.delivery_repository.deliver(&invoice).await {
                Ok(()) => {}
                Err(e) => {
                    // 失敗した請求書を記録して残りの送信を継続する
                    warn!("Failed to deliver invoice '{}': {:#}", invoice.name(), e);
                    failed_invoices.push(invoice);
                }
            }
        }

        Ok(DispatchSummary {
            sent_count: total - failed_invoices.len(),
            failed_count: failed_invoices.len(),
            failed_invoices,
        })
    }
}
