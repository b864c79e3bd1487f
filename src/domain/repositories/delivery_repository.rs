//! # Delivery Repository Trait
//!
//! 外部会計システムへの請求書送信を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::invoice::Invoice;

/// 送信リポジトリ
///
/// 請求書1件を外部会計システムへ送信するリポジトリ。
/// 失敗理由の分類は外部システム側の事情であり、ここでは
/// 「この請求書の送信に失敗した」という事実のみを扱う。
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// 請求書を1件送信する
    ///
    /// # Arguments
    ///
    /// * `invoice` - 送信する請求書
    ///
    /// # Errors
    ///
    /// 送信に失敗した場合にエラーを返す
    async fn deliver(&self, invoice: &Invoice) -> Result<()>;
}
