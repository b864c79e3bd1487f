//! # Invoice Repository Trait
//!
//! 請求書ストレージへのアクセスを抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::invoice::Invoice;

/// 請求書リポジトリ
///
/// 請求書レコードの読み書きを担当するリポジトリ。
/// スキーマや接続の管理はこの抽象の外側の責務。
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// 保存されている全ての請求書を返す
    ///
    /// # Returns
    ///
    /// ストレージが生成した順序の請求書リスト
    ///
    /// # Errors
    ///
    /// ストレージの読み取りに失敗した場合にエラーを返す
    async fn all(&self) -> Result<Vec<Invoice>>;

    /// 請求書を保存する
    ///
    /// # Arguments
    ///
    /// * `invoice` - 保存する請求書
    ///
    /// # Errors
    ///
    /// ストレージへの書き込みに失敗した場合にエラーを返す
    async fn save(&self, invoice: &Invoice) -> Result<()>;

    /// 保存されている請求書を全て削除する
    ///
    /// # Errors
    ///
    /// ストレージへの書き込みに失敗した場合にエラーを返す
    async fn clear(&self) -> Result<()>;
}
