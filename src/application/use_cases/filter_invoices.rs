//! # Filter Invoices Use Case
//!
//! 低額請求書抽出ユースケース

use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::invoice::Invoice;
use crate::domain::repositories::invoice_repository::InvoiceRepository;
use crate::domain::services::low_value::LowValuePolicy;

/// 低額請求書抽出ユースケース
///
/// ストレージから全ての請求書を取得し、低額なものだけを返す
pub struct FilterInvoicesUseCase<R: InvoiceRepository> {
    invoice_repository: Arc<R>,
}

impl<R: InvoiceRepository> FilterInvoicesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `invoice_repository` - 請求書リポジトリ
    pub fn new(invoice_repository: Arc<R>) -> Self {
        Self { invoice_repository }
    }

    /// 低額請求書を抽出する
    ///
    /// ストレージの順序を保持したまま、しきい値を下回る請求書のみを返す。
    /// 該当がない場合は空のリストを返す。読み取り専用で書き込みは行わない。
    ///
    /// # Returns
    ///
    /// 低額請求書のリスト
    ///
    /// # Errors
    ///
    /// ストレージの読み取りに失敗した場合、そのエラーをそのまま返す
    pub async fn low_value_invoices(&self) -> Result<Vec<Invoice>> {
        let invoices = self.invoice_repository.all().await?;
        Ok(LowValuePolicy::filter_low_value(invoices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct MockInvoiceRepository {
        invoices: Vec<Invoice>,
        should_fail: bool,
    }

    impl MockInvoiceRepository {
        fn with_invoices(invoices: Vec<Invoice>) -> Self {
            Self {
                invoices,
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                invoices: vec![],
                should_fail: true,
            }
        }
    }

    #[async_trait]
    impl InvoiceRepository for MockInvoiceRepository {
        async fn all(&self) -> Result<Vec<Invoice>> {
            if self.should_fail {
                anyhow::bail!("storage read failed")
            }
            Ok(self.invoices.clone())
        }

        async fn save(&self, _invoice: &Invoice) -> Result<()> {
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    fn create_test_invoice(name: &str, value: u64) -> Invoice {
        Invoice::new(name, value).unwrap()
    }

    #[tokio::test]
    async fn test_low_value_invoices_returns_only_below_threshold() {
        let repo = Arc::new(MockInvoiceRepository::with_invoices(vec![
            create_test_invoice("customer-low", 50),
            create_test_invoice("customer-high", 150),
        ]));
        let use_case = FilterInvoicesUseCase::new(repo);

        let low = use_case.low_value_invoices().await.unwrap();

        assert_eq!(low, vec![create_test_invoice("customer-low", 50)]);
    }

    #[tokio::test]
    async fn test_low_value_invoices_empty_storage() {
        let repo = Arc::new(MockInvoiceRepository::with_invoices(vec![]));
        let use_case = FilterInvoicesUseCase::new(repo);

        let low = use_case.low_value_invoices().await.unwrap();

        assert!(low.is_empty());
    }

    #[tokio::test]
    async fn test_low_value_invoices_preserves_storage_order() {
        let repo = Arc::new(MockInvoiceRepository::with_invoices(vec![
            create_test_invoice("c", 99),
            create_test_invoice("a", 10),
            create_test_invoice("high", 500),
            create_test_invoice("b", 20),
        ]));
        let use_case = FilterInvoicesUseCase::new(repo);

        let low = use_case.low_value_invoices().await.unwrap();

        let names: Vec<&str> = low.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_low_value_invoices_idempotent() {
        let repo = Arc::new(MockInvoiceRepository::with_invoices(vec![
            create_test_invoice("cust1", 50),
            create_test_invoice("cust2", 75),
        ]));
        let use_case = FilterInvoicesUseCase::new(repo);

        let first = use_case.low_value_invoices().await.unwrap();
        let second = use_case.low_value_invoices().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_low_value_invoices_propagates_storage_error() {
        let repo = Arc::new(MockInvoiceRepository::failing());
        let use_case = FilterInvoicesUseCase::new(repo);

        let result = use_case.low_value_invoices().await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("storage read failed"));
    }
}
