//! # DispatchBatch Value Object
//!
//! 送信バッチのバリューオブジェクト

use super::invoice::Invoice;

/// 送信バッチ
///
/// 1回の送信処理の対象となる請求書のコレクションを表すバリューオブジェクト
#[derive(Debug, Clone)]
pub struct DispatchBatch {
    invoices: Vec<Invoice>,
}

impl DispatchBatch {
    /// 新しい送信バッチを作成
    ///
    /// # Arguments
    ///
    /// * `invoices` - 請求書のベクター
    pub fn new(invoices: Vec<Invoice>) -> Self {
        Self { invoices }
    }

    /// バッチ内の請求書数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// 請求書への参照を返す
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// 請求書の所有権を移動して返す
    pub fn into_invoices(self) -> Vec<Invoice> {
        self.invoices
    }
}

impl From<Vec<Invoice>> for DispatchBatch {
    fn from(invoices: Vec<Invoice>) -> Self {
        Self::new(invoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_invoice(name: &str, value: u64) -> Invoice {
        Invoice::new(name, value).unwrap()
    }

    #[test]
    fn test_dispatch_batch_new() {
        let invoices = vec![
            create_test_invoice("cust1", 50),
            create_test_invoice("cust2", 75),
        ];
        let batch = DispatchBatch::new(invoices);

        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_dispatch_batch_empty() {
        let batch = DispatchBatch::new(vec![]);
        assert_eq!(batch.len(), 0);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_dispatch_batch_preserves_order() {
        let invoices = vec![
            create_test_invoice("first", 10),
            create_test_invoice("second", 20),
            create_test_invoice("third", 30),
        ];
        let batch = DispatchBatch::from(invoices.clone());

        assert_eq!(batch.invoices(), invoices.as_slice());
        assert_eq!(batch.into_invoices(), invoices);
    }
}
