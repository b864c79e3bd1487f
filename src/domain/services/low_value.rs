//! # Low Value Policy Service
//!
//! 低額請求書の判定ポリシー

use crate::domain::entities::invoice::Invoice;

/// 低額判定のしきい値
///
/// このしきい値を厳密に下回る請求書が送信対象となる。
/// フィルタリングポリシーの固定定数であり、設定では変更できない。
pub const LOW_VALUE_THRESHOLD: u64 = 100;

/// 低額請求書判定サービス
///
/// 請求書が低額かどうかを判定するビジネスロジック
pub struct LowValuePolicy;

impl LowValuePolicy {
    /// 請求書が低額かどうかを判定
    ///
    /// # Arguments
    ///
    /// * `invoice` - 判定対象の請求書
    ///
    /// # Returns
    ///
    /// 請求額がしきい値を厳密に下回る場合に `true`
    pub fn is_low_value(invoice: &Invoice) -> bool {
        invoice.value() < LOW_VALUE_THRESHOLD
    }

    /// 低額請求書のみを抽出
    ///
    /// 入力の順序を保持したまま、低額請求書だけを残す。
    ///
    /// # Arguments
    ///
    /// * `invoices` - フィルタリング対象の請求書
    ///
    /// # Returns
    ///
    /// 低額請求書のリスト
    pub fn filter_low_value(invoices: Vec<Invoice>) -> Vec<Invoice> {
        invoices.into_iter().filter(Self::is_low_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_invoice(name: &str, value: u64) -> Invoice {
        Invoice::new(name, value).unwrap()
    }

    #[test]
    fn test_is_low_value_below_threshold() {
        let invoice = create_test_invoice("low", 50);
        assert!(LowValuePolicy::is_low_value(&invoice));
    }

    #[test]
    fn test_is_low_value_boundary() {
        // 99はしきい値未満、100はしきい値ちょうどで対象外
        let just_below = create_test_invoice("just-below", 99);
        let at_threshold = create_test_invoice("at-threshold", 100);

        assert!(LowValuePolicy::is_low_value(&just_below));
        assert!(!LowValuePolicy::is_low_value(&at_threshold));
    }

    #[test]
    fn test_filter_low_value_keeps_order() {
        let invoices = vec![
            create_test_invoice("a", 10),
            create_test_invoice("b", 150),
            create_test_invoice("c", 99),
            create_test_invoice("d", 100),
            create_test_invoice("e", 0),
        ];

        let low = LowValuePolicy::filter_low_value(invoices);

        let names: Vec<&str> = low.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_filter_low_value_empty_input() {
        let low = LowValuePolicy::filter_low_value(vec![]);
        assert!(low.is_empty());
    }

    #[test]
    fn test_filter_low_value_none_qualify() {
        let invoices = vec![
            create_test_invoice("high1", 100),
            create_test_invoice("high2", 9999),
        ];

        let low = LowValuePolicy::filter_low_value(invoices);
        assert!(low.is_empty());
    }
}
