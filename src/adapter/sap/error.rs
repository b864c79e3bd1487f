//! SAP Delivery Errors
//!
//! SAP送信エラーの定義

use thiserror::Error;

/// SAP送信エラー
///
/// 請求書ドキュメント1件の送信が失敗した理由。
/// 送信ループ側では理由を区別せず、一律に「この請求書は失敗」として扱う。
#[derive(Debug, Error)]
pub enum SapDeliveryError {
    /// SAP側がドキュメントを拒否した
    #[error("SAP rejected invoice document (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// 接続やタイムアウトなどの転送エラー
    #[error("failed to deliver invoice document to SAP: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SapDeliveryError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}
