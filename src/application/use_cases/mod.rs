//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **FilterInvoicesUseCase**: 低額請求書の抽出
//! - **DispatchInvoicesUseCase**: 低額請求書の送信と失敗収集

pub mod dispatch_invoices;
pub mod filter_invoices;
