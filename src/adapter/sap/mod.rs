//! SAP Integration
//!
//! SAP会計システムとの統合（クライアント、ワイヤーモデル、エラー）

pub mod client;
pub mod error;
pub mod models;
