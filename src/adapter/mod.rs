//! Adapter Layer
//!
//! 外部システム（SAP, ファイルシステム）との統合

pub mod config;
pub mod repositories;
pub mod sap;
