use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    // SAP endpoint
    pub sap_base_url: String,
    pub sap_company_code: String,

    // Authentication
    pub api_token: String,

    // Invoice storage
    pub invoice_store_path: String,

    // HTTP behavior
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
