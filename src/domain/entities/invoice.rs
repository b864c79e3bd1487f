//! # Invoice Entity
//!
//! 請求書エンティティ

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// 請求書レコード
///
/// ストレージ層で生成される不変のバリューレコード。
/// 同値性はフィールドの値で判定される（テスト用途）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    name: String,
    value: u64,
}

impl Invoice {
    /// 新しい請求書レコードを作成
    ///
    /// # Arguments
    ///
    /// * `name` - 顧客名（空でないテキスト識別子）
    /// * `value` - 請求額（非負の整数）
    ///
    /// # Errors
    ///
    /// `name` が空文字列の場合にエラーを返す
    pub fn new(name: impl Into<String>, value: u64) -> Result<Self> {
        let name = name.into();
        ensure!(!name.is_empty(), "invoice name must not be empty");
        Ok(Self { name, value })
    }

    /// 顧客名を返す
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 請求額を返す
    pub fn value(&self) -> u64 {
        self.value
    }
}
