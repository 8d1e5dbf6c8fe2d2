//! 設備模型與設備編號正規化

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 邊界層用來表示「無需設備」的佔位值
const NO_EQUIPMENT_TOKENS: &[&str] = &["-", "none", "無需設備"];

/// 設備：同規格機台構成的一個可互換類別
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equipment {
    /// 設備編號（訂單設備清單內唯一）
    pub equipment_id: String,

    /// 設備類別
    pub category: Option<String>,

    /// 機台總數
    pub total_count: u32,

    /// 當前可用機台數
    pub available_count: u32,
}

impl Equipment {
    /// 創建新的設備，預設全部機台可用
    pub fn new(equipment_id: String, total_count: u32) -> Self {
        let total_count = total_count.max(1);
        Self {
            equipment_id,
            category: None,
            total_count,
            available_count: total_count,
        }
    }

    /// 建構器模式：設置可用機台數（不得超過總數）
    pub fn with_available_count(mut self, available_count: u32) -> Self {
        self.available_count = available_count.min(self.total_count);
        self
    }

    /// 建構器模式：設置設備類別
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// 檢查是否有機台可用
    pub fn is_available(&self) -> bool {
        self.available_count > 0
    }
}

/// 正規化設備編號列表：去除空白、過濾佔位值、保序去重
pub fn normalize_equipment_ids<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        let text = item.trim();
        if text.is_empty() || NO_EQUIPMENT_TOKENS.contains(&text) {
            continue;
        }
        if !seen.insert(text.to_string()) {
            continue;
        }
        result.push(text.to_string());
    }
    result
}

/// 將逗號分隔的設備編號字串分割為正規化列表
pub fn split_equipment_ids(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    normalize_equipment_ids(text.split(','))
}

/// 將設備編號列表格式化為逗號分隔字串
pub fn format_equipment_ids(ids: &[String]) -> String {
    normalize_equipment_ids(ids.iter().map(String::as_str)).join(",")
}
