//! 產能事件模型（損失工時與加班調整）

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::equipment::normalize_equipment_ids;

/// 事件：指定日期的非計劃性產能損失（缺勤、故障等）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// 事件ID
    pub id: Uuid,

    /// 發生日期
    pub day: NaiveDate,

    /// 損失工時
    pub hours_lost: Decimal,

    /// 原因
    pub reason: String,

    /// 備註
    pub remark: Option<String>,
}

impl Event {
    /// 創建新的事件
    pub fn new(day: NaiveDate, hours_lost: Decimal, reason: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            hours_lost,
            reason,
            remark: None,
        }
    }

    /// 建構器模式：設置備註
    pub fn with_remark(mut self, remark: String) -> Self {
        self.remark = Some(remark);
        self
    }
}

/// 產能調整：指定日期的加班工時
///
/// `equipment_ids` 非空時，`extra_hours` 按「點名的機台數」計算，
/// 與當日實際可用機台數無關
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityAdjustment {
    /// 調整ID
    pub id: Uuid,

    /// 生效日期
    pub day: NaiveDate,

    /// 每台加班工時
    pub extra_hours: Decimal,

    /// 原因
    pub reason: String,

    /// 點名加班的設備編號
    pub equipment_ids: Vec<String>,
}

impl CapacityAdjustment {
    /// 創建新的產能調整
    pub fn new(day: NaiveDate, extra_hours: Decimal, reason: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            extra_hours,
            reason,
            equipment_ids: Vec::new(),
        }
    }

    /// 建構器模式：設置點名設備（輸入會先正規化）
    pub fn with_equipment_ids(mut self, equipment_ids: Vec<String>) -> Self {
        self.equipment_ids =
            normalize_equipment_ids(equipment_ids.iter().map(String::as_str));
        self
    }

    /// 當日合計加班工時 = 每台工時 × max(1, 點名機台數)
    pub fn total_extra_hours(&self) -> Decimal {
        let count = self.equipment_ids.len().max(1);
        self.extra_hours * Decimal::from(count)
    }
}
