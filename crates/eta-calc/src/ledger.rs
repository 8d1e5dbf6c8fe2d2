//! 產能帳本：按日期彙總損失工時、加班工時與原因說明

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use eta_core::Order;

/// 工時數值顯示用字串（去除尾端多餘的零）
pub(crate) fn format_hours(value: Decimal) -> String {
    value.normalize().to_string()
}

/// 產能帳本
///
/// 從訂單的事件與調整建立日期索引；查詢不存在的日期一律回傳 0
#[derive(Debug, Clone, Default)]
pub struct CapacityLedger {
    lost: HashMap<NaiveDate, Decimal>,
    lost_reasons: HashMap<NaiveDate, Vec<String>>,
    extra: HashMap<NaiveDate, Decimal>,
    extra_reasons: HashMap<NaiveDate, Vec<String>>,
}

impl CapacityLedger {
    /// 從訂單建立帳本
    pub fn from_order(order: &Order) -> Self {
        let mut ledger = Self::default();

        for event in &order.events {
            *ledger.lost.entry(event.day).or_insert(Decimal::ZERO) += event.hours_lost;
            ledger
                .lost_reasons
                .entry(event.day)
                .or_default()
                .push(format!(
                    "{}(-{}h)",
                    event.reason,
                    format_hours(event.hours_lost)
                ));
        }

        for adj in &order.adjustments {
            *ledger.extra.entry(adj.day).or_insert(Decimal::ZERO) +=
                adj.total_extra_hours();

            let eq_text = if adj.equipment_ids.is_empty() {
                String::new()
            } else {
                format!("設備:{} ", adj.equipment_ids.join(","))
            };
            let label = if adj.reason.is_empty() {
                format!("{}+{}h", eq_text, format_hours(adj.extra_hours))
            } else {
                format!(
                    "{}{}(+{}h)",
                    eq_text,
                    adj.reason,
                    format_hours(adj.extra_hours)
                )
            };
            ledger
                .extra_reasons
                .entry(adj.day)
                .or_default()
                .push(label.trim().to_string());
        }

        ledger
    }

    /// 指定日期的損失工時合計
    pub fn lost_on(&self, day: NaiveDate) -> Decimal {
        self.lost.get(&day).copied().unwrap_or(Decimal::ZERO)
    }

    /// 指定日期的加班工時合計
    pub fn extra_on(&self, day: NaiveDate) -> Decimal {
        self.extra.get(&day).copied().unwrap_or(Decimal::ZERO)
    }

    /// 指定日期的原因說明（先損失後加班，保持登錄順序）
    pub fn day_reasons(&self, day: NaiveDate) -> Vec<String> {
        let mut reasons = self.lost_reasons.get(&day).cloned().unwrap_or_default();
        if let Some(extra) = self.extra_reasons.get(&day) {
            reasons.extend(extra.iter().cloned());
        }
        reasons
    }
}
