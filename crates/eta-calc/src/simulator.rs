//! 交期模擬：逐日消耗剩餘工時直到完工

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rayon::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::time::Instant;

use eta_core::{EtaError, Order, Result, WorkCalendar};

use crate::ledger::{format_hours, CapacityLedger};
use crate::workload::WorkloadCalculator;
use crate::EtaResult;

/// 模擬天數上限（約 10 年），防止永遠湊不滿產能的日曆把迴圈拖死
pub const MAX_SIMULATION_DAYS: u32 = 3650;

/// 名義上的每日開工時刻，完工時間從這裡起算
const WORKDAY_START_HOUR: u32 = 9;

/// 交期模擬器
///
/// 綁定一份工作日曆，對訂單快照做純計算；同一輸入永遠得到同一結果
pub struct EtaSimulator {
    calendar: WorkCalendar,
}

impl EtaSimulator {
    /// 以指定日曆創建模擬器
    pub fn new(calendar: WorkCalendar) -> Self {
        Self { calendar }
    }

    /// 獲取工作日曆引用
    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    /// 估算訂單的預計完工時間
    pub fn simulate(&self, order: &Order) -> Result<EtaResult> {
        tracing::info!(
            "開始交期模擬：訂單 {}，產品 {} 筆，事件 {} 筆，調整 {} 筆",
            order.order_id,
            order.products.len(),
            order.events.len(),
            order.adjustments.len()
        );

        let start_time = Instant::now();

        let equipment_map = order.equipment_available_map();
        let remaining_hours: Decimal = order
            .products
            .iter()
            .map(|p| WorkloadCalculator::product_remaining_hours(p, &equipment_map))
            .sum();
        tracing::debug!("剩餘工時合計: {}h", format_hours(remaining_hours));

        let ledger = CapacityLedger::from_order(order);

        let mut explanation: Vec<String> = Vec::new();
        if !order.products.is_empty() {
            explanation.push("Product workload summary:".to_string());
            for product in &order.products {
                let hours =
                    WorkloadCalculator::product_remaining_hours(product, &equipment_map);
                explanation.push(format!(
                    "- {} (PN={} qty={}): {}h",
                    product.product_id,
                    product.part_number.as_deref().unwrap_or("-"),
                    product.quantity,
                    format_hours(hours)
                ));
            }
            explanation.push(String::new());
        }

        if remaining_hours <= Decimal::ZERO {
            explanation.push("All phases completed. ETA equals start time.".to_string());
            return Ok(EtaResult {
                eta: order.start_at,
                remaining_hours: Decimal::ZERO,
                daily_capacity: BTreeMap::new(),
                explanation,
                calculation_time_ms: Some(start_time.elapsed().as_millis()),
            });
        }

        let mut current_day = order.start_at.date();
        let mut hours_left = remaining_hours;
        let mut daily_capacity: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

        for _ in 0..MAX_SIMULATION_DAYS {
            let base = self.calendar.capacity_for_day(current_day);
            let lost = ledger.lost_on(current_day);
            let extra = ledger.extra_on(current_day);
            let cap = (base - lost + extra).max(Decimal::ZERO);

            if base > Decimal::ZERO || lost > Decimal::ZERO || extra > Decimal::ZERO {
                daily_capacity.insert(current_day, cap);

                if lost > Decimal::ZERO || extra > Decimal::ZERO {
                    let mut parts: Vec<String> = Vec::new();
                    if lost > Decimal::ZERO {
                        parts.push(format!("- {}h", format_hours(lost)));
                    }
                    if extra > Decimal::ZERO {
                        parts.push(format!("+ {}h", format_hours(extra)));
                    }
                    explanation.push(format!(
                        "{}: capacity {}h {} => {}h ({})",
                        current_day,
                        format_hours(base),
                        parts.join(" "),
                        format_hours(cap),
                        ledger.day_reasons(current_day).join(", ")
                    ));
                }

                if cap > Decimal::ZERO {
                    if hours_left <= cap {
                        let eta = finish_instant(current_day, hours_left)?;
                        if explanation.is_empty() {
                            explanation.push("No blocking events.".to_string());
                        }
                        tracing::info!(
                            "交期模擬完成：訂單 {} 預計 {} 完工，耗時 {:?}",
                            order.order_id,
                            eta,
                            start_time.elapsed()
                        );
                        return Ok(EtaResult {
                            eta,
                            remaining_hours,
                            daily_capacity,
                            explanation,
                            calculation_time_ms: Some(start_time.elapsed().as_millis()),
                        });
                    }
                    hours_left -= cap;
                }
            }

            current_day = current_day
                .succ_opt()
                .ok_or_else(|| EtaError::InvalidDate(format!("日期溢出: {current_day}")))?;
        }

        tracing::warn!(
            "交期模擬失敗：訂單 {} 在 {} 天內無法完工",
            order.order_id,
            MAX_SIMULATION_DAYS
        );
        Err(EtaError::SimulationLimitExceeded {
            limit_days: MAX_SIMULATION_DAYS,
            remaining_hours: hours_left,
        })
    }

    /// 批次估算多張訂單
    ///
    /// 訂單之間不共享狀態，直接並行計算
    pub fn simulate_many(&self, orders: &[Order]) -> Vec<Result<EtaResult>> {
        orders.par_iter().map(|order| self.simulate(order)).collect()
    }
}

/// 單次呼叫的便捷入口
pub fn compute_eta(order: &Order, calendar: &WorkCalendar) -> Result<EtaResult> {
    EtaSimulator::new(calendar.clone()).simulate(order)
}

/// 完工時刻 = 當日名義開工時刻 09:00 + 剩餘工時（支援小數工時）
fn finish_instant(day: NaiveDate, hours: Decimal) -> Result<NaiveDateTime> {
    let start_of_day = day
        .and_hms_opt(WORKDAY_START_HOUR, 0, 0)
        .ok_or_else(|| EtaError::InvalidDate(format!("無法定位開工時刻: {day}")))?;
    let seconds = (hours * Decimal::from(3600))
        .round()
        .to_i64()
        .ok_or_else(|| {
            EtaError::CalculationError(format!("剩餘工時無法換算為秒數: {hours}"))
        })?;
    Ok(start_of_day + Duration::seconds(seconds))
}
