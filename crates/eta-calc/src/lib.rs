//! # ETA Calculation Engine
//!
//! 交期估算核心引擎

pub mod ledger;
pub mod progress;
pub mod simulator;
pub mod workload;

// Re-export 主要類型
pub use ledger::CapacityLedger;
pub use progress::ProgressCalculator;
pub use simulator::{compute_eta, EtaSimulator, MAX_SIMULATION_DAYS};
pub use workload::WorkloadCalculator;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 交期估算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtaResult {
    /// 預計完工時間
    pub eta: NaiveDateTime,

    /// 開工時的剩餘工時
    pub remaining_hours: Decimal,

    /// 每日淨產能紀錄（僅含有產能變動或排班的日期）
    pub daily_capacity: BTreeMap<NaiveDate, Decimal>,

    /// 解釋說明（逐行）
    pub explanation: Vec<String>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl EtaResult {
    /// 檢查預計完工時間是否不晚於指定交期
    pub fn meets_due_date(&self, due_date: NaiveDate) -> bool {
        self.eta.date() <= due_date
    }
}
