//! # ETA Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod equipment;
pub mod event;
pub mod order;

// Re-export 主要類型
pub use calendar::{ShiftDayPlan, ShiftTemplate, WorkCalendar};
pub use equipment::{
    format_equipment_ids, normalize_equipment_ids, split_equipment_ids, Equipment,
};
pub use event::{CapacityAdjustment, Event};
pub use order::{Order, ParallelGroup, Phase, Product};

use rust_decimal::Decimal;

/// ETA 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EtaError {
    #[error("交期模擬超過 {limit_days} 天仍未完工，剩餘 {remaining_hours}h 無法由現行產能消化")]
    SimulationLimitExceeded {
        limit_days: u32,
        remaining_hours: Decimal,
    },

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, EtaError>;
