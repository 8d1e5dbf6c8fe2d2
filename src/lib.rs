//! # 生產交期估算引擎
//!
//! 把訂單快照（產品 → 工序，含依序／併行／共用設備三種執行方式）、
//! 週循環班次日曆、損失工時事件與加班調整，換算成預計完工時間、
//! 每日產能紀錄與逐行解釋說明。
//!
//! 引擎是 (訂單, 日曆) 快照的純函數：不做 I/O、不持久化、不共享狀態，
//! 同一輸入永遠得到同一結果。

pub use eta_cache::{snapshot_fingerprint, DirtyTracker, EtaCache};
pub use eta_calc::{
    compute_eta, CapacityLedger, EtaResult, EtaSimulator, ProgressCalculator,
    WorkloadCalculator, MAX_SIMULATION_DAYS,
};
pub use eta_core::{
    format_equipment_ids, normalize_equipment_ids, split_equipment_ids,
    CapacityAdjustment, Equipment, EtaError, Event, Order, ParallelGroup, Phase, Product,
    Result, ShiftDayPlan, ShiftTemplate, WorkCalendar,
};
