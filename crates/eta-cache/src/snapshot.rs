//! 快照指紋

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use eta_core::{Order, WorkCalendar};

/// 計算 (訂單, 日曆) 快照的指紋
///
/// 引擎是快照的純函數，指紋相同即結果相同；任何一筆欄位變動都會改變指紋
pub fn snapshot_fingerprint(order: &Order, calendar: &WorkCalendar) -> u64 {
    let mut hasher = DefaultHasher::new();
    order.hash(&mut hasher);
    calendar.hash(&mut hasher);
    hasher.finish()
}
