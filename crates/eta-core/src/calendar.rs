//! 班次日曆模型

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 班次日計劃（單日的班數與每班工時）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftDayPlan {
    /// 班數
    pub shift_count: i32,

    /// 每班工時
    pub hours_per_shift: Decimal,
}

impl ShiftDayPlan {
    /// 創建新的班次日計劃
    pub fn new(shift_count: i32, hours_per_shift: Decimal) -> Self {
        Self {
            shift_count,
            hours_per_shift,
        }
    }

    /// 休息日（零班次）
    pub fn off() -> Self {
        Self {
            shift_count: 0,
            hours_per_shift: Decimal::ZERO,
        }
    }

    /// 當日總工時，負值輸入一律視為 0
    pub fn total_hours(&self) -> Decimal {
        Decimal::from(self.shift_count.max(0)) * self.hours_per_shift.max(Decimal::ZERO)
    }
}

impl Default for ShiftDayPlan {
    fn default() -> Self {
        Self {
            shift_count: 1,
            hours_per_shift: Decimal::from(8),
        }
    }
}

/// 班次模板（週一為首的七日循環計劃）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// 模板名稱
    pub name: String,

    /// 週計劃（索引 0 = 週一, 1 = 週二, ..., 6 = 週日）
    pub week_plan: Vec<ShiftDayPlan>,
}

impl ShiftTemplate {
    /// 創建新的班次模板（空週計劃）
    pub fn new(name: String) -> Self {
        Self {
            name,
            week_plan: Vec::new(),
        }
    }

    /// 建構器模式：設置週計劃
    pub fn with_week_plan(mut self, week_plan: Vec<ShiftDayPlan>) -> Self {
        self.week_plan = week_plan;
        self
    }

    /// 週一到週五單班模板，週末休息
    pub fn five_day(name: String, hours_per_shift: Decimal) -> Self {
        let mut week_plan = vec![ShiftDayPlan::new(1, hours_per_shift); 5];
        week_plan.push(ShiftDayPlan::off());
        week_plan.push(ShiftDayPlan::off());
        Self { name, week_plan }
    }

    /// 七天連續生產模板
    pub fn seven_day(name: String, hours_per_shift: Decimal) -> Self {
        Self {
            name,
            week_plan: vec![ShiftDayPlan::new(1, hours_per_shift); 7],
        }
    }

    /// 取得指定星期（週一=0）的工時
    ///
    /// 週計劃不足七天或索引越界時回傳 0
    pub fn hours_for_weekday(&self, weekday: usize) -> Decimal {
        if self.week_plan.len() < 7 {
            return Decimal::ZERO;
        }
        if weekday >= self.week_plan.len() {
            return Decimal::ZERO;
        }
        self.week_plan[weekday].total_hours()
    }

    /// 整週總工時
    pub fn weekly_hours(&self) -> Decimal {
        self.week_plan.iter().map(ShiftDayPlan::total_hours).sum()
    }
}

/// 工作日曆：由當前生效的班次模板推出每日產能
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// 生效中的班次模板（可能尚未綁定）
    pub shift_template: Option<ShiftTemplate>,
}

impl WorkCalendar {
    /// 以指定模板創建工作日曆
    pub fn new(shift_template: ShiftTemplate) -> Self {
        Self {
            shift_template: Some(shift_template),
        }
    }

    /// 未綁定模板的日曆（每日產能為 0）
    pub fn unscheduled() -> Self {
        Self {
            shift_template: None,
        }
    }

    /// 指定日期的基礎產能（工時）
    ///
    /// 模板缺席時回傳 0，永不失敗
    pub fn capacity_for_day(&self, date: NaiveDate) -> Decimal {
        match &self.shift_template {
            Some(template) => {
                template.hours_for_weekday(date.weekday().num_days_from_monday() as usize)
            }
            None => Decimal::ZERO,
        }
    }

    /// 檢查指定日期是否有排班
    pub fn is_scheduled_day(&self, date: NaiveDate) -> bool {
        self.capacity_for_day(date) > Decimal::ZERO
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::unscheduled()
    }
}
