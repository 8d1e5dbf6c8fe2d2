//! 訂單、產品與工序模型

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::equipment::{normalize_equipment_ids, split_equipment_ids, Equipment};
use crate::event::{CapacityAdjustment, Event};

/// 併行分組：工序在產品內的執行方式
///
/// 同組併行工序同時進行，受最慢者牽制；分組編號只在所屬產品內有意義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParallelGroup {
    /// 依序執行
    Sequential,
    /// 併行執行，同組編號的工序同時進行
    Concurrent(u32),
}

impl ParallelGroup {
    /// 從舊資料的整數編碼還原（0 = 依序，>0 = 併行組編號）
    pub fn from_raw(raw: u32) -> Self {
        if raw == 0 {
            Self::Sequential
        } else {
            Self::Concurrent(raw)
        }
    }

    /// 轉回整數編碼
    pub fn as_raw(&self) -> u32 {
        match self {
            Self::Sequential => 0,
            Self::Concurrent(group) => *group,
        }
    }

    /// 檢查是否為併行工序
    pub fn is_concurrent(&self) -> bool {
        matches!(self, Self::Concurrent(_))
    }
}

impl Default for ParallelGroup {
    fn default() -> Self {
        Self::Sequential
    }
}

/// 工序
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase {
    /// 工序名稱
    pub name: String,

    /// 計劃工時（總工作量，已含數量因素）
    pub planned_hours: Decimal,

    /// 已完成工時
    pub completed_hours: Decimal,

    /// 併行分組
    pub parallel_group: ParallelGroup,

    /// 佔用的設備編號（空 = 不受設備約束；已正規化、保序）
    pub equipment_ids: Vec<String>,

    /// 負責人員（僅供顯示）
    pub assigned_employee: Option<String>,
}

impl Phase {
    /// 創建新的工序
    pub fn new(name: String, planned_hours: Decimal) -> Self {
        Self {
            name,
            planned_hours,
            completed_hours: Decimal::ZERO,
            parallel_group: ParallelGroup::Sequential,
            equipment_ids: Vec::new(),
            assigned_employee: None,
        }
    }

    /// 建構器模式：設置已完成工時
    pub fn with_completed_hours(mut self, completed_hours: Decimal) -> Self {
        self.completed_hours = completed_hours;
        self
    }

    /// 建構器模式：設置併行分組
    pub fn with_parallel_group(mut self, parallel_group: ParallelGroup) -> Self {
        self.parallel_group = parallel_group;
        self
    }

    /// 建構器模式：設置佔用設備（輸入會先正規化）
    pub fn with_equipment_ids(mut self, equipment_ids: Vec<String>) -> Self {
        self.equipment_ids =
            normalize_equipment_ids(equipment_ids.iter().map(String::as_str));
        self
    }

    /// 建構器模式：以邊界層的逗號分隔字串設置佔用設備
    pub fn with_equipment_list(mut self, text: &str) -> Self {
        self.equipment_ids = split_equipment_ids(text);
        self
    }

    /// 建構器模式：設置負責人員
    pub fn with_assigned_employee(mut self, employee: String) -> Self {
        self.assigned_employee = Some(employee);
        self
    }

    /// 檢查工序是否已全部完成
    pub fn is_complete(&self) -> bool {
        self.planned_hours > Decimal::ZERO && self.completed_hours >= self.planned_hours
    }
}

/// 產品
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub product_id: String,

    /// 零件號
    pub part_number: Option<String>,

    /// 訂購數量
    pub quantity: u32,

    /// 已產出數量（僅用於數量進度，不參與工時計算）
    pub produced_qty: u32,

    /// 工序清單（依製程順序）
    pub phases: Vec<Phase>,
}

impl Product {
    /// 創建新的產品
    pub fn new(product_id: String, quantity: u32) -> Self {
        Self {
            product_id,
            part_number: None,
            quantity,
            produced_qty: 0,
            phases: Vec::new(),
        }
    }

    /// 建構器模式：設置零件號
    pub fn with_part_number(mut self, part_number: String) -> Self {
        self.part_number = Some(part_number);
        self
    }

    /// 建構器模式：設置已產出數量
    pub fn with_produced_qty(mut self, produced_qty: u32) -> Self {
        self.produced_qty = produced_qty;
        self
    }

    /// 建構器模式：設置工序清單
    pub fn with_phases(mut self, phases: Vec<Phase>) -> Self {
        self.phases = phases;
        self
    }

    /// 添加工序
    pub fn add_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    /// 舊檔案的工時以單件為單位，載入時呼叫一次換算為總工時
    ///
    /// 舊版以布林值記錄完工狀態，沒有單件的已完成工時需要換算
    pub fn convert_unit_hours_to_total(&mut self) {
        let quantity = Decimal::from(self.quantity.max(1));
        for phase in &mut self.phases {
            phase.planned_hours *= quantity;
        }
    }
}

/// 訂單：交期估算的輸入快照
///
/// 引擎不會修改訂單；編輯由外部擁有，改完重新估算即可
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub order_id: String,

    /// 開工時間
    pub start_at: NaiveDateTime,

    /// 交期（僅供顯示）
    pub due_date: Option<NaiveDate>,

    /// 客戶代碼
    pub customer_code: Option<String>,

    /// 產品清單
    pub products: Vec<Product>,

    /// 設備清單（本訂單的設備快照）
    pub equipment: Vec<Equipment>,

    /// 損失工時事件
    pub events: Vec<Event>,

    /// 產能調整（加班）
    pub adjustments: Vec<CapacityAdjustment>,
}

impl Order {
    /// 創建新的訂單
    pub fn new(order_id: String, start_at: NaiveDateTime) -> Self {
        Self {
            order_id,
            start_at,
            due_date: None,
            customer_code: None,
            products: Vec::new(),
            equipment: Vec::new(),
            events: Vec::new(),
            adjustments: Vec::new(),
        }
    }

    /// 建構器模式：設置交期
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// 建構器模式：設置客戶代碼
    pub fn with_customer_code(mut self, customer_code: String) -> Self {
        self.customer_code = Some(customer_code);
        self
    }

    /// 建構器模式：設置產品清單
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// 建構器模式：設置設備清單
    pub fn with_equipment(mut self, equipment: Vec<Equipment>) -> Self {
        self.equipment = equipment;
        self
    }

    /// 添加產品
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// 添加事件
    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// 添加產能調整
    pub fn add_adjustment(&mut self, adjustment: CapacityAdjustment) {
        self.adjustments.push(adjustment);
    }

    /// 建立設備可用數量映射（空編號略過）
    pub fn equipment_available_map(&self) -> HashMap<String, u32> {
        let mut result = HashMap::new();
        for eq in &self.equipment {
            if eq.equipment_id.is_empty() {
                continue;
            }
            result.insert(eq.equipment_id.clone(), eq.available_count);
        }
        result
    }
}
