//! 進度計算：工時進度與數量進度

use rust_decimal::Decimal;
use std::collections::HashMap;

use eta_core::Product;

use crate::workload::WorkloadCalculator;

/// 進度計算器
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// 產品工時進度：以有效工時加權的完成度，結果落在 [0, 1]
    ///
    /// 所有工序一視同仁，不做併行分組折算——進度是工作量加權平均，
    /// 剩餘工時才是瓶頸式估計，兩者口徑刻意不同
    pub fn product_progress(
        product: &Product,
        equipment_map: &HashMap<String, u32>,
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut done = Decimal::ZERO;
        for phase in &product.phases {
            let hours = WorkloadCalculator::phase_effective_hours(phase, equipment_map);
            total += hours;
            let ratio = WorkloadCalculator::phase_completion_ratio(phase);
            done += hours * ratio;
        }
        if total <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (done / total).min(Decimal::ONE)
    }

    /// 產品數量進度：已產出 / 訂購數量，與工時資料完全無關
    pub fn product_quantity_progress(product: &Product) -> Decimal {
        if product.quantity == 0 {
            return Decimal::ZERO;
        }
        let produced = product.produced_qty.min(product.quantity);
        Decimal::from(produced) / Decimal::from(product.quantity)
    }
}
