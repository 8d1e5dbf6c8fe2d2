//! 工作量彙總：有效工時、完成比例與剩餘工時

use rust_decimal::Decimal;
use std::collections::HashMap;

use eta_core::{ParallelGroup, Phase, Product};

/// 工作量計算器
pub struct WorkloadCalculator;

impl WorkloadCalculator {
    /// 工序的有效工時：計劃工時分攤到共用設備池
    ///
    /// 佔用設備的可用數合計為 0 時退回未分攤的計劃工時，
    /// 寧可給出保守估計也不回傳未定義結果
    pub fn phase_effective_hours(
        phase: &Phase,
        equipment_map: &HashMap<String, u32>,
    ) -> Decimal {
        let base = phase.planned_hours.max(Decimal::ZERO);
        if phase.equipment_ids.is_empty() {
            return base;
        }
        let available: u32 = phase
            .equipment_ids
            .iter()
            .map(|id| equipment_map.get(id.as_str()).copied().unwrap_or(0))
            .sum();
        if available > 0 {
            base / Decimal::from(available)
        } else {
            base
        }
    }

    /// 工序完成比例，結果落在 [0, 1]
    pub fn phase_completion_ratio(phase: &Phase) -> Decimal {
        let total = phase.planned_hours.max(Decimal::ZERO);
        if total <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let completed = phase.completed_hours.clamp(Decimal::ZERO, total);
        completed / total
    }

    /// 產品剩餘工時
    ///
    /// 依序工序逐一累加；同組併行工序取組內最大值（受最慢者牽制）
    pub fn product_remaining_hours(
        product: &Product,
        equipment_map: &HashMap<String, u32>,
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut group_max: HashMap<u32, Decimal> = HashMap::new();

        for phase in &product.phases {
            let hours = Self::phase_effective_hours(phase, equipment_map);
            let ratio = Self::phase_completion_ratio(phase);
            let remaining = hours * (Decimal::ONE - ratio);
            match phase.parallel_group {
                ParallelGroup::Sequential => total += remaining,
                ParallelGroup::Concurrent(group) => {
                    let entry = group_max.entry(group).or_insert(Decimal::ZERO);
                    if remaining > *entry {
                        *entry = remaining;
                    }
                }
            }
        }

        total + group_max.values().copied().sum::<Decimal>()
    }
}
