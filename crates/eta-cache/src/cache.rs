//! 估算結果快取

use std::collections::HashMap;

use eta_calc::{EtaResult, EtaSimulator};
use eta_core::{Order, Result};

use crate::snapshot::snapshot_fingerprint;

struct CacheEntry {
    fingerprint: u64,
    result: EtaResult,
}

/// 估算結果快取：以訂單ID為鍵，指紋不符視為未命中
///
/// 引擎本身不做任何快取；要不要掛快取由呼叫端決定
pub struct EtaCache {
    entries: HashMap<String, CacheEntry>,
}

impl EtaCache {
    /// 創建空的快取
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 查詢快取（指紋必須一致）
    pub fn lookup(&self, order_id: &str, fingerprint: u64) -> Option<&EtaResult> {
        self.entries
            .get(order_id)
            .filter(|entry| entry.fingerprint == fingerprint)
            .map(|entry| &entry.result)
    }

    /// 寫入快取
    pub fn store(&mut self, order_id: String, fingerprint: u64, result: EtaResult) {
        self.entries
            .insert(order_id, CacheEntry { fingerprint, result });
    }

    /// 作廢指定訂單的快取
    pub fn invalidate(&mut self, order_id: &str) {
        self.entries.remove(order_id);
    }

    /// 命中則直接回傳，未命中則計算並回填
    pub fn get_or_compute(
        &mut self,
        simulator: &EtaSimulator,
        order: &Order,
    ) -> Result<EtaResult> {
        let fingerprint = snapshot_fingerprint(order, simulator.calendar());
        if let Some(hit) = self.lookup(&order.order_id, fingerprint) {
            return Ok(hit.clone());
        }
        let result = simulator.simulate(order)?;
        self.store(order.order_id.clone(), fingerprint, result.clone());
        Ok(result)
    }

    /// 快取筆數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 檢查快取是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 清空快取
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EtaCache {
    fn default() -> Self {
        Self::new()
    }
}
