// ==========================================
// 提前补货计划系统 - 发运需求实体
// ==========================================
// 红线: 需求按输入行序处理,先到先得,不重排、不回溯
// ==========================================

use crate::domain::types::FulfillmentLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// ShipmentDemand - 发运需求行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentDemand {
    /// 物料号
    pub material_id: String,

    /// 需求箱数(Delivery quantity)
    pub delivery_qty: f64,

    /// 源文件行号(从 1 开始)
    pub row_number: usize,
}

// ==========================================
// ShipmentFulfillment - 单需求满足结果
// ==========================================
// 缺口静默记录,不作为错误;调用方据此核对计划与需求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentFulfillment {
    pub material_id: String,
    pub row_number: usize,

    /// 原始需求箱数
    pub required_qty: f64,

    /// 实际满足箱数(厂内消耗 + 跨库移动)
    pub fulfilled_qty: f64,

    /// 未满足箱数(缺口)
    pub unmet_qty: f64,

    pub level: FulfillmentLevel,
}

impl ShipmentFulfillment {
    /// 按满足量推导满足等级
    pub fn evaluate(
        material_id: &str,
        row_number: usize,
        required_qty: f64,
        fulfilled_qty: f64,
    ) -> Self {
        let unmet_qty = (required_qty - fulfilled_qty).max(0.0);
        let level = if unmet_qty <= 0.0 {
            FulfillmentLevel::Full
        } else if fulfilled_qty > 0.0 {
            FulfillmentLevel::Partial
        } else {
            FulfillmentLevel::None
        };

        Self {
            material_id: material_id.to_string(),
            row_number,
            required_qty,
            fulfilled_qty,
            unmet_qty,
            level,
        }
    }

    /// 是否存在缺口
    pub fn has_shortfall(&self) -> bool {
        self.unmet_qty > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fulfillment_full() {
        let f = ShipmentFulfillment::evaluate("MAT001", 1, 100.0, 100.0);
        assert_eq!(f.level, FulfillmentLevel::Full);
        assert_eq!(f.unmet_qty, 0.0);
        assert!(!f.has_shortfall());
    }

    #[test]
    fn test_fulfillment_partial() {
        let f = ShipmentFulfillment::evaluate("MAT001", 2, 100.0, 70.0);
        assert_eq!(f.level, FulfillmentLevel::Partial);
        assert_eq!(f.unmet_qty, 30.0);
        assert!(f.has_shortfall());
    }

    #[test]
    fn test_fulfillment_none() {
        let f = ShipmentFulfillment::evaluate("MAT001", 3, 50.0, 0.0);
        assert_eq!(f.level, FulfillmentLevel::None);
        assert_eq!(f.unmet_qty, 50.0);
    }

    #[test]
    fn test_fulfillment_zero_demand_is_full() {
        let f = ShipmentFulfillment::evaluate("MAT001", 4, 0.0, 0.0);
        assert_eq!(f.level, FulfillmentLevel::Full);
    }
}
