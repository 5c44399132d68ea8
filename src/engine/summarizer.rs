// ==========================================
// 提前补货计划系统 - 计划汇总引擎
// ==========================================
// 职责: 移动记录 → 最终补货计划(分组求和)
// 规则: 按 (库区, 物料号, 物料描述, 类别) 分组;
//       箱数与托盘数各自独立求和,托盘数是各笔已取整
//       托盘数之和,不按汇总箱数重新换算
// 输出顺序: (库区名, 物料号, 类别) 升序,确定性
// ==========================================

use crate::domain::plan::{MovementRecord, PlanRow};
use crate::domain::types::{StockCategory, StorageArea};
use std::collections::HashMap;
use tracing::{debug, instrument};

pub struct PlanSummarizer;

impl PlanSummarizer {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总移动记录为补货计划
    ///
    /// 分组求和满足结合律与交换律,对同一移动列表重复汇总
    /// 结果不变(幂等)
    #[instrument(skip(self, movements), fields(movement_count = movements.len()))]
    pub fn summarize(&self, movements: &[MovementRecord]) -> Vec<PlanRow> {
        type GroupKey = (StorageArea, String, String, StockCategory);
        let mut order: Vec<GroupKey> = Vec::new();
        let mut groups: HashMap<GroupKey, (f64, f64)> = HashMap::new();

        for movement in movements {
            let key = (
                movement.storage_area,
                movement.material_id.clone(),
                movement.material_description.clone(),
                movement.category,
            );

            match groups.get_mut(&key) {
                Some((box_sum, pallet_sum)) => {
                    *box_sum += movement.case_qty;
                    *pallet_sum += movement.pallet_qty;
                }
                None => {
                    groups.insert(key.clone(), (movement.case_qty, movement.pallet_qty));
                    order.push(key);
                }
            }
        }

        let mut plan: Vec<PlanRow> = order
            .into_iter()
            .map(|key| {
                let (box_qty, pallet_qty) = groups[&key];
                let (storage_area, material_id, material_description, category) = key;
                PlanRow {
                    storage_area,
                    material_id,
                    material_description,
                    category,
                    box_qty,
                    pallet_qty,
                }
            })
            .collect();

        // 确定性输出顺序
        plan.sort_by(|a, b| {
            a.storage_area
                .as_str()
                .cmp(b.storage_area.as_str())
                .then_with(|| a.material_id.cmp(&b.material_id))
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });

        debug!(plan_rows = plan.len(), "计划汇总完成");

        plan
    }
}

impl Default for PlanSummarizer {
    fn default() -> Self {
        Self::new()
    }
}
