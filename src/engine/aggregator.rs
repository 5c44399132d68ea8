// ==========================================
// 提前补货计划系统 - 库存汇总引擎
// ==========================================
// 职责: 归一化库存 → 汇总台账(分配用可变账本)
// 规则: 按 (物料号, 物料描述, 库区, 类别) 分组求和,
//       缺失数量按 0 计;UPP 主数据按物料描述左连接
// 红线: 台账顺序必须确定:(物料号, 库区名, 类别) 升序,
//       ARGO 先于 BAKTI 由字典序保证,不依赖输入行序
// ==========================================

use crate::domain::stock::{LedgerEntry, MasterRecord, NormalizedStockRecord};
use crate::domain::types::{StockCategory, StorageArea};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

pub struct StockAggregator;

impl StockAggregator {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总归一化库存并连接 UPP 主数据,产出分配台账
    #[instrument(skip(self, normalized, master), fields(normalized_count = normalized.len()))]
    pub fn aggregate(
        &self,
        normalized: &[NormalizedStockRecord],
        master: &[MasterRecord],
    ) -> Vec<LedgerEntry> {
        // UPP 主数据索引:物料描述 → UPP,重复描述取首条并告警
        let mut upp_index: HashMap<&str, Option<f64>> = HashMap::new();
        for record in master {
            let key = record.material_description.as_str();
            if upp_index.contains_key(key) {
                warn!(
                    material_description = %record.material_description,
                    row = record.row_number,
                    "UPP 主数据存在重复物料描述,取首条"
                );
                continue;
            }
            upp_index.insert(key, record.upp);
        }

        // 分组求和,按首次出现顺序暂存
        type GroupKey = (String, String, StorageArea, StockCategory);
        let mut order: Vec<GroupKey> = Vec::new();
        let mut groups: HashMap<GroupKey, f64> = HashMap::new();

        for record in normalized {
            let key = (
                record.material_id.clone(),
                record.material_description.clone(),
                record.storage_area,
                record.category,
            );

            match groups.get_mut(&key) {
                Some(sum) => *sum += record.case_qty.unwrap_or(0.0),
                None => {
                    groups.insert(key.clone(), record.case_qty.unwrap_or(0.0));
                    order.push(key);
                }
            }
        }

        // 构建台账行(左连接: 未匹配描述时 UPP 缺失)
        let mut ledger: Vec<LedgerEntry> = Vec::with_capacity(order.len());
        for key in order {
            let case_qty = groups[&key];
            let (material_id, material_description, storage_area, category) = key;

            let upp = upp_index
                .get(material_description.as_str())
                .copied()
                .flatten();

            ledger.push(LedgerEntry {
                material_id,
                material_description,
                storage_area,
                category,
                case_qty,
                upp,
            });
        }

        // 确定性排序: 物料号 → 库区名(字典序) → 类别
        ledger.sort_by(|a, b| {
            a.material_id
                .cmp(&b.material_id)
                .then_with(|| a.storage_area.as_str().cmp(b.storage_area.as_str()))
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });

        debug!(ledger_rows = ledger.len(), "库存汇总完成");

        ledger
    }
}

impl Default for StockAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{StockCategory, StorageArea};

    fn normalized(
        material_id: &str,
        area: StorageArea,
        category: StockCategory,
        case_qty: Option<f64>,
    ) -> NormalizedStockRecord {
        NormalizedStockRecord {
            material_id: material_id.to_string(),
            material_description: format!("DESC {}", material_id),
            storage_bin: "BIN".to_string(),
            stock_type: "Z0A".to_string(),
            storage_area: area,
            category,
            case_qty,
        }
    }

    fn master(description: &str, upp: Option<f64>) -> MasterRecord {
        MasterRecord {
            material_description: description.to_string(),
            upp,
            row_number: 2,
        }
    }

    #[test]
    fn test_aggregate_sums_per_group() {
        let aggregator = StockAggregator::new();
        let rows = vec![
            normalized("M1", StorageArea::Tas, StockCategory::Normal, Some(10.0)),
            normalized("M1", StorageArea::Tas, StockCategory::Normal, Some(15.0)),
            normalized("M1", StorageArea::Argo, StockCategory::Normal, Some(5.0)),
        ];

        let ledger = aggregator.aggregate(&rows, &[master("DESC M1", Some(10.0))]);

        assert_eq!(ledger.len(), 2);
        // 排序后 ARGO 在前
        assert_eq!(ledger[0].storage_area, StorageArea::Argo);
        assert_eq!(ledger[0].case_qty, 5.0);
        assert_eq!(ledger[1].storage_area, StorageArea::Tas);
        assert_eq!(ledger[1].case_qty, 25.0);
    }

    #[test]
    fn test_aggregate_missing_qty_counts_as_zero() {
        let aggregator = StockAggregator::new();
        let rows = vec![
            normalized("M1", StorageArea::Tas, StockCategory::Normal, None),
            normalized("M1", StorageArea::Tas, StockCategory::Normal, Some(7.0)),
        ];

        let ledger = aggregator.aggregate(&rows, &[]);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].case_qty, 7.0);
    }

    #[test]
    fn test_aggregate_all_missing_group_is_zero() {
        let aggregator = StockAggregator::new();
        let rows = vec![normalized("M1", StorageArea::Tas, StockCategory::Normal, None)];

        let ledger = aggregator.aggregate(&rows, &[]);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].case_qty, 0.0);
    }

    #[test]
    fn test_aggregate_left_join_keeps_unmatched() {
        let aggregator = StockAggregator::new();
        let rows = vec![normalized("M1", StorageArea::Argo, StockCategory::Normal, Some(3.0))];

        // 主数据无匹配描述,行保留且 UPP 缺失
        let ledger = aggregator.aggregate(&rows, &[master("OTHER DESC", Some(8.0))]);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].upp, None);
    }

    #[test]
    fn test_aggregate_argo_sorts_before_bakti() {
        let aggregator = StockAggregator::new();
        let rows = vec![
            normalized("M1", StorageArea::Bakti, StockCategory::Normal, Some(1.0)),
            normalized("M1", StorageArea::Argo, StockCategory::Normal, Some(2.0)),
        ];

        let ledger = aggregator.aggregate(&rows, &[]);

        assert_eq!(ledger[0].storage_area, StorageArea::Argo);
        assert_eq!(ledger[1].storage_area, StorageArea::Bakti);
    }

    #[test]
    fn test_aggregate_duplicate_master_takes_first() {
        let aggregator = StockAggregator::new();
        let rows = vec![normalized("M1", StorageArea::Tas, StockCategory::Normal, Some(1.0))];

        let ledger = aggregator.aggregate(
            &rows,
            &[master("DESC M1", Some(10.0)), master("DESC M1", Some(99.0))],
        );

        assert_eq!(ledger[0].upp, Some(10.0));
    }
}
