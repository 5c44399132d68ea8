// ==========================================
// 提前补货计划系统 - 库存归一化引擎
// ==========================================
// 职责: 原始库存行的类别归一化、库区推导与准入过滤
// 输入: 原始库存行 + 分配配置
// 输出: 归一化库存表(同时作为"更新后库存"输出,分配前快照)
// 规则: 仅保留 类别 ∈ {空, Q} 且 类型 ∈ 准入集合 的行,
//       其余行永久剔除,不参与分配也不出现在输出库存表中
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::stock::{NormalizedStockRecord, RawStockRecord};
use crate::domain::types::StockCategory;
use tracing::{debug, instrument};

pub struct StockNormalizer;

impl StockNormalizer {
    pub fn new() -> Self {
        Self {}
    }

    /// 归一化并过滤原始库存表
    #[instrument(skip(self, raw_records, config), fields(raw_count = raw_records.len()))]
    pub fn normalize(
        &self,
        raw_records: Vec<RawStockRecord>,
        config: &AllocationConfig,
    ) -> Vec<NormalizedStockRecord> {
        let raw_count = raw_records.len();
        let mut normalized = Vec::with_capacity(raw_count);

        for record in raw_records {
            // 类别归一化: 缺失/空白 → 正常;Q → 隔离;其余剔除
            let category = match StockCategory::from_source(&record.category_src) {
                Some(c) => c,
                None => continue,
            };

            // 库存类型准入过滤
            if !config.is_eligible_stock_type(&record.stock_type) {
                continue;
            }

            // 库区推导(储位前缀)
            let storage_area = config.classify_bin(&record.storage_bin);

            normalized.push(NormalizedStockRecord {
                material_id: record.material_id,
                material_description: record.material_description,
                storage_bin: record.storage_bin,
                stock_type: record.stock_type,
                storage_area,
                category,
                case_qty: record.case_qty,
            });
        }

        debug!(
            raw_count,
            kept_count = normalized.len(),
            dropped_count = raw_count - normalized.len(),
            "库存归一化完成"
        );

        normalized
    }
}

impl Default for StockNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::StorageArea;

    fn raw(
        material_id: &str,
        bin: &str,
        category: &str,
        stock_type: &str,
        case_qty: Option<f64>,
    ) -> RawStockRecord {
        RawStockRecord {
            material_id: material_id.to_string(),
            material_description: format!("DESC {}", material_id),
            storage_bin: bin.to_string(),
            category_src: category.to_string(),
            stock_type: stock_type.to_string(),
            case_qty,
            row_number: 2,
        }
    }

    #[test]
    fn test_normalize_classifies_storage_area() {
        let normalizer = StockNormalizer::new();
        let config = AllocationConfig::default();

        let result = normalizer.normalize(
            vec![
                raw("M1", "BKT-01", "", "Z0A", Some(10.0)),
                raw("M1", "ARG-02", "", "Z0A", Some(20.0)),
                raw("M1", "A1-03", "", "Z0A", Some(30.0)),
            ],
            &config,
        );

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].storage_area, StorageArea::Bakti);
        assert_eq!(result[1].storage_area, StorageArea::Argo);
        assert_eq!(result[2].storage_area, StorageArea::Tas);
    }

    #[test]
    fn test_normalize_drops_foreign_category() {
        let normalizer = StockNormalizer::new();
        let config = AllocationConfig::default();

        let result = normalizer.normalize(
            vec![
                raw("M1", "A1", "", "Z0A", Some(10.0)),
                raw("M1", "A1", "Q", "Z0A", Some(10.0)),
                raw("M1", "A1", "B", "Z0A", Some(10.0)), // 类别 B 不准入
            ],
            &config,
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].category, StockCategory::Normal);
        assert_eq!(result[1].category, StockCategory::Quarantine);
    }

    #[test]
    fn test_normalize_drops_ineligible_stock_type() {
        let normalizer = StockNormalizer::new();
        let config = AllocationConfig::default();

        let result = normalizer.normalize(
            vec![
                raw("M1", "A1", "", "Z0A", Some(10.0)),
                raw("M1", "A1", "", "Z9X", Some(10.0)), // 类型不准入
            ],
            &config,
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].stock_type, "Z0A");
    }

    #[test]
    fn test_normalize_keeps_missing_qty_rows() {
        // 非数值数量降级为缺失,但行本身保留(求和时按 0)
        let normalizer = StockNormalizer::new();
        let config = AllocationConfig::default();

        let result = normalizer.normalize(vec![raw("M1", "A1", "", "Z0A", None)], &config);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].case_qty, None);
    }
}
