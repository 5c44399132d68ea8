// ==========================================
// 提前补货计划系统 - 字段映射器
// ==========================================
// 职责: 源列名 → 领域记录映射 + 数值降级
// 规则: 数量列非数值不报错,降级为缺失(后续求和按 0 处理)
// 红线: 源列名区分大小写与空格,不做模糊匹配
// ==========================================

use crate::domain::shipment::ShipmentDemand;
use crate::domain::stock::{MasterRecord, RawStockRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use tracing::warn;

// ==========================================
// 源表列名常量
// ==========================================
pub mod columns {
    // Shipments 表
    pub const MATERIAL: &str = "Material";
    pub const DELIVERY_QTY: &str = "Delivery quantity";

    // Stock 表
    pub const MATERIAL_DESCRIPTION: &str = "Material Description";
    pub const STORAGE_BIN: &str = "S. Bin";
    pub const STOCK_CATEGORY: &str = "S. Cat";
    pub const STOCK_TYPE: &str = "S. Type";
    pub const CASE_QTY: &str = "Case Qty";

    // Master 表
    pub const UPP: &str = "UPP";
}

pub struct FieldMapper;

impl FieldMapper {
    /// 校验表中出现过所有必需列(空表不校验)
    pub fn ensure_columns(
        &self,
        rows: &[RawRow],
        table: &str,
        required: &[&str],
    ) -> ImportResult<()> {
        if rows.is_empty() {
            return Ok(());
        }

        for column in required {
            let present = rows.iter().any(|row| row.contains_key(*column));
            if !present {
                return Err(ImportError::ColumnMissing {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }

        Ok(())
    }

    /// 映射发运需求行
    ///
    /// 需求数量非数值按 0 处理并告警(数据质量降级,不中断运行)
    pub fn map_shipment(&self, row: &RawRow, row_number: usize) -> ShipmentDemand {
        let material_id = self.get_string(row, columns::MATERIAL);
        let delivery_qty = match self.parse_qty(row, columns::DELIVERY_QTY) {
            Some(v) => v,
            None => {
                warn!(
                    row = row_number,
                    material_id = %material_id,
                    "发运需求数量缺失或非数值,按 0 处理"
                );
                0.0
            }
        };

        ShipmentDemand {
            material_id,
            delivery_qty,
            row_number,
        }
    }

    /// 映射原始库存行
    ///
    /// S. Cat 缺失归一化为空串;Case Qty 非数值降级为缺失
    pub fn map_stock(&self, row: &RawRow, row_number: usize) -> RawStockRecord {
        RawStockRecord {
            material_id: self.get_string(row, columns::MATERIAL),
            material_description: self.get_string(row, columns::MATERIAL_DESCRIPTION),
            storage_bin: self.get_string(row, columns::STORAGE_BIN),
            category_src: self.get_string(row, columns::STOCK_CATEGORY),
            stock_type: self.get_string(row, columns::STOCK_TYPE),
            case_qty: self.parse_qty(row, columns::CASE_QTY),
            row_number,
        }
    }

    /// 映射 UPP 主数据行
    pub fn map_master(&self, row: &RawRow, row_number: usize) -> MasterRecord {
        MasterRecord {
            material_description: self.get_string(row, columns::MATERIAL_DESCRIPTION),
            upp: self.parse_qty(row, columns::UPP),
            row_number,
        }
    }

    /// 提取字符串字段,缺失按空串处理
    fn get_string(&self, row: &RawRow, key: &str) -> String {
        row.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// 解析数量字段,非数值/缺失 → None
    fn parse_qty(&self, row: &RawRow, key: &str) -> Option<f64> {
        let value = self.get_string(row, key);
        if value.is_empty() {
            return None;
        }
        value.parse::<f64>().ok()
    }
}
