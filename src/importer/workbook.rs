// ==========================================
// 提前补货计划系统 - 输入数据装载器
// ==========================================
// 职责: 三张输入表(Shipments / Stock / Master)的整体装载
// 支持: 单个 Excel 工作簿(三个工作表) / 三个独立 CSV 文件
// ==========================================

use crate::domain::shipment::ShipmentDemand;
use crate::domain::stock::{MasterRecord, RawStockRecord};
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{columns, FieldMapper};
use crate::importer::file_parser::{CsvParser, ExcelParser, RawRow};
use std::path::Path;
use tracing::info;

// ==========================================
// 工作表名常量
// ==========================================
pub mod sheets {
    pub const SHIPMENTS: &str = "Shipments";
    pub const STOCK: &str = "Stock";
    pub const MASTER: &str = "Master";
}

// ==========================================
// ReplenishmentInput - 一次运行的全部输入
// ==========================================
#[derive(Debug, Clone)]
pub struct ReplenishmentInput {
    pub shipments: Vec<ShipmentDemand>,
    pub stock: Vec<RawStockRecord>,
    pub master: Vec<MasterRecord>,
}

// ==========================================
// InputLoader - 输入装载器
// ==========================================
pub struct InputLoader {
    mapper: FieldMapper,
}

impl InputLoader {
    pub fn new() -> Self {
        Self {
            mapper: FieldMapper,
        }
    }

    /// 从单个 Excel 工作簿装载(工作表: Shipments / Stock / Master)
    pub fn load_workbook<P: AsRef<Path>>(&self, path: P) -> ImportResult<ReplenishmentInput> {
        let path = path.as_ref();
        let parser = ExcelParser;

        let shipment_rows = parser.parse_sheet(path, sheets::SHIPMENTS)?;
        let stock_rows = parser.parse_sheet(path, sheets::STOCK)?;
        let master_rows = parser.parse_sheet(path, sheets::MASTER)?;

        self.build(shipment_rows, stock_rows, master_rows)
    }

    /// 从三个独立 CSV 文件装载
    pub fn load_csv_files<P: AsRef<Path>>(
        &self,
        shipments_path: P,
        stock_path: P,
        master_path: P,
    ) -> ImportResult<ReplenishmentInput> {
        let parser = CsvParser;

        let shipment_rows = parser.parse(shipments_path.as_ref())?;
        let stock_rows = parser.parse(stock_path.as_ref())?;
        let master_rows = parser.parse(master_path.as_ref())?;

        self.build(shipment_rows, stock_rows, master_rows)
    }

    /// 列校验 + 字段映射
    fn build(
        &self,
        shipment_rows: Vec<RawRow>,
        stock_rows: Vec<RawRow>,
        master_rows: Vec<RawRow>,
    ) -> ImportResult<ReplenishmentInput> {
        self.mapper.ensure_columns(
            &shipment_rows,
            sheets::SHIPMENTS,
            &[columns::MATERIAL, columns::DELIVERY_QTY],
        )?;
        self.mapper.ensure_columns(
            &stock_rows,
            sheets::STOCK,
            &[
                columns::MATERIAL,
                columns::MATERIAL_DESCRIPTION,
                columns::STORAGE_BIN,
                columns::STOCK_CATEGORY,
                columns::STOCK_TYPE,
                columns::CASE_QTY,
            ],
        )?;
        self.mapper.ensure_columns(
            &master_rows,
            sheets::MASTER,
            &[columns::MATERIAL_DESCRIPTION, columns::UPP],
        )?;

        // 行号从 2 起算(第 1 行为表头),与源文件行对应
        let shipments: Vec<ShipmentDemand> = shipment_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_shipment(row, idx + 2))
            .collect();

        let stock: Vec<RawStockRecord> = stock_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_stock(row, idx + 2))
            .collect();

        let master: Vec<MasterRecord> = master_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_master(row, idx + 2))
            .collect();

        info!(
            shipments = shipments.len(),
            stock_rows = stock.len(),
            master_rows = master.len(),
            "输入数据装载完成"
        );

        Ok(ReplenishmentInput {
            shipments,
            stock,
            master,
        })
    }
}

impl Default for InputLoader {
    fn default() -> Self {
        Self::new()
    }
}
