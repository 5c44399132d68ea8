// ==========================================
// 提前补货计划系统 - CSV 报表写出器
// ==========================================
// 职责: 补货计划 / 更新后库存 / 分配后台账 三张输出表
// 红线: 计划表列名必须逐字符保持既有下游格式,
//       包括 "Material Descriptiion" 的历史拼写
// ==========================================

use crate::domain::plan::PlanRow;
use crate::domain::stock::{LedgerEntry, NormalizedStockRecord};
use crate::exporter::error::ExportResult;
use csv::WriterBuilder;
use std::path::Path;
use tracing::info;

// ==========================================
// 输出列名常量
// ==========================================
pub mod headers {
    /// 补货计划表(下游兼容格式,拼写不可修正)
    pub const PLAN: [&str; 6] = [
        "Storage Area",
        "Material",
        "Material Descriptiion",
        "S. Cat",
        "Replenishment Quantity (in Box)",
        "Replenishment Quantity (in Pallet)",
    ];

    /// 更新后库存表(归一化库存形状 + 推导库区列)
    pub const STOCK: [&str; 7] = [
        "Material",
        "Material Description",
        "S. Bin",
        "S. Cat",
        "S. Type",
        "Case Qty",
        "Storage Area",
    ];

    /// 分配后台账表
    pub const LEDGER: [&str; 6] = [
        "Material",
        "Material Description",
        "Storage Area",
        "S. Cat",
        "Case Qty",
        "UPP",
    ];
}

/// 数量格式化: 整值不带小数点,与源表格风格一致
fn fmt_qty(value: f64) -> String {
    format!("{}", value)
}

fn fmt_opt_qty(value: Option<f64>) -> String {
    value.map(fmt_qty).unwrap_or_default()
}

pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn new() -> Self {
        Self {}
    }

    /// 写出补货计划表
    pub fn write_plan<P: AsRef<Path>>(&self, path: P, plan: &[PlanRow]) -> ExportResult<()> {
        let path = path.as_ref();
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record(headers::PLAN)?;
        for row in plan {
            writer.write_record([
                row.storage_area.as_str(),
                row.material_id.as_str(),
                row.material_description.as_str(),
                row.category.as_str(),
                fmt_qty(row.box_qty).as_str(),
                fmt_qty(row.pallet_qty).as_str(),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = plan.len(), "补货计划已写出");
        Ok(())
    }

    /// 写出更新后库存表(过滤后、分配前快照)
    pub fn write_updated_stock<P: AsRef<Path>>(
        &self,
        path: P,
        stock: &[NormalizedStockRecord],
    ) -> ExportResult<()> {
        let path = path.as_ref();
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record(headers::STOCK)?;
        for record in stock {
            writer.write_record([
                record.material_id.as_str(),
                record.material_description.as_str(),
                record.storage_bin.as_str(),
                record.category.as_str(),
                record.stock_type.as_str(),
                fmt_opt_qty(record.case_qty).as_str(),
                record.storage_area.as_str(),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = stock.len(), "更新后库存已写出");
        Ok(())
    }

    /// 写出分配后台账表(真实残余库存)
    pub fn write_ledger<P: AsRef<Path>>(
        &self,
        path: P,
        ledger: &[LedgerEntry],
    ) -> ExportResult<()> {
        let path = path.as_ref();
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record(headers::LEDGER)?;
        for entry in ledger {
            writer.write_record([
                entry.material_id.as_str(),
                entry.material_description.as_str(),
                entry.storage_area.as_str(),
                entry.category.as_str(),
                fmt_qty(entry.case_qty).as_str(),
                fmt_opt_qty(entry.upp).as_str(),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = ledger.len(), "分配后台账已写出");
        Ok(())
    }
}

impl Default for CsvReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
