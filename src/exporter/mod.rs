// ==========================================
// 提前补货计划系统 - 导出层
// ==========================================
// 职责: 计算结果的 CSV 报表写出
// ==========================================

pub mod csv_writer;
pub mod error;

pub use csv_writer::{headers, CsvReportWriter};
pub use error::{ExportError, ExportResult};
