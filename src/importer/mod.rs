// ==========================================
// 提前补货计划系统 - 导入层
// ==========================================
// 职责: 外部表格数据接入(Excel / CSV)与字段映射
// 红线: 数量列非数值不中断运行,降级为缺失;结构性缺列才报错
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod workbook;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::{columns, FieldMapper};
pub use file_parser::{CsvParser, ExcelParser, RawRow};
pub use workbook::{sheets, InputLoader, ReplenishmentInput};
