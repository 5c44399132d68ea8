// ==========================================
// 提前补货计划系统 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("输出文件写入失败: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV 写出失败: {0}")]
    CsvError(#[from] csv::Error),
}

/// 导出模块统一 Result 别名
pub type ExportResult<T> = Result<T, ExportError>;
