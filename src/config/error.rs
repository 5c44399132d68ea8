// ==========================================
// 提前补货计划系统 - 配置模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置模块错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}: {1}")]
    FileReadError(String, String),

    #[error("配置文件解析失败: {0}: {1}")]
    ParseError(String, String),
}
