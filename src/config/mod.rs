// ==========================================
// 提前补货计划系统 - 配置层
// ==========================================
// 职责: 分配规则配置管理;缺省值即生产值,配置文件仅做覆写
// ==========================================

pub mod allocation_config;
pub mod error;

pub use allocation_config::{AllocationConfig, BinPrefixRule};
pub use error::ConfigError;
