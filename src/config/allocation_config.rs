// ==========================================
// 提前补货计划系统 - 分配配置
// ==========================================
// 职责: 库区前缀规则 / 库存类型准入集合 的集中管理
// 存储: JSON 配置文件(可选),缺省使用生产默认值
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::types::StorageArea;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ==========================================
// BinPrefixRule - 储位前缀规则
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinPrefixRule {
    /// 储位编码前缀(区分大小写)
    pub prefix: String,

    /// 命中该前缀时归属的库区
    pub storage_area: StorageArea,
}

// ==========================================
// AllocationConfig - 分配配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// 储位前缀 → 库区规则,按声明顺序匹配
    pub bin_prefix_rules: Vec<BinPrefixRule>,

    /// 未命中任何前缀时的默认库区
    pub default_storage_area: StorageArea,

    /// 准入的库存类型(S. Type)集合
    pub eligible_stock_types: Vec<String>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            bin_prefix_rules: vec![
                BinPrefixRule {
                    prefix: "BKT".to_string(),
                    storage_area: StorageArea::Bakti,
                },
                BinPrefixRule {
                    prefix: "ARG".to_string(),
                    storage_area: StorageArea::Argo,
                },
            ],
            default_storage_area: StorageArea::Tas,
            eligible_stock_types: vec![
                "Z0A".to_string(),
                "Z0C".to_string(),
                "ZBF".to_string(),
                "ZFR".to_string(),
            ],
        }
    }
}

impl AllocationConfig {
    /// 从 JSON 配置文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(path.display().to_string(), e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e.to_string()))
    }

    /// 按储位编码前缀推导库区
    pub fn classify_bin(&self, storage_bin: &str) -> StorageArea {
        for rule in &self.bin_prefix_rules {
            if storage_bin.starts_with(rule.prefix.as_str()) {
                return rule.storage_area;
            }
        }
        self.default_storage_area
    }

    /// 库存类型是否在准入集合内
    pub fn is_eligible_stock_type(&self, stock_type: &str) -> bool {
        self.eligible_stock_types
            .iter()
            .any(|t| t == stock_type.trim())
    }
}
