// ==========================================
// 提前补货计划系统 - 领域类型定义
// ==========================================
// 依据: 仓库补货业务规则 - 库区划分与库存类别
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 库区 (Storage Area)
// ==========================================
// 红线: 库区由储位编码前缀推导,不由人工指定
// BKT* → BAKTI 外仓, ARG* → ARGO 外仓, 其余 → TAS 厂内
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageArea {
    Tas,   // 厂内库区(就地消耗,不产生补货)
    Argo,  // ARGO 外部仓库
    Bakti, // BAKTI 外部仓库
}

impl StorageArea {
    /// 按储位编码前缀推导库区
    ///
    /// 前缀匹配区分大小写,非全字匹配
    pub fn from_bin(storage_bin: &str) -> Self {
        if storage_bin.starts_with("BKT") {
            StorageArea::Bakti
        } else if storage_bin.starts_with("ARG") {
            StorageArea::Argo
        } else {
            StorageArea::Tas
        }
    }

    /// 是否为外部仓库(补货来源)
    pub fn is_external(&self) -> bool {
        matches!(self, StorageArea::Argo | StorageArea::Bakti)
    }

    /// 报表输出用名称
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageArea::Tas => "TAS",
            StorageArea::Argo => "ARGO",
            StorageArea::Bakti => "BAKTI",
        }
    }
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 库存类别 (Stock Category / S. Cat)
// ==========================================
// 源数据为自由文本: 空白 = 正常库存, "Q" = 隔离库存
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockCategory {
    Normal,     // 正常库存(S. Cat 为空)
    Quarantine, // 隔离库存(S. Cat = "Q")
}

impl StockCategory {
    /// 从源字段解析库存类别
    ///
    /// 缺失/空白归一化为正常库存;其余取值不在准入范围内,返回 None
    pub fn from_source(value: &str) -> Option<Self> {
        match value.trim() {
            "" => Some(StockCategory::Normal),
            "Q" => Some(StockCategory::Quarantine),
            _ => None,
        }
    }

    /// 报表输出用字符串(与源数据列保持一致)
    pub fn as_str(&self) -> &'static str {
        match self {
            StockCategory::Normal => "",
            StockCategory::Quarantine => "Q",
        }
    }
}

impl fmt::Display for StockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 满足等级 (Fulfillment Level)
// ==========================================
// 发运需求经三层消耗后的终态;缺口不是错误,是正常终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentLevel {
    Full,    // 完全满足
    Partial, // 部分满足
    None,    // 完全未满足
}

impl fmt::Display for FulfillmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FulfillmentLevel::Full => write!(f, "FULL"),
            FulfillmentLevel::Partial => write!(f, "PARTIAL"),
            FulfillmentLevel::None => write!(f, "NONE"),
        }
    }
}
