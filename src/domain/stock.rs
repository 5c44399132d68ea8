// ==========================================
// 提前补货计划系统 - 库存领域实体
// ==========================================
// 职责: 原始库存行 / 归一化库存行 / 汇总台账行 / UPP 主数据
// 生命周期: 原始行 → 归一化 → 汇总后丢弃;台账贯穿整个运行
// ==========================================

use crate::domain::types::{StockCategory, StorageArea};
use serde::{Deserialize, Serialize};

// ==========================================
// RawStockRecord - 原始库存行
// ==========================================
// 来源: Stock 表,一行对应一个储位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStockRecord {
    /// 物料号
    pub material_id: String,

    /// 物料描述(UPP 主数据的连接键)
    pub material_description: String,

    /// 储位编码(S. Bin)
    pub storage_bin: String,

    /// 库存类别源值(S. Cat,自由文本,缺失归一化为空串)
    pub category_src: String,

    /// 库存类型(S. Type)
    pub stock_type: String,

    /// 箱数(Case Qty);非数值源数据在导入时降级为缺失
    pub case_qty: Option<f64>,

    /// 源文件行号(从 1 开始,用于诊断)
    pub row_number: usize,
}

// ==========================================
// NormalizedStockRecord - 归一化库存行
// ==========================================
// Normalizer 输出: 已推导库区、已解析类别、已通过准入过滤
// 该表同时作为"更新后库存"输出(过滤后、分配前快照)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedStockRecord {
    pub material_id: String,
    pub material_description: String,
    pub storage_bin: String,
    pub stock_type: String,
    pub storage_area: StorageArea,
    pub category: StockCategory,
    pub case_qty: Option<f64>,
}

// ==========================================
// MasterRecord - UPP 主数据行
// ==========================================
// 每箱/托盘换算系数,按物料描述关联(非物料号)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterRecord {
    pub material_description: String,

    /// 每托盘箱数;非数值源数据降级为缺失,
    /// 仅在产生跨库移动时才构成致命错误
    pub upp: Option<f64>,

    pub row_number: usize,
}

// ==========================================
// LedgerEntry - 汇总台账行
// ==========================================
// 键 = (物料号, 物料描述, 库区, 类别),值 = 汇总箱数
// 红线: 台账是全程唯一可变账本,由 Fulfiller 独占可变借用,
//       逐条需求顺序消耗,其余阶段只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub material_id: String,
    pub material_description: String,
    pub storage_area: StorageArea,
    pub category: StockCategory,

    /// 当前可用箱数,随分配就地递减
    pub case_qty: f64,

    /// UPP 换算系数(主数据左连接结果,未匹配时缺失)
    pub upp: Option<f64>,
}

impl LedgerEntry {
    /// 是否仍有可用库存
    pub fn has_available(&self) -> bool {
        self.case_qty > 0.0
    }

    /// 是否属于指定物料
    pub fn is_material(&self, material_id: &str) -> bool {
        self.material_id == material_id
    }
}
