// ==========================================
// 提前补货计划系统 - 补货计划实体
// ==========================================
// 职责: 跨库移动记录 / 汇总计划行 / 运行摘要
// 红线: 移动记录一经产生不可变更,汇总阶段只做分组求和
// ==========================================

use crate::domain::types::{StockCategory, StorageArea};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 托盘数换算: ceil(箱数 / UPP × 100) / 100
///
/// 即向上取整到小数点后两位托盘;调用方负责保证 upp > 0
pub fn pallet_qty(case_qty: f64, upp: f64) -> f64 {
    (case_qty / upp * 100.0).ceil() / 100.0
}

// ==========================================
// MovementRecord - 跨库移动记录
// ==========================================
// 一条记录对应一次"从某外部库区/隔离库存调拨若干箱"的分配事件
// 厂内(TAS 正常)消耗不产生移动记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRecord {
    /// 来源库区
    pub storage_area: StorageArea,

    pub material_id: String,
    pub material_description: String,
    pub category: StockCategory,

    /// 调拨箱数
    pub case_qty: f64,

    /// 调拨托盘数(已按两位小数向上取整)
    pub pallet_qty: f64,
}

// ==========================================
// PlanRow - 补货计划汇总行
// ==========================================
// 键 = (库区, 物料号, 物料描述, 类别)
// 托盘数为各笔已取整托盘数之和,不按汇总箱数重新换算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRow {
    pub storage_area: StorageArea,
    pub material_id: String,
    pub material_description: String,
    pub category: StockCategory,

    /// 补货箱数合计
    pub box_qty: f64,

    /// 补货托盘数合计
    pub pallet_qty: f64,
}

// ==========================================
// RunSummary - 运行摘要
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// 运行批次号
    pub run_id: Uuid,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// 处理的需求行数
    pub demand_count: usize,

    /// 产生的移动记录数(汇总前)
    pub movement_count: usize,

    /// 汇总后计划行数
    pub plan_row_count: usize,

    /// 存在缺口的需求行数
    pub shortfall_count: usize,
}
