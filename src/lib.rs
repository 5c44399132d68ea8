// ==========================================
// 提前补货计划系统 - 核心库
// ==========================================
// 系统定位: 仓库补货决策支持(单次运行、确定性计算)
// 核心: 按优先级贪心消耗库存,满足发运需求,
//       输出跨库补货计划与残余库存
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - 报表写出
pub mod exporter;

// 配置层 - 分配规则配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FulfillmentLevel, StockCategory, StorageArea};

// 领域实体
pub use domain::{
    pallet_qty, LedgerEntry, MasterRecord, MovementRecord, NormalizedStockRecord, PlanRow,
    RawStockRecord, RunSummary, ShipmentDemand, ShipmentFulfillment,
};

// 引擎
pub use engine::{
    DemandFulfiller, PlanSummarizer, ReplenishmentOrchestrator, ReplenishmentResult,
    StockAggregator, StockNormalizer,
};

// 导入 / 导出
pub use exporter::CsvReportWriter;
pub use importer::{InputLoader, ReplenishmentInput};

// 配置
pub use config::AllocationConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "提前补货计划系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
