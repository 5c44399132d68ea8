// ==========================================
// 提前补货计划系统 - 领域层
// ==========================================
// 职责: 实体与类型定义,不含业务规则与 I/O
// ==========================================

pub mod plan;
pub mod shipment;
pub mod stock;
pub mod types;

// 重导出核心实体
pub use plan::{pallet_qty, MovementRecord, PlanRow, RunSummary};
pub use shipment::{ShipmentDemand, ShipmentFulfillment};
pub use stock::{LedgerEntry, MasterRecord, NormalizedStockRecord, RawStockRecord};
pub use types::{FulfillmentLevel, StockCategory, StorageArea};
