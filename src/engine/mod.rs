// ==========================================
// 提前补货计划系统 - 引擎层
// ==========================================
// 职责: 实现补货业务规则,不做 I/O
// 红线: 引擎无状态;台账由 Fulfiller 独占可变借用;
//       全流程确定性,同一输入必得同一输出
// ==========================================

pub mod aggregator;
pub mod error;
pub mod fulfiller;
pub mod normalizer;
pub mod orchestrator;
pub mod summarizer;

// 重导出核心引擎
pub use aggregator::StockAggregator;
pub use error::{EngineError, EngineResult};
pub use fulfiller::{DemandFulfiller, FulfillmentOutcome};
pub use normalizer::StockNormalizer;
pub use orchestrator::{ReplenishmentOrchestrator, ReplenishmentResult};
pub use summarizer::PlanSummarizer;
