// ==========================================
// 提前补货计划系统 - 引擎编排器
// ==========================================
// 用途: 协调四个核心引擎的执行顺序
// 流程: 归一化 → 汇总 → 履约 → 计划汇总
// 红线: 全程单线程顺序执行,需求循环不可并行化
//       (后续需求依赖前序需求留下的台账状态)
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::plan::{MovementRecord, PlanRow, RunSummary};
use crate::domain::shipment::{ShipmentDemand, ShipmentFulfillment};
use crate::domain::stock::{LedgerEntry, MasterRecord, NormalizedStockRecord, RawStockRecord};
use crate::engine::aggregator::StockAggregator;
use crate::engine::error::EngineResult;
use crate::engine::fulfiller::DemandFulfiller;
use crate::engine::normalizer::StockNormalizer;
use crate::engine::summarizer::PlanSummarizer;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// ReplenishmentResult - 一次运行的全部输出
// ==========================================
#[derive(Debug, Clone)]
pub struct ReplenishmentResult {
    /// 最终补货计划(汇总后)
    pub plan: Vec<PlanRow>,

    /// 归一化库存表(过滤后、分配前快照,兼容输出)
    pub normalized_stock: Vec<NormalizedStockRecord>,

    /// 分配后台账(真实残余库存)
    pub ledger: Vec<LedgerEntry>,

    /// 移动记录明细(汇总前)
    pub movements: Vec<MovementRecord>,

    /// 逐需求满足状态
    pub fulfillments: Vec<ShipmentFulfillment>,

    /// 运行摘要
    pub summary: RunSummary,
}

// ==========================================
// ReplenishmentOrchestrator - 引擎编排器
// ==========================================
pub struct ReplenishmentOrchestrator {
    normalizer: StockNormalizer,
    aggregator: StockAggregator,
    fulfiller: DemandFulfiller,
    summarizer: PlanSummarizer,
}

impl ReplenishmentOrchestrator {
    pub fn new() -> Self {
        Self {
            normalizer: StockNormalizer::new(),
            aggregator: StockAggregator::new(),
            fulfiller: DemandFulfiller::new(),
            summarizer: PlanSummarizer::new(),
        }
    }

    /// 执行完整补货计算流程
    ///
    /// 任一跨库移动遇到 UPP 缺失即整体失败,不输出部分计划
    pub fn execute(
        &self,
        shipments: Vec<ShipmentDemand>,
        stock: Vec<RawStockRecord>,
        master: Vec<MasterRecord>,
        config: &AllocationConfig,
    ) -> EngineResult<ReplenishmentResult> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        info!(
            %run_id,
            shipments = shipments.len(),
            stock_rows = stock.len(),
            master_rows = master.len(),
            "开始执行补货计算流程"
        );

        // ==========================================
        // 步骤1: Normalizer - 归一化与准入过滤
        // ==========================================
        debug!("步骤1: 执行库存归一化");

        let normalized_stock = self.normalizer.normalize(stock, config);

        info!(
            normalized_count = normalized_stock.len(),
            "库存归一化完成"
        );

        // ==========================================
        // 步骤2: Aggregator - 汇总台账构建
        // ==========================================
        debug!("步骤2: 构建汇总台账");

        let mut ledger = self.aggregator.aggregate(&normalized_stock, &master);

        info!(ledger_rows = ledger.len(), "汇总台账构建完成");

        // ==========================================
        // 步骤3: Fulfiller - 逐需求履约
        // ==========================================
        debug!("步骤3: 执行需求履约");

        let outcome = self.fulfiller.fulfill(&mut ledger, &shipments)?;

        let shortfall_count = outcome
            .fulfillments
            .iter()
            .filter(|f| f.has_shortfall())
            .count();

        info!(
            movement_count = outcome.movements.len(),
            shortfall_count,
            "需求履约完成"
        );

        // ==========================================
        // 步骤4: Summarizer - 计划汇总
        // ==========================================
        debug!("步骤4: 汇总补货计划");

        let plan = self.summarizer.summarize(&outcome.movements);

        info!(plan_rows = plan.len(), "补货计划汇总完成");

        // ==========================================
        // 返回结果
        // ==========================================
        let finished_at = Utc::now();
        let summary = RunSummary {
            run_id,
            started_at,
            finished_at,
            demand_count: shipments.len(),
            movement_count: outcome.movements.len(),
            plan_row_count: plan.len(),
            shortfall_count,
        };

        Ok(ReplenishmentResult {
            plan,
            normalized_stock,
            ledger,
            movements: outcome.movements,
            fulfillments: outcome.fulfillments,
            summary,
        })
    }
}

impl Default for ReplenishmentOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
