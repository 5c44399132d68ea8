// ==========================================
// 引擎间集成测试
// ==========================================
// 职责: 验证 归一化 → 汇总 → 履约 → 计划汇总 全链路
// ==========================================

use early_replenishment::config::AllocationConfig;
use early_replenishment::domain::shipment::ShipmentDemand;
use early_replenishment::domain::stock::{MasterRecord, RawStockRecord};
use early_replenishment::domain::types::{FulfillmentLevel, StockCategory, StorageArea};
use early_replenishment::engine::error::EngineError;
use early_replenishment::engine::ReplenishmentOrchestrator;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用原始库存行
fn raw_stock(
    material_id: &str,
    description: &str,
    bin: &str,
    category: &str,
    stock_type: &str,
    case_qty: Option<f64>,
) -> RawStockRecord {
    RawStockRecord {
        material_id: material_id.to_string(),
        material_description: description.to_string(),
        storage_bin: bin.to_string(),
        category_src: category.to_string(),
        stock_type: stock_type.to_string(),
        case_qty,
        row_number: 2,
    }
}

/// 创建测试用 UPP 主数据行
fn master(description: &str, upp: Option<f64>) -> MasterRecord {
    MasterRecord {
        material_description: description.to_string(),
        upp,
        row_number: 2,
    }
}

/// 创建测试用发运需求
fn demand(material_id: &str, qty: f64, row_number: usize) -> ShipmentDemand {
    ShipmentDemand {
        material_id: material_id.to_string(),
        delivery_qty: qty,
        row_number,
    }
}

// ==========================================
// 全链路场景
// ==========================================

#[test]
fn test_full_pipeline_in_plant_only() {
    early_replenishment::logging::init_test();

    // 厂内足量: 计划为空,台账反映消耗,归一化库存保持分配前快照
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(
            vec![demand("M1", 100.0, 2)],
            vec![raw_stock("M1", "PRODUCT A", "A1-01", "", "Z0A", Some(150.0))],
            vec![master("PRODUCT A", Some(10.0))],
            &config,
        )
        .unwrap();

    assert!(result.plan.is_empty());
    assert!(result.movements.is_empty());

    // 归一化库存是分配前快照,数量不变
    assert_eq!(result.normalized_stock.len(), 1);
    assert_eq!(result.normalized_stock[0].case_qty, Some(150.0));

    // 分配后台账反映真实残余
    assert_eq!(result.ledger.len(), 1);
    assert_eq!(result.ledger[0].case_qty, 50.0);

    assert_eq!(result.summary.shortfall_count, 0);
    assert_eq!(result.summary.demand_count, 1);
}

#[test]
fn test_full_pipeline_two_tier_consumption_with_shortfall() {
    // 需求 100: TAS 20 + ARGO 50 (UPP 10),缺口 30
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(
            vec![demand("M1", 100.0, 2)],
            vec![
                raw_stock("M1", "PRODUCT A", "A1-01", "", "Z0A", Some(20.0)),
                raw_stock("M1", "PRODUCT A", "ARG-01", "", "Z0C", Some(50.0)),
            ],
            vec![master("PRODUCT A", Some(10.0))],
            &config,
        )
        .unwrap();

    assert_eq!(result.plan.len(), 1);
    let plan_row = &result.plan[0];
    assert_eq!(plan_row.storage_area, StorageArea::Argo);
    assert_eq!(plan_row.box_qty, 50.0);
    assert_eq!(plan_row.pallet_qty, 5.0);

    let fulfillment = &result.fulfillments[0];
    assert_eq!(fulfillment.level, FulfillmentLevel::Partial);
    assert_eq!(fulfillment.unmet_qty, 30.0);
    assert_eq!(result.summary.shortfall_count, 1);
}

#[test]
fn test_pipeline_filters_ineligible_rows_from_output() {
    // 类别/类型不准入的行既不参与分配,也不出现在输出库存表
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(
            Vec::new(),
            vec![
                raw_stock("M1", "PRODUCT A", "A1-01", "", "Z0A", Some(10.0)),
                raw_stock("M1", "PRODUCT A", "A1-02", "B", "Z0A", Some(99.0)), // 类别不准入
                raw_stock("M1", "PRODUCT A", "A1-03", "", "Z9X", Some(99.0)), // 类型不准入
            ],
            vec![master("PRODUCT A", Some(10.0))],
            &config,
        )
        .unwrap();

    assert_eq!(result.normalized_stock.len(), 1);
    assert_eq!(result.normalized_stock[0].storage_bin, "A1-01");
    assert_eq!(result.ledger.len(), 1);
}

#[test]
fn test_pipeline_aggregates_bins_and_dedups_plan() {
    // 同库区多储位合并为一条台账行;两条需求拉动同一外仓行,
    // 计划汇总为一行
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(
            vec![demand("M1", 30.0, 2), demand("M1", 20.0, 3)],
            vec![
                raw_stock("M1", "PRODUCT A", "BKT-01", "", "Z0A", Some(40.0)),
                raw_stock("M1", "PRODUCT A", "BKT-02", "", "Z0A", Some(60.0)),
            ],
            vec![master("PRODUCT A", Some(10.0))],
            &config,
        )
        .unwrap();

    // 台账: BAKTI 一行 100 箱
    assert_eq!(result.ledger.len(), 1);
    assert_eq!(result.ledger[0].storage_area, StorageArea::Bakti);
    assert_eq!(result.ledger[0].case_qty, 50.0); // 100 - 30 - 20

    // 移动两笔,计划汇总一行
    assert_eq!(result.movements.len(), 2);
    assert_eq!(result.plan.len(), 1);
    assert_eq!(result.plan[0].box_qty, 50.0);
    assert_eq!(result.plan[0].pallet_qty, 5.0); // 3.0 + 2.0
}

#[test]
fn test_pipeline_quarantine_fallback_ascending() {
    // 外仓正常库存耗尽后,隔离库存按小批次优先
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(
            vec![demand("M1", 50.0, 2)],
            vec![
                raw_stock("M1", "PRODUCT A", "ARG-01", "", "Z0A", Some(20.0)),
                raw_stock("M1", "PRODUCT A", "BKT-01", "Q", "ZBF", Some(25.0)),
                raw_stock("M1", "PRODUCT A", "ARG-02", "Q", "ZFR", Some(5.0)),
            ],
            vec![master("PRODUCT A", Some(10.0))],
            &config,
        )
        .unwrap();

    // 移动: ARGO 正常 20 → ARGO 隔离 5 → BAKTI 隔离 25
    assert_eq!(result.movements.len(), 3);
    assert_eq!(result.movements[0].category, StockCategory::Normal);
    assert_eq!(result.movements[0].case_qty, 20.0);
    assert_eq!(result.movements[1].category, StockCategory::Quarantine);
    assert_eq!(result.movements[1].case_qty, 5.0);
    assert_eq!(result.movements[2].case_qty, 25.0);

    assert_eq!(result.fulfillments[0].level, FulfillmentLevel::Full);
}

#[test]
fn test_pipeline_missing_upp_fails_whole_run() {
    // 需要跨库移动但 UPP 主数据未匹配 → 整体失败,无部分计划
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator.execute(
        vec![demand("M1", 50.0, 2)],
        vec![raw_stock("M1", "PRODUCT A", "ARG-01", "", "Z0A", Some(80.0))],
        vec![master("OTHER PRODUCT", Some(10.0))], // 描述不匹配 → UPP 缺失
        &config,
    );

    assert!(matches!(
        result,
        Err(EngineError::MissingConversionFactor { .. })
    ));
}

#[test]
fn test_pipeline_non_numeric_qty_counts_as_zero() {
    // 非数值数量在导入端降级为缺失,汇总按 0 计
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(
            vec![demand("M1", 10.0, 2)],
            vec![
                raw_stock("M1", "PRODUCT A", "A1-01", "", "Z0A", None),
                raw_stock("M1", "PRODUCT A", "A1-02", "", "Z0A", Some(4.0)),
            ],
            vec![master("PRODUCT A", Some(10.0))],
            &config,
        )
        .unwrap();

    // TAS 合计 4,部分满足
    assert_eq!(result.fulfillments[0].fulfilled_qty, 4.0);
    assert_eq!(result.fulfillments[0].level, FulfillmentLevel::Partial);
    assert_eq!(result.summary.shortfall_count, 1);
}

#[test]
fn test_pipeline_demands_processed_in_input_order() {
    // 先到先得: 行序在前的需求优先拿到厂内库存
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(
            vec![demand("M1", 60.0, 2), demand("M1", 60.0, 3)],
            vec![
                raw_stock("M1", "PRODUCT A", "A1-01", "", "Z0A", Some(60.0)),
                raw_stock("M1", "PRODUCT A", "ARG-01", "", "Z0A", Some(30.0)),
            ],
            vec![master("PRODUCT A", Some(10.0))],
            &config,
        )
        .unwrap();

    // 第一条全部由厂内满足;第二条只能调拨 ARGO 30,缺口 30
    assert_eq!(result.fulfillments[0].level, FulfillmentLevel::Full);
    assert_eq!(result.fulfillments[1].level, FulfillmentLevel::Partial);
    assert_eq!(result.fulfillments[1].unmet_qty, 30.0);

    assert_eq!(result.plan.len(), 1);
    assert_eq!(result.plan[0].box_qty, 30.0);
}

#[test]
fn test_pipeline_empty_inputs() {
    let orchestrator = ReplenishmentOrchestrator::new();
    let config = AllocationConfig::default();

    let result = orchestrator
        .execute(Vec::new(), Vec::new(), Vec::new(), &config)
        .unwrap();

    assert!(result.plan.is_empty());
    assert!(result.normalized_stock.is_empty());
    assert!(result.ledger.is_empty());
    assert_eq!(result.summary.demand_count, 0);
}
