// ==========================================
// 提前补货计划系统 - 命令行入口
// ==========================================
// 用法:
//   early-replenishment <输入工作簿.xlsx> [输出目录] [配置.json]
//
// 输入: 单个 Excel 工作簿,含 Shipments / Stock / Master 三个工作表
// 输出: replenishment_plan.csv / updated_stock.csv /
//       post_allocation_ledger.csv
// ==========================================

use anyhow::{bail, Context, Result};
use early_replenishment::config::AllocationConfig;
use early_replenishment::engine::ReplenishmentOrchestrator;
use early_replenishment::exporter::CsvReportWriter;
use early_replenishment::importer::InputLoader;
use early_replenishment::logging;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    info!("==================================================");
    info!("{} v{}", early_replenishment::APP_NAME, early_replenishment::VERSION);
    info!("==================================================");

    let mut args = std::env::args().skip(1);
    let input_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!("用法: early-replenishment <输入工作簿.xlsx> [输出目录] [配置.json]"),
    };
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let config_path = args.next().map(PathBuf::from);

    // 加载配置(缺省使用生产默认值)
    let config = match config_path {
        Some(path) => AllocationConfig::from_json_file(&path)
            .with_context(|| format!("加载配置文件失败: {}", path.display()))?,
        None => AllocationConfig::default(),
    };

    // 装载输入工作簿
    info!(input = %input_path.display(), "装载输入工作簿");
    let loader = InputLoader::new();
    let input = loader
        .load_workbook(&input_path)
        .with_context(|| format!("装载输入工作簿失败: {}", input_path.display()))?;

    // 执行补货计算
    let orchestrator = ReplenishmentOrchestrator::new();
    let result = orchestrator
        .execute(input.shipments, input.stock, input.master, &config)
        .context("补货计算失败,本次运行不输出计划")?;

    // 缺口明细告警
    for fulfillment in result.fulfillments.iter().filter(|f| f.has_shortfall()) {
        warn!(
            material_id = %fulfillment.material_id,
            row = fulfillment.row_number,
            required = fulfillment.required_qty,
            unmet = fulfillment.unmet_qty,
            level = %fulfillment.level,
            "需求存在缺口"
        );
    }

    if result.plan.is_empty() {
        info!("无需补货");
    }

    // 写出三张报表
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("创建输出目录失败: {}", output_dir.display()))?;

    let writer = CsvReportWriter::new();
    writer
        .write_plan(output_dir.join("replenishment_plan.csv"), &result.plan)
        .context("写出补货计划失败")?;
    writer
        .write_updated_stock(
            output_dir.join("updated_stock.csv"),
            &result.normalized_stock,
        )
        .context("写出更新后库存失败")?;
    writer
        .write_ledger(
            output_dir.join("post_allocation_ledger.csv"),
            &result.ledger,
        )
        .context("写出分配后台账失败")?;

    let summary = &result.summary;
    info!(
        run_id = %summary.run_id,
        demands = summary.demand_count,
        movements = summary.movement_count,
        plan_rows = summary.plan_row_count,
        shortfalls = summary.shortfall_count,
        "运行完成"
    );

    Ok(())
}
