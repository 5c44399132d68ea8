// ==========================================
// 提前补货计划系统 - 需求履约引擎
// ==========================================
// 职责: 逐条发运需求按固定优先级消耗台账库存
// 消耗顺序: 第一层 厂内(TAS 正常) → 第二层 外仓正常(ARGO/BAKTI)
//           → 第三层 隔离库存(任意库区,按可用量升序)
// 红线: 需求严格按输入行序处理,后续需求看到的是前序需求
//       消耗后的台账;一箱一经分配不回溯、不再平衡
// 红线: 厂内消耗不产生移动记录(不是补货);跨库移动必须
//       换算托盘数,UPP 缺失即中止运行
// ==========================================

use crate::domain::plan::{pallet_qty, MovementRecord};
use crate::domain::shipment::{ShipmentDemand, ShipmentFulfillment};
use crate::domain::stock::LedgerEntry;
use crate::domain::types::{StockCategory, StorageArea};
use crate::engine::error::{EngineError, EngineResult};
use std::cmp::Ordering;
use tracing::{debug, instrument, warn};

// ==========================================
// FulfillmentOutcome - 履约结果
// ==========================================
#[derive(Debug, Clone)]
pub struct FulfillmentOutcome {
    /// 全部跨库移动记录(汇总前,按产生顺序)
    pub movements: Vec<MovementRecord>,

    /// 逐需求满足状态(与需求输入同序)
    pub fulfillments: Vec<ShipmentFulfillment>,
}

pub struct DemandFulfiller;

impl DemandFulfiller {
    pub fn new() -> Self {
        Self {}
    }

    /// 按输入行序逐条履约
    ///
    /// 台账由本引擎独占可变借用,就地递减;任一跨库移动遇到
    /// UPP 缺失立即返回错误,本次运行不输出部分计划
    #[instrument(skip(self, ledger, demands), fields(demand_count = demands.len()))]
    pub fn fulfill(
        &self,
        ledger: &mut [LedgerEntry],
        demands: &[ShipmentDemand],
    ) -> EngineResult<FulfillmentOutcome> {
        let mut movements = Vec::new();
        let mut fulfillments = Vec::with_capacity(demands.len());

        for demand in demands {
            let (demand_movements, fulfilled_qty) = self.fulfill_single(ledger, demand)?;

            let fulfillment = ShipmentFulfillment::evaluate(
                &demand.material_id,
                demand.row_number,
                demand.delivery_qty,
                fulfilled_qty,
            );

            if fulfillment.has_shortfall() {
                // 缺口是正常终态,记录并告警,不中断
                warn!(
                    material_id = %demand.material_id,
                    row = demand.row_number,
                    required = demand.delivery_qty,
                    unmet = fulfillment.unmet_qty,
                    "需求未完全满足"
                );
            }

            movements.extend(demand_movements);
            fulfillments.push(fulfillment);
        }

        Ok(FulfillmentOutcome {
            movements,
            fulfillments,
        })
    }

    /// 单条需求的三层消耗
    fn fulfill_single(
        &self,
        ledger: &mut [LedgerEntry],
        demand: &ShipmentDemand,
    ) -> EngineResult<(Vec<MovementRecord>, f64)> {
        let required_initial = demand.delivery_qty;
        let mut required = required_initial;

        // 本需求处理起点的可用行快照(前序需求的消耗已反映在台账中)
        let snapshot: Vec<usize> = ledger
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_material(&demand.material_id) && e.has_available())
            .map(|(idx, _)| idx)
            .collect();

        // ==========================================
        // 第一层: 厂内库存 (TAS / 正常)
        // ==========================================
        let tas_idx = snapshot.iter().copied().find(|&idx| {
            ledger[idx].storage_area == StorageArea::Tas
                && ledger[idx].category == StockCategory::Normal
        });
        let in_plant_qty = tas_idx.map(|idx| ledger[idx].case_qty).unwrap_or(0.0);

        if in_plant_qty >= required {
            // 厂内足量: 就地递减,不产生移动记录
            if let Some(idx) = tas_idx {
                ledger[idx].case_qty -= required;
            }
            debug!(
                material_id = %demand.material_id,
                row = demand.row_number,
                required = required_initial,
                "厂内库存足量,无需补货"
            );
            return Ok((Vec::new(), required_initial));
        }

        // 厂内部分消耗: 该行清零,剩余需求进入外仓层
        required -= in_plant_qty;
        if let Some(idx) = tas_idx {
            ledger[idx].case_qty -= in_plant_qty;
        }

        let mut movements = Vec::new();

        // ==========================================
        // 第二层: 外仓正常库存 (ARGO / BAKTI)
        // ==========================================
        // 候选按台账顺序(确定性排序已保证 ARGO 先于 BAKTI)
        for &idx in &snapshot {
            if required <= 0.0 {
                break;
            }
            if !(ledger[idx].storage_area.is_external()
                && ledger[idx].category == StockCategory::Normal)
            {
                continue;
            }

            let moved = required.min(ledger[idx].case_qty);
            if moved <= 0.0 {
                continue;
            }

            movements.push(self.record_movement(&ledger[idx], moved)?);
            ledger[idx].case_qty -= moved;
            required -= moved;
        }

        // ==========================================
        // 第三层: 隔离库存兜底 (类别 Q,任意库区)
        // ==========================================
        // 小批次优先: 按快照可用量升序,等量保持原相对顺序
        if required > 0.0 {
            let mut quarantine: Vec<(usize, f64)> = snapshot
                .iter()
                .copied()
                .filter(|&idx| ledger[idx].category == StockCategory::Quarantine)
                .map(|idx| (idx, ledger[idx].case_qty))
                .collect();
            quarantine.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

            for (idx, _) in quarantine {
                if required <= 0.0 {
                    break;
                }

                let moved = required.min(ledger[idx].case_qty);
                if moved <= 0.0 {
                    continue;
                }

                movements.push(self.record_movement(&ledger[idx], moved)?);
                ledger[idx].case_qty -= moved;
                required -= moved;
            }
        }

        let fulfilled = required_initial - required;
        debug!(
            material_id = %demand.material_id,
            row = demand.row_number,
            required = required_initial,
            fulfilled,
            movement_count = movements.len(),
            "需求处理完成"
        );

        Ok((movements, fulfilled))
    }

    /// 产生一条跨库移动记录并换算托盘数
    ///
    /// UPP 缺失或非正值属于配置数据错误,直接中止
    fn record_movement(&self, entry: &LedgerEntry, moved: f64) -> EngineResult<MovementRecord> {
        let upp = match entry.upp {
            Some(u) if u > 0.0 => u,
            _ => {
                return Err(EngineError::MissingConversionFactor {
                    material_id: entry.material_id.clone(),
                    material_description: entry.material_description.clone(),
                })
            }
        };

        Ok(MovementRecord {
            storage_area: entry.storage_area,
            material_id: entry.material_id.clone(),
            material_description: entry.material_description.clone(),
            category: entry.category,
            case_qty: moved,
            pallet_qty: pallet_qty(moved, upp),
        })
    }
}

impl Default for DemandFulfiller {
    fn default() -> Self {
        Self::new()
    }
}
