// ==========================================
// 提前补货计划系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: UPP 缺失属于配置数据错误,必须中断运行,
//       不得静默吞掉后输出不一致的计划
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(
        "UPP 换算系数缺失或非正 (物料 {material_id}, 描述 \"{material_description}\"): \
         无法计算托盘数,本次运行中止"
    )]
    MissingConversionFactor {
        material_id: String,
        material_description: String,
    },
}

/// 引擎层统一 Result 别名
pub type EngineResult<T> = Result<T, EngineError>;
