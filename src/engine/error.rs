// ==========================================
// 工作计划报表生成 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 数据一致性错误 =====
    // 按成品分组要求工艺必须关联成品;缺失说明上游数据完整性被破坏,
    // 整个报表构建中止,不做局部跳过
    #[error("数据不一致: 工艺 {technology} 缺少成品,无法按成品分组")]
    MissingEndProduct { technology: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 引擎层结果类型
pub type EngineResult<T> = Result<T, EngineError>;
