// ==========================================
// 工作计划报表生成 - 报表层错误类型
// ==========================================
// 传播策略: 同步向调用方传播,不重试,不产出部分文档
// ==========================================

use crate::engine::error::EngineError;
use thiserror::Error;

/// 报表层错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    // 分类/分组阶段的错误（数据一致性）
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 报表层结果类型
pub type ReportResult<T> = Result<T, ReportError>;
