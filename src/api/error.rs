// ==========================================
// 工作计划报表生成 - API层错误类型
// ==========================================
// 职责: 汇聚仓储/报表层错误,给出用户可读的失败原因
// ==========================================

use crate::report::error::ReportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // 仓储层错误（含分组模式配置错误）
    #[error("数据访问失败: {0}")]
    Repository(#[from] RepositoryError),

    // 报表层错误（含数据一致性错误）
    #[error("报表构建失败: {0}")]
    Report(#[from] ReportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// API层结果类型
pub type ApiResult<T> = Result<T, ApiError>;
