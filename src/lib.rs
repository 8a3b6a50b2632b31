// ==========================================
// 工作计划报表生成 - 核心库
// ==========================================
// 技术栈: Rust + SQLite + printpdf
// 系统定位: 生产订单工序分组报表
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 分组/排序/格式化
pub mod engine;

// 报表层 - 文档编排与渲染
pub mod report;

// 配置层 - 报表版式配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::WorkPlanType;

// 领域实体
pub use domain::{
    Division, Operation, OperationComponent, Order, Product, SectionKey, Technology, WorkPlan,
    WorkstationType,
};

// 引擎
pub use engine::{
    natural_number_cmp, EngineError, GroupBuilder, GroupedOperation, ReportFormatter,
    SectionClassifier,
};

// 报表
pub use report::{
    PdfReportDocument, PlainTextDocument, ReportDocument, ReportError, WorkPlanReportBuilder,
};

// 配置
pub use config::ReportConfig;

// API
pub use api::{ApiError, ReportOutput, SessionInfo, SystemSession, WorkPlanReportApi};

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
