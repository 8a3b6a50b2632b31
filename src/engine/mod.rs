// ==========================================
// 工作计划报表生成 - 引擎层
// ==========================================
// 职责: 工序分类/分组/排序/格式化的纯业务规则
// 红线: 不含数据访问逻辑,不含文档渲染逻辑
// ==========================================

pub mod classifier;
pub mod error;
pub mod format;
pub mod grouping;
pub mod sorting;

// 重导出核心引擎
pub use classifier::SectionClassifier;
pub use error::{EngineError, EngineResult};
pub use format::{ReportFormatter, MISSING_DATE_PLACEHOLDER};
pub use grouping::{GroupBuilder, GroupedOperation, SectionGroups};
pub use sorting::natural_number_cmp;
