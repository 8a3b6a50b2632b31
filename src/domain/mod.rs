// ==========================================
// 工作计划报表生成 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、分组键
// 红线: 不含数据访问逻辑,不含报表编排逻辑
// ==========================================

pub mod section;
pub mod technology;
pub mod types;
pub mod work_plan;

// 重导出核心类型
pub use section::SectionKey;
pub use technology::{Division, Operation, OperationComponent, Technology, WorkstationType};
pub use types::WorkPlanType;
pub use work_plan::{Order, Product, WorkPlan};
