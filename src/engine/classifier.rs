// ==========================================
// 工作计划报表生成 - 章节分类引擎
// ==========================================
// 职责: 依据工作计划的分组模式,为每个工序节点派生章节键
// 输入: 工作计划 + 工序所属工艺 + 工序节点 + locale
// 输出: SectionKey (确定性: 相同输入必得相同键)
// ==========================================

use crate::domain::section::SectionKey;
use crate::domain::technology::{OperationComponent, Technology};
use crate::domain::types::WorkPlanType;
use crate::domain::work_plan::WorkPlan;
use crate::engine::error::{EngineError, EngineResult};
use rust_i18n::t;

// ==========================================
// SectionClassifier - 章节分类引擎
// ==========================================
pub struct SectionClassifier {
    // 无状态引擎,不需要注入依赖
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionClassifier {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 为工序节点派生章节键
    ///
    /// 分组模式为封闭枚举,match 穷尽所有模式;
    /// 未知模式在聚合加载阶段即被拒绝,此处不可能出现
    ///
    /// # 参数
    /// - `work_plan`: 工作计划（提供分组模式）
    /// - `technology`: 该工序节点所属的工艺
    /// - `component`: 工序节点
    /// - `locale`: 报表语言（请求级,显式传入）
    ///
    /// # 返回
    /// - `Ok(SectionKey)`: 章节键
    /// - `Err(EngineError::MissingEndProduct)`: 按成品分组但工艺缺少成品
    pub fn classify(
        &self,
        work_plan: &WorkPlan,
        technology: &Technology,
        component: &OperationComponent,
        locale: &str,
    ) -> EngineResult<SectionKey> {
        match work_plan.plan_type {
            WorkPlanType::NoDistinction => Ok(SectionKey::named(t!(
                "workplan.report.section.all_operations",
                locale = locale
            ))),
            WorkPlanType::ByEndProduct => {
                let end_product = technology.end_product.as_ref().ok_or_else(|| {
                    EngineError::MissingEndProduct {
                        technology: technology.name.clone(),
                    }
                })?;
                Ok(SectionKey::named(format!(
                    "{} {{{}}}",
                    t!("workplan.report.section.by_end_product", locale = locale),
                    end_product.name
                )))
            }
            WorkPlanType::ByWorkstationType => {
                match component.operation.workstation_type.as_ref() {
                    // 缺失机台类型不是错误: 归入兜底章节,排在命名章节之后
                    None => Ok(SectionKey::fallback(t!(
                        "workplan.report.section.no_workstation_type",
                        locale = locale
                    ))),
                    Some(workstation) => Ok(SectionKey::named(format!(
                        "{} {{{}}}",
                        t!("workplan.report.section.by_workstation_type", locale = locale),
                        workstation.name
                    ))),
                }
            }
            WorkPlanType::ByDivision => {
                // 先查机台类型,再查车间;两者任一缺失都归入"未指定车间"
                match component.operation.workstation_type.as_ref() {
                    None => Ok(SectionKey::fallback(t!(
                        "workplan.report.section.no_division",
                        locale = locale
                    ))),
                    Some(workstation) => match workstation.division.as_ref() {
                        None => Ok(SectionKey::fallback(t!(
                            "workplan.report.section.no_division",
                            locale = locale
                        ))),
                        Some(division) => Ok(SectionKey::named(format!(
                            "{} {{{}}}",
                            t!("workplan.report.section.by_division", locale = locale),
                            division.name
                        ))),
                    },
                }
            }
        }
    }
}
