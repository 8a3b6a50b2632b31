// ==========================================
// 工作计划报表生成 - 工序分组引擎
// ==========================================
// 职责: 遍历工作计划全部订单,将工序节点按章节键分组,
//       并在组内按 (订单号 + 节点位置串) 字典序排序
// 输出: BTreeMap 保证章节遍历次序与 SectionKey 全序一致
// ==========================================

use crate::domain::section::SectionKey;
use crate::domain::technology::OperationComponent;
use crate::domain::work_plan::{Order, WorkPlan};
use crate::engine::classifier::SectionClassifier;
use crate::engine::error::EngineResult;
use std::collections::BTreeMap;

/// 分组结果: 章节键 -> 组内工序（已排序）
pub type SectionGroups<'a> = BTreeMap<SectionKey, Vec<GroupedOperation<'a>>>;

// ==========================================
// GroupedOperation - 组内工序
// ==========================================
// 工序节点与其归属订单的配对。
// 配对仅在单次报表构建内有效（订单即该工序被访问到时经过的订单）
#[derive(Debug, Clone, Copy)]
pub struct GroupedOperation<'a> {
    pub component: &'a OperationComponent,
    pub order: &'a Order,
}

impl GroupedOperation<'_> {
    /// 组内排序键: 订单号拼接节点位置串
    ///
    /// 先按订单聚拢,订单内再按工艺树位置排列
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.order.number, self.component.node_number)
    }
}

// ==========================================
// GroupBuilder - 工序分组引擎
// ==========================================
pub struct GroupBuilder {
    classifier: SectionClassifier,
}

impl Default for GroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupBuilder {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            classifier: SectionClassifier::new(),
        }
    }

    /// 构建章节分组
    ///
    /// 算法:
    /// 1. 遍历全部订单;无工艺的订单整体跳过（不产生任何工序）
    /// 2. 深度优先遍历订单工艺的工序树,逐节点分类并入组
    /// 3. 每组按 (订单号 + 节点位置串) 升序字典序稳定排序
    ///
    /// # 参数
    /// - `work_plan`: 工作计划聚合
    /// - `locale`: 报表语言（章节标题已本地化,键序对 locale 稳定）
    pub fn build_groups<'a>(
        &self,
        work_plan: &'a WorkPlan,
        locale: &str,
    ) -> EngineResult<SectionGroups<'a>> {
        let mut groups: SectionGroups<'a> = BTreeMap::new();

        for order in &work_plan.orders {
            let technology = match order.technology.as_ref() {
                Some(technology) => technology,
                None => continue,
            };

            for component in technology.walk() {
                let key = self
                    .classifier
                    .classify(work_plan, technology, component, locale)?;
                groups
                    .entry(key)
                    .or_default()
                    .push(GroupedOperation { component, order });
            }
        }

        for operations in groups.values_mut() {
            operations.sort_by_key(|op| op.sort_key());
        }

        Ok(groups)
    }
}
