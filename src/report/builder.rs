// ==========================================
// 工作计划报表生成 - 报表编排器
// ==========================================
// 职责: 报表头 -> 订单表 -> 按章节输出工序信息块
// 约束: 单线程同步执行,副作用仅限向文档追加内容;
//       任何错误即中止,不产出部分文档
// ==========================================

use crate::config::ReportConfig;
use crate::domain::work_plan::{Order, WorkPlan};
use crate::engine::format::ReportFormatter;
use crate::engine::grouping::{GroupBuilder, GroupedOperation};
use crate::engine::sorting::sorted_by_number;
use crate::report::document::{CellAlign, ReportDocument, TableSpec, TextStyle};
use crate::report::error::ReportResult;
use rust_i18n::t;

// ==========================================
// WorkPlanReportBuilder - 报表编排器
// ==========================================
pub struct WorkPlanReportBuilder {
    config: ReportConfig,
    group_builder: GroupBuilder,
}

impl Default for WorkPlanReportBuilder {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl WorkPlanReportBuilder {
    /// 构造函数
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            group_builder: GroupBuilder::new(),
        }
    }

    /// 构建完整报表
    ///
    /// # 参数
    /// - `work_plan`: 工作计划聚合
    /// - `locale`: 报表语言（请求级,显式传入）
    /// - `author`: 报表生成人（来自会话能力）
    /// - `document`: 输出文档（仅追加）
    pub fn build(
        &self,
        work_plan: &WorkPlan,
        locale: &str,
        author: &str,
        document: &mut dyn ReportDocument,
    ) -> ReportResult<()> {
        tracing::debug!(
            work_plan_id = %work_plan.work_plan_id,
            plan_type = %work_plan.plan_type,
            locale,
            "开始构建工作计划报表"
        );

        // 格式化器为本次构建的栈上实例,绑定请求 locale
        let formatter = ReportFormatter::new(locale);

        self.add_main_header(document, work_plan, locale, author, &formatter);
        self.add_order_table(document, work_plan, locale, &formatter);
        self.add_operation_sections(document, work_plan, locale)?;

        Ok(())
    }

    // ==========================================
    // 报表头
    // ==========================================
    fn add_main_header(
        &self,
        document: &mut dyn ReportDocument,
        work_plan: &WorkPlan,
        locale: &str,
        author: &str,
        formatter: &ReportFormatter,
    ) {
        document.append_paragraph(
            &t!("workplan.report.title", locale = locale),
            TextStyle::Title,
        );
        document.append_paragraph(&work_plan.name, TextStyle::Body);
        document.append_paragraph(
            &t!(
                "workplan.report.generated_at",
                locale = locale,
                date = formatter.format_datetime(&work_plan.created_at)
            ),
            TextStyle::Body,
        );
        document.append_paragraph(
            &t!("workplan.report.generated_by", locale = locale, name = author),
            TextStyle::Body,
        );
    }

    // ==========================================
    // 订单表
    // ==========================================
    fn add_order_table(
        &self,
        document: &mut dyn ReportDocument,
        work_plan: &WorkPlan,
        locale: &str,
        formatter: &ReportFormatter,
    ) {
        document.append_paragraph(
            &t!("workplan.report.orders_table", locale = locale),
            TextStyle::SectionHeader,
        );

        let spec = TableSpec {
            headers: vec![
                t!("workplan.report.column.order_number", locale = locale).to_string(),
                t!("workplan.report.column.order_name", locale = locale).to_string(),
                t!("workplan.report.column.product", locale = locale).to_string(),
                t!("workplan.report.column.planned_quantity", locale = locale).to_string(),
                t!("workplan.report.column.due_date", locale = locale).to_string(),
            ],
            widths: self.config.order_column_widths.clone(),
            aligns: vec![
                CellAlign::Right,
                CellAlign::Left,
                CellAlign::Left,
                CellAlign::Right,
                CellAlign::Right,
            ],
        };

        let rows: Vec<Vec<String>> = sorted_by_number(&work_plan.orders)
            .into_iter()
            .map(|order| self.order_row(order, formatter))
            .collect();

        document.append_table(&spec, &rows);
    }

    /// 单行订单数据
    fn order_row(&self, order: &Order, formatter: &ReportFormatter) -> Vec<String> {
        let product_cell = order
            .product
            .as_ref()
            .map(|p| p.display_label())
            .unwrap_or_default();

        let unit = order
            .product
            .as_ref()
            .and_then(|p| p.unit.as_deref());

        vec![
            order.number.clone(),
            order.name.clone(),
            product_cell,
            formatter.format_quantity_with_unit(order.planned_quantity, unit),
            formatter.format_date(order.due_date),
        ]
    }

    // ==========================================
    // 工序章节
    // ==========================================
    fn add_operation_sections(
        &self,
        document: &mut dyn ReportDocument,
        work_plan: &WorkPlan,
        locale: &str,
    ) -> ReportResult<()> {
        let groups = self.group_builder.build_groups(work_plan, locale)?;

        for (key, operations) in &groups {
            document.append_page_break();
            document.append_paragraph(key.title(), TextStyle::SectionHeader);

            for operation in operations {
                document.append_panel(&self.operation_panel(operation, locale));
            }
        }

        Ok(())
    }

    /// 工序头信息块: 工序侧 3 项 + 订单侧 3 项
    fn operation_panel(
        &self,
        grouped: &GroupedOperation<'_>,
        locale: &str,
    ) -> Vec<(String, String)> {
        let operation = &grouped.component.operation;
        let order = grouped.order;

        // 分组时已跳过无工艺订单,此处工艺必定存在
        let technology_name = order
            .technology
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default();

        vec![
            (
                t!("workplan.report.operation.level", locale = locale).to_string(),
                grouped.component.node_number.clone(),
            ),
            (
                t!("workplan.report.operation.name", locale = locale).to_string(),
                operation.name.clone(),
            ),
            (
                t!("workplan.report.operation.number", locale = locale).to_string(),
                operation.number.clone(),
            ),
            (
                t!("workplan.report.operation.technology", locale = locale).to_string(),
                technology_name,
            ),
            (
                t!("workplan.report.operation.order_name", locale = locale).to_string(),
                order.name.clone(),
            ),
            (
                t!("workplan.report.operation.order_number", locale = locale).to_string(),
                order.number.clone(),
            ),
        ]
    }
}
