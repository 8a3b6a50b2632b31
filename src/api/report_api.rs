// ==========================================
// 工作计划报表生成 - 报表业务接口
// ==========================================
// 职责: generate_pdf(work_plan_id, locale, session)
//       加载聚合 -> 编排报表 -> 产出 PDF 交付物
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReportConfig;
use crate::report::builder::WorkPlanReportBuilder;
use crate::report::pdf::PdfReportDocument;
use crate::repository::work_plan_repo::WorkPlanRepository;
use rusqlite::Connection;
use rust_i18n::t;
use std::sync::{Arc, Mutex};

// ==========================================
// SessionInfo - 会话能力
// ==========================================
// 报表头"生成人"的来源;由调用环境提供
pub trait SessionInfo {
    /// 当前用户名
    fn current_user_name(&self) -> String;
}

/// 无交互环境的默认会话（生成人固定为 system）
#[derive(Debug, Default)]
pub struct SystemSession;

impl SessionInfo for SystemSession {
    fn current_user_name(&self) -> String {
        "system".to_string()
    }
}

// ==========================================
// ReportOutput - 报表交付物
// ==========================================
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub file_name: String,            // 建议文件名
    pub content_type: String,         // MIME 类型
    pub content_disposition: String,  // 附件交付提示
    pub bytes: Vec<u8>,               // 文档字节
}

// ==========================================
// WorkPlanReportApi - 报表接口
// ==========================================
pub struct WorkPlanReportApi {
    repository: WorkPlanRepository,
    config: ReportConfig,
}

impl WorkPlanReportApi {
    /// 使用默认版式配置构造
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self::with_config(conn, ReportConfig::default())
    }

    /// 指定版式配置构造
    pub fn with_config(conn: Arc<Mutex<Connection>>, config: ReportConfig) -> Self {
        Self {
            repository: WorkPlanRepository::new(conn),
            config,
        }
    }

    /// 生成工作计划 PDF 报表
    ///
    /// # 参数
    /// - `work_plan_id`: 工作计划ID
    /// - `locale`: 报表语言（请求级,显式传入）
    /// - `session`: 会话能力（生成人）
    ///
    /// # 返回
    /// - `Ok(ReportOutput)`: 含 PDF 字节与交付元信息
    /// - `Err(ApiError::NotFound)`: 工作计划不存在
    /// - `Err`: 配置错误/数据一致性错误/数据库错误
    pub fn generate_pdf(
        &self,
        work_plan_id: &str,
        locale: &str,
        session: &dyn SessionInfo,
    ) -> ApiResult<ReportOutput> {
        if work_plan_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("work_plan_id 为空".to_string()));
        }

        tracing::info!(work_plan_id, locale, "开始生成工作计划报表");

        let work_plan = self
            .repository
            .find_by_id(work_plan_id)?
            .ok_or_else(|| ApiError::NotFound(format!("工作计划 {}", work_plan_id)))?;

        let title = t!("workplan.report.title", locale = locale);
        let mut document = PdfReportDocument::new(&title, &self.config);

        let builder = WorkPlanReportBuilder::new(self.config.clone());
        builder.build(
            &work_plan,
            locale,
            &session.current_user_name(),
            &mut document,
        )?;

        let bytes = document.finish(locale);
        let file_name = suggested_file_name(&work_plan.name, &work_plan.created_at.date());

        tracing::info!(
            work_plan_id,
            size = bytes.len(),
            file_name = %file_name,
            "工作计划报表生成完成"
        );

        Ok(ReportOutput {
            content_disposition: format!("attachment; filename=\"{}\"", file_name),
            content_type: "application/pdf".to_string(),
            file_name,
            bytes,
        })
    }
}

/// 建议文件名: 计划名（清洗后）+ 创建日期
fn suggested_file_name(plan_name: &str, date: &chrono::NaiveDate) -> String {
    let sanitized: String = plan_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}.pdf", sanitized, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_suggested_file_name_sanitizes() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            suggested_file_name("Plan A/B:2024", &date),
            "Plan_A_B_2024_2024-06-01.pdf"
        );
    }

    #[test]
    fn test_system_session_user() {
        assert_eq!(SystemSession.current_user_name(), "system");
    }
}
