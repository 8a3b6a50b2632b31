// ==========================================
// 工作计划报表生成 - 报表层
// ==========================================
// 职责: 文档抽象、报表编排、PDF/文本渲染
// 约束: 编排器只做有序追加,不触碰渲染库细节
// ==========================================

pub mod builder;
pub mod document;
pub mod error;
pub mod pdf;
pub mod text;

// 重导出核心类型
pub use builder::WorkPlanReportBuilder;
pub use document::{CellAlign, ReportDocument, TableSpec, TextStyle};
pub use error::{ReportError, ReportResult};
pub use pdf::PdfReportDocument;
pub use text::PlainTextDocument;
