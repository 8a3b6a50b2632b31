// ==========================================
// 工作计划报表生成 - 纯文本渲染
// ==========================================
// 职责: 行导向的文本文档,用于测试断言与 CLI 预览
// ==========================================

use crate::report::document::{CellAlign, ReportDocument, TableSpec, TextStyle};

/// 分页分隔行
const PAGE_SEPARATOR: &str = "========================================";

// ==========================================
// PlainTextDocument - 纯文本文档
// ==========================================
#[derive(Debug, Default)]
pub struct PlainTextDocument {
    lines: Vec<String>,
}

impl PlainTextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 渲染为多行字符串
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl ReportDocument for PlainTextDocument {
    fn append_paragraph(&mut self, text: &str, style: TextStyle) {
        match style {
            TextStyle::Title => self.lines.push(format!("# {}", text)),
            TextStyle::SectionHeader => self.lines.push(format!("## {}", text)),
            TextStyle::Body => self.lines.push(text.to_string()),
        }
    }

    fn append_table(&mut self, spec: &TableSpec, rows: &[Vec<String>]) {
        self.lines.push(spec.headers.join(" | "));
        self.lines.push("-".repeat(40));
        for row in rows {
            self.lines.push(row.join(" | "));
        }
    }

    fn append_panel(&mut self, entries: &[(String, String)]) {
        for (label, value) in entries {
            self.lines.push(format!("{}: {}", label, value));
        }
        self.lines.push(String::new());
    }

    fn append_page_break(&mut self) {
        self.lines.push(PAGE_SEPARATOR.to_string());
    }
}
