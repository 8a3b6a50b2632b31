// ==========================================
// 工作计划报表生成 - PDF 渲染
// ==========================================
// 基于 printpdf 的 Op 序列逐页构建:
// - 光标自顶向下推进,越界自动换页
// - finish 时叠加页码页脚并写入文档元数据标题
// - 内置 Helvetica 字体,右对齐按平均字宽估算
// ==========================================

use crate::config::ReportConfig;
use crate::report::document::{CellAlign, ReportDocument, TableSpec, TextStyle};
use printpdf::{
    BuiltinFont, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Point, Pt,
    TextItem,
};
use rust_i18n::t;

/// pt -> mm 换算系数
const PT_TO_MM: f32 = 0.352_778;

/// 行高相对字号的倍数
const LINE_SPACING: f32 = 1.5;

/// Helvetica 平均字宽相对字号的估算系数（右对齐用）
const AVG_GLYPH_WIDTH_RATIO: f32 = 0.5;

/// 键值面板中值列的横向偏移 (毫米)
const PANEL_VALUE_OFFSET_MM: f32 = 45.0;

// ==========================================
// PdfReportDocument - PDF 文档
// ==========================================
pub struct PdfReportDocument {
    title: String,
    config: ReportConfig,
    pages: Vec<Vec<Op>>,   // 已完成页面的操作序列
    ops: Vec<Op>,          // 当前页操作序列
    cursor_y_mm: f32,      // 当前基线纵坐标（自页顶向下递减）
    has_content: bool,     // 当前页是否已有内容
}

impl PdfReportDocument {
    /// 构造函数
    ///
    /// # 参数
    /// - `title`: 文档元数据标题
    /// - `config`: 报表版式配置
    pub fn new(title: &str, config: &ReportConfig) -> Self {
        let cursor_y_mm = config.page.height_mm - config.page.margin_mm;
        Self {
            title: title.to_string(),
            config: config.clone(),
            pages: Vec::new(),
            ops: Vec::new(),
            cursor_y_mm,
            has_content: false,
        }
    }

    /// 结束构建,叠加页码页脚,返回 PDF 字节
    pub fn finish(mut self, locale: &str) -> Vec<u8> {
        self.flush_page();

        let total = self.pages.len();
        let footer_x_mm = self.config.page.margin_mm;
        let footer_y_mm = self.config.page.margin_mm / 2.0;
        let footer_size = Pt(self.config.body_font_size * 0.9);

        for (index, ops) in self.pages.iter_mut().enumerate() {
            let label = t!(
                "workplan.report.page",
                locale = locale,
                page = index + 1,
                total = total
            );
            ops.extend(text_ops(
                footer_x_mm,
                footer_y_mm,
                &label,
                BuiltinFont::Helvetica,
                footer_size,
            ));
        }

        let width = Mm(self.config.page.width_mm);
        let height = Mm(self.config.page.height_mm);
        let pages: Vec<PdfPage> = self
            .pages
            .into_iter()
            .map(|ops| PdfPage::new(width, height, ops))
            .collect();

        let mut warnings = Vec::new();
        let bytes = PdfDocument::new(&self.title)
            .with_pages(pages)
            .save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            tracing::debug!(count = warnings.len(), "PDF 渲染产生警告");
        }
        bytes
    }

    // ==========================================
    // 布局
    // ==========================================

    fn printable_width_mm(&self) -> f32 {
        self.config.page.width_mm - 2.0 * self.config.page.margin_mm
    }

    fn line_height_mm(&self, size: Pt) -> f32 {
        size.0 * LINE_SPACING * PT_TO_MM
    }

    /// 当前页剩余空间不足时换页
    fn ensure_space(&mut self, needed_mm: f32) {
        if self.cursor_y_mm - needed_mm < self.config.page.margin_mm {
            self.flush_page();
        }
    }

    /// 收尾当前页,开启新页
    fn flush_page(&mut self) {
        if !self.has_content && !self.pages.is_empty() {
            // 连续分页不产生空白页
            self.ops.clear();
            self.cursor_y_mm = self.config.page.height_mm - self.config.page.margin_mm;
            return;
        }
        let ops = std::mem::take(&mut self.ops);
        self.pages.push(ops);
        self.cursor_y_mm = self.config.page.height_mm - self.config.page.margin_mm;
        self.has_content = false;
    }

    /// 输出一行文本并下移光标
    fn write_line(&mut self, x_mm: f32, text: &str, font: BuiltinFont, size: Pt) {
        let line_height = self.line_height_mm(size);
        self.ensure_space(line_height);
        self.cursor_y_mm -= line_height;
        self.ops
            .extend(text_ops(x_mm, self.cursor_y_mm, text, font, size));
        self.has_content = true;
    }

    /// 在既有基线上输出单元格文本（不推进光标）
    fn write_cell(&mut self, x_mm: f32, width_mm: f32, text: &str, font: BuiltinFont, size: Pt, align: CellAlign) {
        let x = match align {
            CellAlign::Left => x_mm,
            CellAlign::Right => {
                let est_mm = estimate_text_width_mm(text, size);
                (x_mm + width_mm - est_mm).max(x_mm)
            }
        };
        self.ops
            .extend(text_ops(x, self.cursor_y_mm, text, font, size));
        self.has_content = true;
    }

    /// 输出整行表格单元格
    fn write_row(&mut self, spec: &TableSpec, cells: &[String], font: BuiltinFont, size: Pt) {
        let line_height = self.line_height_mm(size);
        self.ensure_space(line_height);
        self.cursor_y_mm -= line_height;

        let margin = self.config.page.margin_mm;
        let total_width: u32 = spec.widths.iter().sum();
        let printable = self.printable_width_mm();

        let mut x = margin;
        for (index, cell) in cells.iter().enumerate() {
            let fraction = spec.widths.get(index).copied().unwrap_or(1) as f32
                / total_width.max(1) as f32;
            let width = printable * fraction;
            let align = spec
                .aligns
                .get(index)
                .copied()
                .unwrap_or(CellAlign::Left);
            self.write_cell(x, width - 1.0, cell, font, size, align);
            x += width;
        }
    }

    /// 水平分隔线
    fn write_rule(&mut self) {
        let margin = self.config.page.margin_mm;
        let y = self.cursor_y_mm - 1.0;
        self.ops.push(Op::SetOutlineThickness { pt: Pt(0.5) });
        self.ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: Point {
                            x: Mm(margin).into(),
                            y: Mm(y).into(),
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point {
                            x: Mm(margin + self.printable_width_mm()).into(),
                            y: Mm(y).into(),
                        },
                        bezier: false,
                    },
                ],
                is_closed: false,
            },
        });
        self.cursor_y_mm -= 2.0;
        self.has_content = true;
    }

    /// 垂直留白
    fn add_spacing(&mut self, mm: f32) {
        self.cursor_y_mm -= mm;
    }
}

impl ReportDocument for PdfReportDocument {
    fn append_paragraph(&mut self, text: &str, style: TextStyle) {
        let margin = self.config.page.margin_mm;
        match style {
            TextStyle::Title => {
                let size = Pt(self.config.title_font_size);
                self.write_line(margin, text, BuiltinFont::HelveticaBold, size);
                self.add_spacing(2.0);
            }
            TextStyle::SectionHeader => {
                let size = Pt(self.config.section_font_size);
                self.add_spacing(2.0);
                self.write_line(margin, text, BuiltinFont::HelveticaBold, size);
            }
            TextStyle::Body => {
                let size = Pt(self.config.body_font_size);
                self.write_line(margin, text, BuiltinFont::Helvetica, size);
            }
        }
    }

    fn append_table(&mut self, spec: &TableSpec, rows: &[Vec<String>]) {
        let size = Pt(self.config.body_font_size);
        self.write_row(spec, &spec.headers, BuiltinFont::HelveticaBold, size);
        self.write_rule();
        for row in rows {
            self.write_row(spec, row, BuiltinFont::Helvetica, size);
        }
        self.add_spacing(4.0);
    }

    fn append_panel(&mut self, entries: &[(String, String)]) {
        let margin = self.config.page.margin_mm;
        let size = Pt(self.config.body_font_size);
        let line_height = self.line_height_mm(size);

        // 面板整体不跨页: 预留全部条目高度
        self.ensure_space(line_height * entries.len() as f32 + 3.0);
        self.add_spacing(3.0);

        for (label, value) in entries {
            self.write_line(margin, label, BuiltinFont::HelveticaBold, size);
            // 值与标签同一基线,偏移固定值列
            self.ops.extend(text_ops(
                margin + PANEL_VALUE_OFFSET_MM,
                self.cursor_y_mm,
                value,
                BuiltinFont::Helvetica,
                size,
            ));
        }
        self.add_spacing(6.0);
    }

    fn append_page_break(&mut self) {
        self.flush_page();
    }
}

/// 单段文本的操作序列
fn text_ops(x_mm: f32, y_mm: f32, text: &str, font: BuiltinFont, size: Pt) -> Vec<Op> {
    vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Mm(x_mm).into(),
                y: Mm(y_mm).into(),
            },
        },
        Op::SetFontSizeBuiltinFont { size, font },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font,
        },
        Op::EndTextSection,
    ]
}

/// 估算文本宽度 (毫米): 平均字宽近似,仅用于右对齐
fn estimate_text_width_mm(text: &str, size: Pt) -> f32 {
    text.chars().count() as f32 * size.0 * AVG_GLYPH_WIDTH_RATIO * PT_TO_MM
}
