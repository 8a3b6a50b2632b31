// ==========================================
// 工作计划报表生成 - 文档抽象
// ==========================================
// 外部渲染能力的接口: 按序接受追加操作
// (段落/表格/键值面板/分页),最终产出二进制文档。
// 编排器只依赖本 trait,不感知具体渲染库
// ==========================================

/// 段落样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,         // 报表主标题
    SectionHeader, // 章节标题
    Body,          // 正文
}

/// 单元格对齐
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Right,
}

// ==========================================
// TableSpec - 表格规格
// ==========================================
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub headers: Vec<String>,    // 表头（已本地化）
    pub widths: Vec<u32>,        // 各列相对宽度
    pub aligns: Vec<CellAlign>,  // 各列对齐
}

// ==========================================
// ReportDocument - 文档追加接口
// ==========================================
pub trait ReportDocument {
    /// 追加段落
    fn append_paragraph(&mut self, text: &str, style: TextStyle);

    /// 追加带表头的表格
    fn append_table(&mut self, spec: &TableSpec, rows: &[Vec<String>]);

    /// 追加键值面板（工序头信息块）
    fn append_panel(&mut self, entries: &[(String, String)]);

    /// 追加分页
    fn append_page_break(&mut self);
}
