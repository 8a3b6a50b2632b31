// ==========================================
// 工作计划报表生成 - 报表版式配置
// ==========================================
// 所有字段带默认值,可整体缺省;
// 支持从 JSON 文件加载覆盖
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值错误: {0}")]
    InvalidValue(String),
}

// ==========================================
// ReportConfig - 报表配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 订单表 5 列的相对宽度
    #[serde(default = "default_order_column_widths")]
    pub order_column_widths: Vec<u32>,

    /// 页面几何
    #[serde(default)]
    pub page: PageConfig,

    /// 标题字号 (pt)
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f32,

    /// 章节标题字号 (pt)
    #[serde(default = "default_section_font_size")]
    pub section_font_size: f32,

    /// 正文字号 (pt)
    #[serde(default = "default_body_font_size")]
    pub body_font_size: f32,
}

// ==========================================
// PageConfig - 页面几何 (毫米)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_width_mm")]
    pub width_mm: f32,

    #[serde(default = "default_page_height_mm")]
    pub height_mm: f32,

    #[serde(default = "default_margin_mm")]
    pub margin_mm: f32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            order_column_widths: default_order_column_widths(),
            page: PageConfig::default(),
            title_font_size: default_title_font_size(),
            section_font_size: default_section_font_size(),
            body_font_size: default_body_font_size(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width_mm: default_page_width_mm(),
            height_mm: default_page_height_mm(),
            margin_mm: default_margin_mm(),
        }
    }
}

impl ReportConfig {
    /// 从 JSON 文件加载配置
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_column_widths.len() != 5 {
            return Err(ConfigError::InvalidValue(format!(
                "order_column_widths 必须为 5 列,实际 {} 列",
                self.order_column_widths.len()
            )));
        }
        if self.order_column_widths.iter().any(|w| *w == 0) {
            return Err(ConfigError::InvalidValue(
                "order_column_widths 不允许为 0".to_string(),
            ));
        }
        if self.page.margin_mm * 2.0 >= self.page.width_mm
            || self.page.margin_mm * 2.0 >= self.page.height_mm
        {
            return Err(ConfigError::InvalidValue(
                "页边距超出页面尺寸".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_order_column_widths() -> Vec<u32> {
    vec![15, 25, 20, 20, 20]
}

fn default_title_font_size() -> f32 {
    14.0
}

fn default_section_font_size() -> f32 {
    11.0
}

fn default_body_font_size() -> f32 {
    9.0
}

fn default_page_width_mm() -> f32 {
    210.0
}

fn default_page_height_mm() -> f32 {
    297.0
}

fn default_margin_mm() -> f32 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.order_column_widths, vec![15, 25, 20, 20, 20]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ReportConfig = serde_json::from_str(r#"{"title_font_size": 16.0}"#).unwrap();
        assert_eq!(config.title_font_size, 16.0);
        assert_eq!(config.order_column_widths, vec![15, 25, 20, 20, 20]);
        assert_eq!(config.page.width_mm, 210.0);
    }

    #[test]
    fn test_invalid_column_count_rejected() {
        let config: ReportConfig =
            serde_json::from_str(r#"{"order_column_widths": [50, 50]}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
