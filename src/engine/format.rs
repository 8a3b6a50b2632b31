// ==========================================
// 工作计划报表生成 - 本地化格式化
// ==========================================
// 职责: 数量/日期的 locale 敏感呈现
// 约束: 每次报表构建在栈上新建实例,绑定本次请求的 locale;
//       无共享可变状态,无需加锁
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};

/// 缺失日期的占位呈现
pub const MISSING_DATE_PLACEHOLDER: &str = "---";

/// 数量的小数位数
const QUANTITY_FRACTION_DIGITS: usize = 3;

// ==========================================
// ReportFormatter - 请求级格式化器
// ==========================================
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    locale: String,
    fraction_digits: usize,
    decimal_separator: char,
    date_pattern: &'static str,
    datetime_pattern: &'static str,
}

impl ReportFormatter {
    /// 构造绑定 locale 的格式化器
    pub fn new(locale: &str) -> Self {
        Self::with_fraction_digits(locale, QUANTITY_FRACTION_DIGITS)
    }

    /// 指定小数位数的构造
    pub fn with_fraction_digits(locale: &str, fraction_digits: usize) -> Self {
        Self {
            locale: locale.to_string(),
            fraction_digits,
            decimal_separator: decimal_separator_for(locale),
            date_pattern: "%Y-%m-%d",
            datetime_pattern: "%Y-%m-%d %H:%M",
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 格式化计划数量
    ///
    /// 缺失数量按 0 呈现（不是错误）
    pub fn format_quantity(&self, quantity: Option<f64>) -> String {
        let value = quantity.unwrap_or(0.0);
        let formatted = format!("{:.*}", self.fraction_digits, value);
        if self.decimal_separator == '.' {
            formatted
        } else {
            formatted.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// 格式化数量并追加计量单位后缀
    pub fn format_quantity_with_unit(&self, quantity: Option<f64>, unit: Option<&str>) -> String {
        match unit {
            Some(unit) => format!("{} {}", self.format_quantity(quantity), unit),
            None => self.format_quantity(quantity),
        }
    }

    /// 格式化日期
    ///
    /// 缺失日期呈现为字面占位 "---"
    pub fn format_date(&self, date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => date.format(self.date_pattern).to_string(),
            None => MISSING_DATE_PLACEHOLDER.to_string(),
        }
    }

    /// 格式化日期时间（报表头）
    pub fn format_datetime(&self, datetime: &NaiveDateTime) -> String {
        datetime.format(self.datetime_pattern).to_string()
    }
}

/// locale -> 小数分隔符
fn decimal_separator_for(locale: &str) -> char {
    let language = locale.split(['-', '_']).next().unwrap_or(locale);
    match language {
        "pl" | "de" | "fr" => ',',
        _ => '.',
    }
}
