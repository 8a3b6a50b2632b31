// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 报表生成始终显式传入 locale（请求级），
//       全局 locale 仅用于 CLI 等交互场景
// ==========================================

/// 获取当前全局语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置全局语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 判断语言代码是否在本系统的消息目录中
pub fn is_supported(locale: &str) -> bool {
    rust_i18n::available_locales!().iter().any(|l| *l == locale)
}
