// ==========================================
// 工作计划报表生成 - 报表章节键
// ==========================================
// SectionKey 用于工序分组与章节排序:
// priority 升序优先, 同 priority 内按标题字典序。
// 命名分组 priority=0, 兜底分组("未指定…") priority=1,
// 因此兜底章节总是排在所有命名章节之后。
// ==========================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 命名分组的优先级
pub const PRIORITY_NAMED: i32 = 0;

/// 兜底分组的优先级（排在所有命名分组之后）
pub const PRIORITY_FALLBACK: i32 = 1;

// ==========================================
// SectionKey - 章节键
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionKey {
    title: String,     // 章节标题（已本地化）
    priority: i32,     // 排序优先级
}

impl SectionKey {
    /// 命名分组键
    pub fn named(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: PRIORITY_NAMED,
        }
    }

    /// 兜底分组键（缺失分类属性时使用）
    pub fn fallback(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: PRIORITY_FALLBACK,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// 是否为兜底分组
    pub fn is_fallback(&self) -> bool {
        self.priority > PRIORITY_NAMED
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Ord for SectionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialOrd for SectionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
