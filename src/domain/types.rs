// ==========================================
// 工作计划报表生成 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工作计划分组模式 (Work Plan Type)
// ==========================================
// 决定报表工序分组的方式
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkPlanType {
    NoDistinction,     // 不分组,单一章节
    ByEndProduct,      // 按成品分组
    ByWorkstationType, // 按机台类型分组
    ByDivision,        // 按车间分组
}

impl fmt::Display for WorkPlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkPlanType::NoDistinction => write!(f, "NO_DISTINCTION"),
            WorkPlanType::ByEndProduct => write!(f, "BY_END_PRODUCT"),
            WorkPlanType::ByWorkstationType => write!(f, "BY_WORKSTATION_TYPE"),
            WorkPlanType::ByDivision => write!(f, "BY_DIVISION"),
        }
    }
}

impl WorkPlanType {
    /// 从数据库字符串解析分组模式
    ///
    /// 未知编码返回 None,由仓储层转为配置错误（报表构建前即中止）
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NO_DISTINCTION" => Some(WorkPlanType::NoDistinction),
            "BY_END_PRODUCT" => Some(WorkPlanType::ByEndProduct),
            "BY_WORKSTATION_TYPE" => Some(WorkPlanType::ByWorkstationType),
            "BY_DIVISION" => Some(WorkPlanType::ByDivision),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkPlanType::NoDistinction => "NO_DISTINCTION",
            WorkPlanType::ByEndProduct => "BY_END_PRODUCT",
            WorkPlanType::ByWorkstationType => "BY_WORKSTATION_TYPE",
            WorkPlanType::ByDivision => "BY_DIVISION",
        }
    }
}
