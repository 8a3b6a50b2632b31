// ==========================================
// 工作计划报表生成 - 工作计划领域模型
// ==========================================
// 实体为外部数据的只读视图:
// 每次报表请求从数据仓储整体加载,构建期间不修改
// ==========================================

use crate::domain::technology::Technology;
use crate::domain::types::WorkPlanType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// WorkPlan - 工作计划聚合
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPlan {
    pub work_plan_id: String,        // 工作计划ID
    pub name: String,                // 名称
    pub plan_type: WorkPlanType,     // 分组模式
    pub created_at: NaiveDateTime,   // 创建时间
    pub orders: Vec<Order>,          // 关联订单
}

// ==========================================
// Order - 生产订单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,                // 订单ID
    pub number: String,                  // 订单号
    pub name: String,                    // 订单名称
    pub planned_quantity: Option<f64>,   // 计划数量 (缺失时报表按 0 呈现)
    pub due_date: Option<NaiveDate>,     // 交货日期 (缺失时报表呈现 "---")
    pub product: Option<Product>,        // 关联产品
    pub technology: Option<Technology>,  // 关联工艺 (缺失的订单不产生工序)
}

// ==========================================
// Product - 产品
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub number: String,           // 产品编号
    pub name: String,             // 产品名称
    pub unit: Option<String>,     // 计量单位
}

impl Product {
    /// 报表单元格呈现: "名称 (编号)"
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.number)
    }
}
