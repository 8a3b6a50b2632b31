// ==========================================
// 工作计划报表生成 - 工艺领域模型
// ==========================================
// 工艺 = 工序树 (OperationComponent 节点)
// node_number 为节点位置串 (如 "1.2.1."),
// 同一订单内按其排序可还原树的遍历次序
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Technology - 工艺
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    pub technology_id: String,                       // 工艺ID
    pub name: String,                                // 工艺名称
    pub end_product: Option<Product>,                // 成品 (按成品分组时必需)
    pub operation_components: Vec<OperationComponent>, // 工序树根节点
}

// Product 定义在 work_plan 模块,此处仅引用
use crate::domain::work_plan::Product;

impl Technology {
    /// 深度优先遍历全部工序节点
    pub fn walk(&self) -> Vec<&OperationComponent> {
        let mut nodes = Vec::new();
        for root in &self.operation_components {
            root.collect_into(&mut nodes);
        }
        nodes
    }
}

// ==========================================
// OperationComponent - 工序树节点
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationComponent {
    pub node_number: String,                   // 节点位置串
    pub operation: Operation,                  // 引用的工序
    pub children: Vec<OperationComponent>,     // 子节点
}

impl OperationComponent {
    fn collect_into<'a>(&'a self, nodes: &mut Vec<&'a OperationComponent>) {
        nodes.push(self);
        for child in &self.children {
            child.collect_into(nodes);
        }
    }
}

// ==========================================
// Operation - 工序
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub number: String,                              // 工序编号
    pub name: String,                                // 工序名称
    pub workstation_type: Option<WorkstationType>,   // 机台类型
}

// ==========================================
// WorkstationType - 机台类型
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkstationType {
    pub name: String,                    // 机台类型名称
    pub division: Option<Division>,      // 所属车间
}

// ==========================================
// Division - 车间
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub name: String,    // 车间名称
}
