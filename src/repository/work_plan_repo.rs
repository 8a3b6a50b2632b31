// ==========================================
// 工作计划报表生成 - 工作计划聚合仓储
// ==========================================
// 职责: 按 ID 整体加载工作计划聚合
// (工作计划 -> 订单 -> 产品/工艺 -> 工序树)
// 每次报表请求全新加载,报表构建期间只读
// ==========================================

use crate::domain::technology::{
    Division, Operation, OperationComponent, Technology, WorkstationType,
};
use crate::domain::types::WorkPlanType;
use crate::domain::work_plan::{Order, Product, WorkPlan};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ==========================================
// WorkPlanRepository - 工作计划仓储
// ==========================================
pub struct WorkPlanRepository {
    conn: Arc<Mutex<Connection>>,
}

impl WorkPlanRepository {
    /// 创建新的WorkPlanRepository实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 按 ID 加载完整的工作计划聚合
    ///
    /// # 返回
    /// - `Ok(Some(WorkPlan))`: 找到并完整加载
    /// - `Ok(None)`: 未找到
    /// - `Err(FieldValueError)`: 分组模式编码无法识别（配置错误）
    /// - `Err`: 数据库错误
    pub fn find_by_id(&self, work_plan_id: &str) -> RepositoryResult<Option<WorkPlan>> {
        let conn = self.get_conn()?;

        let header = match conn.query_row(
            r#"SELECT work_plan_id, name, plan_type, created_at
               FROM work_plan
               WHERE work_plan_id = ?"#,
            params![work_plan_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    parse_datetime_column(row, 3)?,
                ))
            },
        ) {
            Ok(header) => header,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let (work_plan_id, name, type_code, created_at) = header;

        let plan_type = WorkPlanType::from_db_str(&type_code).ok_or_else(|| {
            RepositoryError::FieldValueError {
                field: "plan_type".to_string(),
                message: format!("无法识别的工作计划分组模式: {}", type_code),
            }
        })?;

        let orders = self.load_orders(&conn, &work_plan_id)?;

        Ok(Some(WorkPlan {
            work_plan_id,
            name,
            plan_type,
            created_at,
            orders,
        }))
    }

    /// 加载工作计划关联的全部订单（含产品与工艺）
    fn load_orders(&self, conn: &Connection, work_plan_id: &str) -> RepositoryResult<Vec<Order>> {
        let mut stmt = conn.prepare(
            r#"SELECT o.order_id, o.number, o.name, o.planned_quantity, o.due_date,
                      o.technology_id,
                      p.number, p.name, p.unit
               FROM orders o
               JOIN work_plan_order link ON link.order_id = o.order_id
               LEFT JOIN product p ON p.product_id = o.product_id
               WHERE link.work_plan_id = ?
               ORDER BY o.number"#,
        )?;

        let rows = stmt
            .query_map(params![work_plan_id], |row| {
                Ok(OrderRow {
                    order_id: row.get(0)?,
                    number: row.get(1)?,
                    name: row.get(2)?,
                    planned_quantity: row.get(3)?,
                    due_date: parse_optional_date_column(row, 4)?,
                    technology_id: row.get(5)?,
                    product_number: row.get(6)?,
                    product_name: row.get(7)?,
                    product_unit: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<OrderRow>, _>>()?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let technology = match row.technology_id.as_deref() {
                Some(technology_id) => Some(self.load_technology(conn, technology_id)?),
                None => None,
            };

            let product = match (row.product_number, row.product_name) {
                (Some(number), Some(name)) => Some(Product {
                    number,
                    name,
                    unit: row.product_unit,
                }),
                _ => None,
            };

            orders.push(Order {
                order_id: row.order_id,
                number: row.number,
                name: row.name,
                planned_quantity: row.planned_quantity,
                due_date: row.due_date,
                product,
                technology,
            });
        }

        Ok(orders)
    }

    /// 加载工艺及其工序树
    fn load_technology(
        &self,
        conn: &Connection,
        technology_id: &str,
    ) -> RepositoryResult<Technology> {
        let (technology_id, name, end_product) = conn
            .query_row(
                r#"SELECT t.technology_id, t.name,
                          p.number, p.name, p.unit
                   FROM technology t
                   LEFT JOIN product p ON p.product_id = t.end_product_id
                   WHERE t.technology_id = ?"#,
                params![technology_id],
                |row| {
                    let end_product = match (
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                    ) {
                        (Some(number), Some(name)) => Some(Product {
                            number,
                            name,
                            unit: row.get(4)?,
                        }),
                        _ => None,
                    };
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        end_product,
                    ))
                },
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                    entity: "technology".to_string(),
                    id: technology_id.to_string(),
                },
                e => e.into(),
            })?;

        let operation_components = self.load_operation_tree(conn, &technology_id)?;

        Ok(Technology {
            technology_id,
            name,
            end_product,
            operation_components,
        })
    }

    /// 从 parent_id 关系重建工序树
    ///
    /// 同级节点按 node_number 排序（查询已排序,分组时保持插入序）
    fn load_operation_tree(
        &self,
        conn: &Connection,
        technology_id: &str,
    ) -> RepositoryResult<Vec<OperationComponent>> {
        let mut stmt = conn.prepare(
            r#"SELECT c.component_id, c.parent_id, c.node_number,
                      op.number, op.name,
                      w.name, d.name
               FROM technology_operation_component c
               JOIN operation op ON op.operation_id = c.operation_id
               LEFT JOIN workstation_type w ON w.workstation_type_id = op.workstation_type_id
               LEFT JOIN division d ON d.division_id = w.division_id
               WHERE c.technology_id = ?
               ORDER BY c.node_number"#,
        )?;

        let rows = stmt
            .query_map(params![technology_id], |row| {
                let workstation_name: Option<String> = row.get(5)?;
                let division_name: Option<String> = row.get(6)?;
                Ok(ComponentRow {
                    component_id: row.get(0)?,
                    parent_id: row.get(1)?,
                    node_number: row.get(2)?,
                    operation: Operation {
                        number: row.get(3)?,
                        name: row.get(4)?,
                        workstation_type: workstation_name.map(|name| WorkstationType {
                            name,
                            division: division_name.map(|name| Division { name }),
                        }),
                    },
                })
            })?
            .collect::<Result<Vec<ComponentRow>, _>>()?;

        let mut children: HashMap<Option<String>, Vec<ComponentRow>> = HashMap::new();
        for row in rows {
            children
                .entry(row.parent_id.clone())
                .or_default()
                .push(row);
        }

        Ok(assemble_components(&mut children, &None))
    }
}

/// 订单查询的中间行
struct OrderRow {
    order_id: String,
    number: String,
    name: String,
    planned_quantity: Option<f64>,
    due_date: Option<NaiveDate>,
    technology_id: Option<String>,
    product_number: Option<String>,
    product_name: Option<String>,
    product_unit: Option<String>,
}

/// 工序树查询的中间行
struct ComponentRow {
    component_id: String,
    parent_id: Option<String>,
    node_number: String,
    operation: Operation,
}

/// 自根向下递归组装工序树
fn assemble_components(
    children: &mut HashMap<Option<String>, Vec<ComponentRow>>,
    parent_id: &Option<String>,
) -> Vec<OperationComponent> {
    let rows = children.remove(parent_id).unwrap_or_default();
    rows.into_iter()
        .map(|row| {
            let child_key = Some(row.component_id);
            OperationComponent {
                node_number: row.node_number,
                operation: row.operation,
                children: assemble_components(children, &child_key),
            }
        })
        .collect()
}

/// 解析 TEXT 列中的日期时间 ("%Y-%m-%d %H:%M:%S")
fn parse_datetime_column(row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(index)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// 解析 TEXT 列中的可空日期 ("%Y-%m-%d")
fn parse_optional_date_column(
    row: &rusqlite::Row<'_>,
    index: usize,
) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(index)?;
    match raw {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    index,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            }),
        None => Ok(None),
    }
}
