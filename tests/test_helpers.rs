// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、种子数据、领域夹具
// ==========================================

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use std::error::Error;
use tempfile::NamedTempFile;
use workplan_reports::db::configure_sqlite_connection;
use workplan_reports::domain::{
    Division, Operation, OperationComponent, Order, Product, Technology, WorkPlan,
    WorkstationType,
};
use workplan_reports::WorkPlanType;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 打开测试数据库连接（统一 PRAGMA）
pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化数据库 schema
fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS division (
            division_id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS workstation_type (
            workstation_type_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            division_id TEXT REFERENCES division(division_id)
        );

        CREATE TABLE IF NOT EXISTS operation (
            operation_id TEXT PRIMARY KEY,
            number TEXT NOT NULL,
            name TEXT NOT NULL,
            workstation_type_id TEXT REFERENCES workstation_type(workstation_type_id)
        );

        CREATE TABLE IF NOT EXISTS product (
            product_id TEXT PRIMARY KEY,
            number TEXT NOT NULL,
            name TEXT NOT NULL,
            unit TEXT
        );

        CREATE TABLE IF NOT EXISTS technology (
            technology_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            end_product_id TEXT REFERENCES product(product_id)
        );

        CREATE TABLE IF NOT EXISTS technology_operation_component (
            component_id TEXT PRIMARY KEY,
            technology_id TEXT NOT NULL REFERENCES technology(technology_id),
            parent_id TEXT REFERENCES technology_operation_component(component_id),
            node_number TEXT NOT NULL,
            operation_id TEXT NOT NULL REFERENCES operation(operation_id)
        );

        CREATE TABLE IF NOT EXISTS orders (
            order_id TEXT PRIMARY KEY,
            number TEXT NOT NULL,
            name TEXT NOT NULL,
            planned_quantity REAL,
            due_date TEXT,
            product_id TEXT REFERENCES product(product_id),
            technology_id TEXT REFERENCES technology(technology_id)
        );

        CREATE TABLE IF NOT EXISTS work_plan (
            work_plan_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            plan_type TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS work_plan_order (
            work_plan_id TEXT NOT NULL REFERENCES work_plan(work_plan_id),
            order_id TEXT NOT NULL REFERENCES orders(order_id),
            PRIMARY KEY (work_plan_id, order_id)
        );
        "#,
    )?;
    Ok(())
}

// ==========================================
// 数据库种子函数
// ==========================================

pub fn insert_work_plan(
    conn: &Connection,
    work_plan_id: &str,
    name: &str,
    plan_type: &str,
    created_at: &str,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO work_plan (work_plan_id, name, plan_type, created_at) VALUES (?, ?, ?, ?)",
        params![work_plan_id, name, plan_type, created_at],
    )?;
    Ok(())
}

pub fn insert_product(
    conn: &Connection,
    product_id: &str,
    number: &str,
    name: &str,
    unit: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO product (product_id, number, name, unit) VALUES (?, ?, ?, ?)",
        params![product_id, number, name, unit],
    )?;
    Ok(())
}

pub fn insert_division(conn: &Connection, division_id: &str, name: &str) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO division (division_id, name) VALUES (?, ?)",
        params![division_id, name],
    )?;
    Ok(())
}

pub fn insert_workstation_type(
    conn: &Connection,
    workstation_type_id: &str,
    name: &str,
    division_id: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO workstation_type (workstation_type_id, name, division_id) VALUES (?, ?, ?)",
        params![workstation_type_id, name, division_id],
    )?;
    Ok(())
}

pub fn insert_operation(
    conn: &Connection,
    operation_id: &str,
    number: &str,
    name: &str,
    workstation_type_id: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO operation (operation_id, number, name, workstation_type_id) VALUES (?, ?, ?, ?)",
        params![operation_id, number, name, workstation_type_id],
    )?;
    Ok(())
}

pub fn insert_technology(
    conn: &Connection,
    technology_id: &str,
    name: &str,
    end_product_id: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO technology (technology_id, name, end_product_id) VALUES (?, ?, ?)",
        params![technology_id, name, end_product_id],
    )?;
    Ok(())
}

pub fn insert_component(
    conn: &Connection,
    component_id: &str,
    technology_id: &str,
    parent_id: Option<&str>,
    node_number: &str,
    operation_id: &str,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"INSERT INTO technology_operation_component
           (component_id, technology_id, parent_id, node_number, operation_id)
           VALUES (?, ?, ?, ?, ?)"#,
        params![component_id, technology_id, parent_id, node_number, operation_id],
    )?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn insert_order(
    conn: &Connection,
    order_id: &str,
    number: &str,
    name: &str,
    planned_quantity: Option<f64>,
    due_date: Option<&str>,
    product_id: Option<&str>,
    technology_id: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        r#"INSERT INTO orders
           (order_id, number, name, planned_quantity, due_date, product_id, technology_id)
           VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        params![
            order_id,
            number,
            name,
            planned_quantity,
            due_date,
            product_id,
            technology_id
        ],
    )?;
    Ok(())
}

pub fn link_order(
    conn: &Connection,
    work_plan_id: &str,
    order_id: &str,
) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT INTO work_plan_order (work_plan_id, order_id) VALUES (?, ?)",
        params![work_plan_id, order_id],
    )?;
    Ok(())
}

/// 种入一个典型工作计划:
/// - 订单 010 (工艺 T1: 车床工序树 2 节点)
/// - 订单 020 (工艺 T2: 无机台类型的单工序)
/// - 订单 030 (无工艺,不应产生工序)
pub fn seed_sample_work_plan(
    conn: &Connection,
    work_plan_id: &str,
    plan_type: &str,
) -> Result<(), Box<dyn Error>> {
    insert_work_plan(conn, work_plan_id, "周计划A", plan_type, "2024-06-01 08:30:00")?;

    insert_division(conn, "D1", "一车间")?;
    insert_workstation_type(conn, "W1", "车床", Some("D1"))?;
    insert_operation(conn, "OP1", "10", "粗车", Some("W1"))?;
    insert_operation(conn, "OP2", "20", "精车", Some("W1"))?;
    insert_operation(conn, "OP3", "30", "去毛刺", None)?;

    insert_product(conn, "P1", "PRD-01", "螺栓", Some("szt"))?;
    insert_product(conn, "P2", "PRD-02", "垫片", None)?;

    insert_technology(conn, "T1", "螺栓工艺", Some("P1"))?;
    insert_component(conn, "C1", "T1", None, "1.", "OP1")?;
    insert_component(conn, "C2", "T1", Some("C1"), "1.1.", "OP2")?;

    insert_technology(conn, "T2", "垫片工艺", Some("P2"))?;
    insert_component(conn, "C3", "T2", None, "1.", "OP3")?;

    insert_order(
        conn,
        "O1",
        "010",
        "订单甲",
        Some(12.5),
        Some("2024-07-01"),
        Some("P1"),
        Some("T1"),
    )?;
    insert_order(conn, "O2", "020", "订单乙", None, None, Some("P2"), Some("T2"))?;
    insert_order(conn, "O3", "030", "订单丙", Some(3.0), None, None, None)?;

    link_order(conn, work_plan_id, "O1")?;
    link_order(conn, work_plan_id, "O2")?;
    link_order(conn, work_plan_id, "O3")?;

    Ok(())
}

// ==========================================
// 领域夹具（不经数据库的引擎测试用）
// ==========================================

pub fn make_work_plan(plan_type: WorkPlanType, orders: Vec<Order>) -> WorkPlan {
    WorkPlan {
        work_plan_id: "WP-TEST".to_string(),
        name: "测试计划".to_string(),
        plan_type,
        created_at: make_datetime(),
        orders,
    }
}

pub fn make_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

pub fn make_order(number: &str, technology: Option<Technology>) -> Order {
    Order {
        order_id: format!("O-{}", number),
        number: number.to_string(),
        name: format!("订单 {}", number),
        planned_quantity: Some(1.0),
        due_date: None,
        product: None,
        technology,
    }
}

pub fn make_technology(
    name: &str,
    end_product: Option<Product>,
    operation_components: Vec<OperationComponent>,
) -> Technology {
    Technology {
        technology_id: format!("T-{}", name),
        name: name.to_string(),
        end_product,
        operation_components,
    }
}

pub fn make_component(
    node_number: &str,
    workstation_type: Option<WorkstationType>,
    children: Vec<OperationComponent>,
) -> OperationComponent {
    OperationComponent {
        node_number: node_number.to_string(),
        operation: Operation {
            number: format!("OP-{}", node_number),
            name: format!("工序 {}", node_number),
            workstation_type,
        },
        children,
    }
}

pub fn make_workstation(name: &str, division: Option<&str>) -> WorkstationType {
    WorkstationType {
        name: name.to_string(),
        division: division.map(|name| Division {
            name: name.to_string(),
        }),
    }
}
