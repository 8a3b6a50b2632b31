// ==========================================
// 报表 API 端到端测试
// ==========================================
// 测试范围:
// 1. 从数据库到 PDF 字节的完整链路
// 2. 交付元信息（文件名/MIME/附件提示）
// 3. 错误传播（未找到/配置错误/数据一致性错误）
// ==========================================

mod test_helpers;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use workplan_reports::api::{ApiError, SystemSession, WorkPlanReportApi};
use workplan_reports::repository::RepositoryError;

/// 创建测试数据库并返回连接
fn setup_test_db() -> (tempfile::NamedTempFile, Arc<Mutex<Connection>>) {
    let (temp_file, db_path) = test_helpers::create_test_db().expect("创建测试数据库失败");
    let conn = test_helpers::open_test_connection(&db_path).expect("打开数据库失败");
    (temp_file, Arc::new(Mutex::new(conn)))
}

#[test]
fn test_generate_pdf_end_to_end() {
    let (_temp_file, conn) = setup_test_db();
    {
        let c = conn.lock().unwrap();
        test_helpers::seed_sample_work_plan(&c, "WP1", "NO_DISTINCTION").expect("种子数据失败");
    }

    let api = WorkPlanReportApi::new(conn);
    let output = api
        .generate_pdf("WP1", "en", &SystemSession)
        .expect("生成报表失败");

    // PDF 魔数
    assert!(output.bytes.len() > 100, "PDF 字节过少: {}", output.bytes.len());
    assert_eq!(&output.bytes[0..4], b"%PDF", "缺少 PDF 魔数头");

    // 交付元信息
    assert!(output.file_name.ends_with(".pdf"));
    assert!(output.file_name.contains("2024-06-01"));
    assert_eq!(output.content_type, "application/pdf");
    assert!(output.content_disposition.starts_with("attachment; filename=\""));
    assert!(output.content_disposition.contains(&output.file_name));
}

#[test]
fn test_generate_pdf_zh_locale() {
    let (_temp_file, conn) = setup_test_db();
    {
        let c = conn.lock().unwrap();
        test_helpers::seed_sample_work_plan(&c, "WP1", "BY_WORKSTATION_TYPE").expect("种子数据失败");
    }

    let api = WorkPlanReportApi::new(conn);
    let output = api
        .generate_pdf("WP1", "zh-CN", &SystemSession)
        .expect("生成报表失败");

    assert_eq!(&output.bytes[0..4], b"%PDF");
}

#[test]
fn test_missing_work_plan_is_not_found() {
    let (_temp_file, conn) = setup_test_db();
    let api = WorkPlanReportApi::new(conn);

    let result = api.generate_pdf("NO-SUCH-PLAN", "en", &SystemSession);
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[test]
fn test_blank_id_is_invalid_input() {
    let (_temp_file, conn) = setup_test_db();
    let api = WorkPlanReportApi::new(conn);

    let result = api.generate_pdf("  ", "en", &SystemSession);
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_unknown_plan_type_aborts_before_rendering() {
    let (_temp_file, conn) = setup_test_db();
    {
        let c = conn.lock().unwrap();
        test_helpers::insert_work_plan(&c, "WP-BAD", "坏计划", "SOMETHING_ELSE", "2024-06-01 08:30:00")
            .expect("插入失败");
    }

    let api = WorkPlanReportApi::new(conn);
    let result = api.generate_pdf("WP-BAD", "en", &SystemSession);

    assert!(matches!(
        result,
        Err(ApiError::Repository(RepositoryError::FieldValueError { .. }))
    ));
}

#[test]
fn test_missing_end_product_aborts_build() {
    let (_temp_file, conn) = setup_test_db();
    {
        let c = conn.lock().unwrap();
        test_helpers::insert_work_plan(&c, "WP2", "按成品计划", "BY_END_PRODUCT", "2024-06-01 08:30:00")
            .expect("插入失败");
        // 工艺无成品: 按成品分组时属于数据一致性错误
        test_helpers::insert_operation(&c, "OP1", "10", "粗车", None).expect("插入失败");
        test_helpers::insert_technology(&c, "T1", "无成品工艺", None).expect("插入失败");
        test_helpers::insert_component(&c, "C1", "T1", None, "1.", "OP1").expect("插入失败");
        test_helpers::insert_order(&c, "O1", "010", "订单甲", Some(1.0), None, None, Some("T1"))
            .expect("插入失败");
        test_helpers::link_order(&c, "WP2", "O1").expect("插入失败");
    }

    let api = WorkPlanReportApi::new(conn);
    let result = api.generate_pdf("WP2", "en", &SystemSession);

    assert!(matches!(result, Err(ApiError::Report(_))));
}
