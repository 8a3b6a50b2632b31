// Small dev utility: render a work-plan PDF report from a SQLite database.
//
// Usage:
//   cargo run --bin generate_work_plan_report -- <db_path> <work_plan_id> [locale] [out_path]
//
// This is intentionally lightweight: it loads one aggregate, renders the PDF
// and writes it next to the current directory.

use std::sync::{Arc, Mutex};
use workplan_reports::api::{SystemSession, WorkPlanReportApi};
use workplan_reports::db::open_sqlite_connection;
use workplan_reports::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let db_path = args.next().ok_or("missing <db_path> argument")?;
    let work_plan_id = args.next().ok_or("missing <work_plan_id> argument")?;
    let locale = args.next().unwrap_or_else(|| "zh-CN".to_string());

    if !workplan_reports::i18n::is_supported(&locale) {
        return Err(format!("unsupported locale: {}", locale).into());
    }

    let conn = Arc::new(Mutex::new(open_sqlite_connection(&db_path)?));
    let api = WorkPlanReportApi::new(conn);

    let output = api.generate_pdf(&work_plan_id, &locale, &SystemSession)?;

    let out_path = args.next().unwrap_or_else(|| output.file_name.clone());
    std::fs::write(&out_path, &output.bytes)?;

    println!("{} ({} bytes)", out_path, output.bytes.len());
    Ok(())
}
