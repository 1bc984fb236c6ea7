use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row count per sheet, header row excluded.
pub fn sheet_row_counts(pool: &DbPool) -> rusqlite::Result<Vec<(String, i64)>> {
    let mut stmt = pool.conn.prepare(
        r#"
        SELECT s.name, COUNT(c.row_idx)
        FROM sheets s
        LEFT JOIN cells c ON c.sheet = s.name AND c.row_idx > 0
        GROUP BY s.name
        ORDER BY s.name ASC
        "#,
    )?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn print_workbook_info(pool: &mut DbPool, workbook_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(workbook_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, workbook_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SHEETS
    //
    let counts = sheet_row_counts(pool)?;
    println!("{}• Sheets:{} {}{}{}", CYAN, RESET, GREEN, counts.len(), RESET);
    for (name, rows) in &counts {
        println!("    {:<16} {} rows", name, rows);
    }

    //
    // 3) LAST ACTIVITY
    //
    let last: Option<(String, String, String)> = pool
        .conn
        .query_row(
            "SELECT date, operation, IFNULL(target, '') FROM log ORDER BY id DESC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    match last {
        Some((date, op, target)) => {
            println!("{}• Last activity:{} {} {} ({})", CYAN, RESET, date, op, target)
        }
        None => println!("{}• Last activity:{} {GREY}--{RESET}", CYAN, RESET),
    }

    println!();
    Ok(())
}
