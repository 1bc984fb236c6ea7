use chrono::NaiveDate;
use farmledger::config::Config;
use farmledger::config::migrate::{migrate, missing_fields};
use farmledger::core::auth::AuthGate;
use farmledger::core::ids::next_id;
use farmledger::core::import::{normalize_phone, prepare_table};
use farmledger::errors::AppError;
use farmledger::models::pay_method::PayMethod;
use farmledger::models::tool_status::ToolStatus;
use farmledger::sheet::RetryPolicy;
use farmledger::store::cell::{parse_date, parse_flag, parse_int};
use farmledger::store::{Table, TableKind};
use farmledger::utils::date::{DateRange, date_or_today};
use farmledger::utils::formatting::rupees;
use std::collections::HashSet;
use std::fs;
use std::time::Duration;

mod common;
use common::{row, temp_home};

#[test]
fn test_next_id_on_empty_table() {
    let table = Table::empty(TableKind::Tools);
    assert_eq!(next_id(&table, "tool_id", "T", 3).expect("id"), "T001");
}

#[test]
fn test_next_id_grows_past_width() {
    let table = Table::from_sheet_rows(
        TableKind::Tools,
        vec![
            TableKind::Tools.header().iter().map(|h| h.to_string()).collect(),
            row(&["T999", "Axe", "", "1", "OK", "", "", "", ""]),
        ],
    )
    .expect("table");
    assert_eq!(next_id(&table, "tool_id", "T", 3).expect("id"), "T1000");
}

#[test]
fn test_next_id_rejects_prefix_only_id() {
    let table = Table::from_sheet_rows(
        TableKind::WorkTypes,
        vec![row(&["work_type_id", "name_te"]), row(&["WT", "Weeding"])],
    )
    .expect("table");
    assert!(matches!(
        next_id(&table, "work_type_id", "WT", 3),
        Err(AppError::MalformedIdentifier { .. })
    ));
}

#[test]
fn test_next_id_at_u64_ceiling_is_reported() {
    let table = Table::from_sheet_rows(
        TableKind::Workers,
        vec![
            TableKind::Workers.header().iter().map(|h| h.to_string()).collect(),
            row(&["W001", "Ravi", "", "550", "Y", ""]),
            row(&["W18446744073709551615", "Sita", "", "500", "Y", ""]),
        ],
    )
    .expect("table");

    match next_id(&table, "worker_id", "W", 3) {
        Err(AppError::MalformedIdentifier { id, .. }) => {
            assert_eq!(id, "W18446744073709551615")
        }
        other => panic!("expected MalformedIdentifier, got {:?}", other),
    }
}

#[test]
fn test_repeated_allocation_never_repeats_an_id() {
    let header: Vec<String> = TableKind::WorkTypes
        .header()
        .iter()
        .map(|h| h.to_string())
        .collect();
    let mut rows = vec![header, row(&["WT004", "Weeding"]), row(&["WT002", "Sowing"])];

    let mut seen: HashSet<String> = ["WT004".to_string(), "WT002".to_string()].into();
    let mut last = 4u64;

    for i in 0..1200 {
        let table = Table::from_sheet_rows(TableKind::WorkTypes, rows.clone()).expect("table");
        let id = next_id(&table, "work_type_id", "WT", 3).expect("id");

        let n: u64 = id.trim_start_matches("WT").parse().expect("numeric suffix");
        assert!(n > last, "{} does not follow {}", id, last);
        assert!(seen.insert(id.clone()), "{} allocated twice", id);

        last = n;
        rows.push(row(&[id.as_str(), format!("type {}", i).as_str()]));
    }

    assert_eq!(last, 1204);
}

#[test]
fn test_date_arguments_parse_like_date_cells() {
    for raw in ["2025-02-03", " 2025-02-03 ", "2024-02-29"] {
        assert_eq!(
            date_or_today(Some(raw)).ok(),
            parse_date(raw),
            "argument and cell disagree on '{}'",
            raw
        );
    }

    assert!(matches!(
        date_or_today(Some("03/02/2025")),
        Err(AppError::InvalidDate(_))
    ));
    assert_eq!(parse_date("03/02/2025"), None);
}

#[test]
fn test_numeric_cells_from_spreadsheet_exports() {
    assert_eq!(parse_int("550"), Some(550));
    assert_eq!(parse_int("550.0"), Some(550));
    assert_eq!(parse_int(""), Some(0));
    assert_eq!(parse_int("5.5"), None);
    assert_eq!(parse_flag("y"), Some(true));
    assert_eq!(parse_flag(""), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn test_code_parsing() {
    assert_eq!(PayMethod::from_code("upi"), Some(PayMethod::Upi));
    assert_eq!(PayMethod::from_code("నగదు"), Some(PayMethod::Cash));
    assert_eq!(ToolStatus::from_code("needs-repair"), Some(ToolStatus::NeedsRepair));
    assert_eq!(ToolStatus::from_code("lost"), None);
}

#[test]
fn test_phone_normalization() {
    assert_eq!(normalize_phone("9876543210.0"), "9876543210");
    assert_eq!(normalize_phone("9.87654321e+09"), "9876543210");
    assert_eq!(normalize_phone(" 98765 43210 "), "98765 43210");
    assert_eq!(normalize_phone("nan"), "");
}

#[test]
fn test_prepare_table_normalizes_phone_column() {
    let table = prepare_table(
        TableKind::Workers,
        vec![
            row(&["worker_id", "name_te", "phone", "default_daily_wage", "active", "notes"]),
            row(&["W001", "Ravi", "9876543210.0", "550.0", "Y", ""]),
        ],
    )
    .expect("table");
    assert_eq!(table.rows()[0][2], "9876543210");
}

#[test]
fn test_period_parsing() {
    let feb = DateRange::parse("2024-02").expect("period");
    assert_eq!(feb.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

    let span = DateRange::parse("2024:2025-03").expect("period");
    assert_eq!(span.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(span.end, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());

    assert!(DateRange::parse("2025-03:2024").is_err());
    assert!(DateRange::parse("march").is_err());
}

#[test]
fn test_rupee_grouping() {
    assert_eq!(rupees(550), "₹550");
    assert_eq!(rupees(125000), "₹1,25,000");
    assert_eq!(rupees(12345678), "₹1,23,45,678");
    assert_eq!(rupees(-1500), "-₹1,500");
}

#[test]
fn test_retry_delays_back_off_and_cap() {
    let policy = RetryPolicy {
        max_attempts: 5,
        base_delay_ms: 200,
        max_delay_ms: 500,
    };
    assert_eq!(policy.delay_for(1), Duration::from_millis(200));
    assert_eq!(policy.delay_for(2), Duration::from_millis(400));
    assert_eq!(policy.delay_for(3), Duration::from_millis(500));
}

#[test]
fn test_auth_gate() {
    let open = Config::default();
    assert!(AuthGate::new(&open).is_open());
    assert!(AuthGate::new(&open).check(None).is_ok());

    let locked = Config {
        app_password: Some("mirchi".into()),
        ..Config::default()
    };
    let gate = AuthGate::new(&locked);
    assert!(gate.check(Some("mirchi")).is_ok());
    assert!(matches!(gate.check(Some("wrong")), Err(AppError::AuthenticationFailed)));
    assert!(matches!(gate.check(None), Err(AppError::AuthenticationFailed)));
}

#[test]
fn test_config_migration_adds_missing_keys() {
    let home = temp_home("config_migrate");
    let path = std::path::PathBuf::from(&home).join("farmledger.conf");
    fs::write(
        &path,
        "workbook: /tmp/farm.sqlite\nretry:\n  max_attempts: 5\n",
    )
    .expect("write config");

    let missing = missing_fields(&path).expect("check");
    assert_eq!(
        missing,
        vec!["default_daily_wage", "retry.base_delay_ms", "retry.max_delay_ms"]
    );

    migrate(&path).expect("migrate");
    assert!(missing_fields(&path).expect("check").is_empty());

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.workbook, "/tmp/farm.sqlite");
    assert_eq!(cfg.default_daily_wage, 550);
    assert_eq!(cfg.retry.max_attempts, 5);
    assert_eq!(cfg.retry.base_delay_ms, 200);
}
