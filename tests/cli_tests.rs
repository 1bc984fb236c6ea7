use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{fl, init_workbook, init_workbook_with_data, setup_test_workbook, temp_home, temp_out};

#[test]
fn test_init_creates_every_sheet() {
    let home = temp_home("cli_init");
    let wb = setup_test_workbook(&home, "init");

    fl(&home)
        .args(["--workbook", &wb, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Workbook initialized"));

    assert!(PathBuf::from(&wb).exists());

    fl(&home)
        .args(["--workbook", &wb, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("workers"))
        .stdout(contains("cold_storage"))
        .stdout(contains("tool_moves"));
}

#[test]
fn test_worker_add_edit_list() {
    let home = temp_home("cli_worker");
    let wb = setup_test_workbook(&home, "worker");
    init_workbook(&home, &wb);

    fl(&home)
        .args(["--workbook", &wb, "worker", "add", "Ravi", "--phone", "9876543210"])
        .assert()
        .success()
        .stdout(contains("Worker W001 added: Ravi (₹550/day)"));

    fl(&home)
        .args(["--workbook", &wb, "worker", "add", "Sita", "--wage", "500"])
        .assert()
        .success()
        .stdout(contains("W002"));

    fl(&home)
        .args(["--workbook", &wb, "worker", "edit", "W002", "--inactive"])
        .assert()
        .success()
        .stdout(contains("Worker W002 updated."));

    fl(&home)
        .args(["--workbook", &wb, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("Ravi"))
        .stdout(contains("9876543210"))
        .stdout(contains("Sita").not());

    fl(&home)
        .args(["--workbook", &wb, "worker", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Sita"));
}

#[test]
fn test_work_log_payments() {
    let home = temp_home("cli_work");
    let wb = setup_test_workbook(&home, "work");
    init_workbook_with_data(&home, &wb);

    fl(&home)
        .args([
            "--workbook", &wb, "work", "add", "--worker", "W001", "--type", "WT001", "--date",
            "2025-02-03",
        ])
        .assert()
        .success()
        .stdout(contains("WL000001"))
        .stdout(contains("UNPAID"));

    fl(&home)
        .args(["--workbook", &wb, "work", "pay", "WL000001", "300"])
        .assert()
        .success()
        .stdout(contains("PARTIAL"));

    fl(&home)
        .args(["--workbook", &wb, "work", "pay", "WL000001", "250", "--method", "UPI"])
        .assert()
        .success()
        .stdout(contains("(PAID)"));

    fl(&home)
        .args(["--workbook", &wb, "work", "pay", "WL000001", "1"])
        .assert()
        .failure()
        .stderr(contains("exceeds the remaining balance"));

    fl(&home)
        .args(["--workbook", &wb, "work", "list", "--period", "2025-02"])
        .assert()
        .success()
        .stdout(contains("2025-02-03"))
        .stdout(contains("UPI"));
}

#[test]
fn test_work_add_rejects_unknown_unit() {
    let home = temp_home("cli_work_unit");
    let wb = setup_test_workbook(&home, "work_unit");
    init_workbook_with_data(&home, &wb);

    fl(&home)
        .args([
            "--workbook", &wb, "work", "add", "--worker", "W001", "--type", "WT001", "--unit",
            "QUARTER",
        ])
        .assert()
        .failure()
        .stderr(contains("QUARTER"));
}

#[test]
fn test_tool_move_flow() {
    let home = temp_home("cli_tool");
    let wb = setup_test_workbook(&home, "tool");
    init_workbook_with_data(&home, &wb);

    fl(&home)
        .args([
            "--workbook", &wb, "tool", "add", "Sprayer", "--place", "P001", "--date", "2025-01-10",
        ])
        .assert()
        .success()
        .stdout(contains("Tool T001 added: Sprayer at Shed A"));

    fl(&home)
        .args(["--workbook", &wb, "tool", "move", "T001", "--to", "P001"])
        .assert()
        .failure()
        .stderr(contains("already at 'Shed A'"));

    fl(&home)
        .args([
            "--workbook", &wb, "tool", "move", "T001", "--to", "P002", "--date", "2025-03-01",
        ])
        .assert()
        .success()
        .stdout(contains("Shed A → Shed B"));

    fl(&home)
        .args(["--workbook", &wb, "tool", "list", "--place", "P002"])
        .assert()
        .success()
        .stdout(contains("Sprayer"));

    fl(&home)
        .args(["--workbook", &wb, "tool", "history", "T001"])
        .assert()
        .success()
        .stdout(contains("TM000001"))
        .stdout(contains("2025-03-01"));
}

#[test]
fn test_tool_status_shows_on_dashboard() {
    let home = temp_home("cli_dashboard");
    let wb = setup_test_workbook(&home, "dashboard");
    init_workbook_with_data(&home, &wb);

    fl(&home)
        .args(["--workbook", &wb, "tool", "add", "Pump", "--place", "P002"])
        .assert()
        .success();
    fl(&home)
        .args(["--workbook", &wb, "tool", "status", "T001", "BROKEN"])
        .assert()
        .success()
        .stdout(contains("BROKEN"));
    fl(&home)
        .args(["--workbook", &wb, "work", "add", "--worker", "W001", "--type", "WT001"])
        .assert()
        .success();

    fl(&home)
        .args(["--workbook", &wb, "dashboard", "--json"])
        .assert()
        .success()
        .stdout(contains("\"active_workers\": 1"))
        .stdout(contains("\"tools_needing_attention\": 1"))
        .stdout(contains("\"outstanding_total\": 550"));
}

#[test]
fn test_chekkulu_and_cold_storage() {
    let home = temp_home("cli_harvest");
    let wb = setup_test_workbook(&home, "harvest");
    init_workbook(&home, &wb);

    fl(&home)
        .args([
            "--workbook", &wb, "chekkulu", "add", "--date", "2025-01-15", "--rate", "210.5",
            "--weight", "32", "--tbgr", "TB-7",
        ])
        .assert()
        .success()
        .stdout(contains("CK000001"));

    fl(&home)
        .args(["--workbook", &wb, "chekkulu", "list", "--tbgr", "TB-7"])
        .assert()
        .success()
        .stdout(contains("210.5"));

    for day in ["2025-01-01", "2025-01-02"] {
        fl(&home)
            .args([
                "--workbook", &wb, "cold", "add", "--date", day, "--count", "10", "--serial",
                "S-1",
            ])
            .assert()
            .success();
    }

    fl(&home)
        .args(["--workbook", &wb, "cold", "remove", "CS000001", "--date", "2025-02-01"])
        .assert()
        .success()
        .stdout(contains("removed on 2025-02-01"));

    fl(&home)
        .args(["--workbook", &wb, "cold", "remove", "CS000001"])
        .assert()
        .failure()
        .stderr(contains("already removed"));

    fl(&home)
        .args(["--workbook", &wb, "cold", "list", "--active"])
        .assert()
        .success()
        .stdout(contains("CS000002"))
        .stdout(contains("S-1 / 2"))
        .stdout(contains("CS000001").not());
}

#[test]
fn test_password_gate() {
    let home = temp_home("cli_auth");
    let wb = setup_test_workbook(&home, "auth");
    init_workbook(&home, &wb);

    let conf_dir = PathBuf::from(&home).join(".farmledger");
    fs::create_dir_all(&conf_dir).expect("config dir");
    fs::write(
        conf_dir.join("farmledger.conf"),
        format!("workbook: {}\napp_password: mirchi\n", wb),
    )
    .expect("write config");

    fl(&home)
        .args(["worker", "list"])
        .assert()
        .failure()
        .stderr(contains("Authentication failed"));

    fl(&home)
        .args(["--password", "wrong", "worker", "list"])
        .assert()
        .failure();

    fl(&home)
        .args(["--password", "mirchi", "worker", "list"])
        .assert()
        .success()
        .stdout(contains("No workers found."));

    fl(&home)
        .env("FARMLEDGER_PASSWORD", "mirchi")
        .args(["worker", "list"])
        .assert()
        .success();

    fl(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("app_password"));
}

#[test]
fn test_export_csv_and_json_keep_header_order() {
    let home = temp_home("cli_export");
    let wb = setup_test_workbook(&home, "export");
    init_workbook_with_data(&home, &wb);

    let csv_out = temp_out(&home, "workers", "csv");
    fl(&home)
        .args([
            "--workbook", &wb, "export", "--table", "workers", "--format", "csv", "--file",
            &csv_out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(&csv_out).expect("csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("worker_id,name_te,phone,default_daily_wage,active,notes")
    );
    assert_eq!(lines.next(), Some("W001,Ravi,,550,Y,"));

    let json_out = temp_out(&home, "places", "json");
    fl(&home)
        .args([
            "--workbook", &wb, "export", "--table", "storage-places", "--format", "json",
            "--file", &json_out,
        ])
        .assert()
        .success();

    let json = fs::read_to_string(&json_out).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    assert_eq!(value[1]["name_te"], "Shed B");
    assert!(json.find("place_id").unwrap() < json.find("name_te").unwrap());
}

#[test]
fn test_export_requires_absolute_path() {
    let home = temp_home("cli_export_rel");
    let wb = setup_test_workbook(&home, "export_rel");
    init_workbook(&home, &wb);

    fl(&home)
        .args([
            "--workbook", &wb, "export", "--table", "tools", "--file", "tools.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_import_directory() {
    let home = temp_home("cli_import");
    let wb = setup_test_workbook(&home, "import");
    init_workbook(&home, &wb);

    let dir = PathBuf::from(&home).join("csv_in");
    fs::create_dir_all(&dir).expect("csv dir");
    fs::write(
        dir.join("workers.csv"),
        "worker_id,name_te,phone,default_daily_wage,active,notes\n\
         W001,Ravi,9876543210.0,550.0,Y,\n\
         W002,Sita,,500,N,\n",
    )
    .expect("workers.csv");
    fs::write(
        dir.join("storage_places.csv"),
        "place_id,name_te\nP001,Shed A\n",
    )
    .expect("storage_places.csv");

    fl(&home)
        .args(["--workbook", &wb, "import", "--dir", &dir.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Import completed: 2 tables, 3 rows"));

    fl(&home)
        .args(["--workbook", &wb, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("9876543210").and(contains("9876543210.0").not()));

    fl(&home)
        .args(["--workbook", &wb, "worker", "add", "Lakshmi"])
        .assert()
        .success()
        .stdout(contains("W003"));
}

#[test]
fn test_import_rejects_bad_header_without_writing() {
    let home = temp_home("cli_import_bad");
    let wb = setup_test_workbook(&home, "import_bad");
    init_workbook_with_data(&home, &wb);

    let dir = PathBuf::from(&home).join("csv_bad");
    fs::create_dir_all(&dir).expect("csv dir");
    fs::write(dir.join("storage_places.csv"), "place_id,name_te\nP009,Barn\n")
        .expect("storage_places.csv");
    fs::write(dir.join("workers.csv"), "worker_id,name\nW001,Ravi\n").expect("workers.csv");

    fl(&home)
        .args(["--workbook", &wb, "import", "--dir", &dir.to_string_lossy()])
        .assert()
        .failure()
        .stderr(contains("missing required column"));

    fl(&home)
        .args(["--workbook", &wb, "place", "list"])
        .assert()
        .success()
        .stdout(contains("Shed A"))
        .stdout(contains("Barn").not());
}

#[test]
fn test_backup_and_log() {
    let home = temp_home("cli_backup");
    let wb = setup_test_workbook(&home, "backup");
    init_workbook_with_data(&home, &wb);

    let plain = temp_out(&home, "backup", "sqlite");
    fl(&home)
        .args(["--workbook", &wb, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(PathBuf::from(&plain).exists());

    let zipped = temp_out(&home, "backup_zip", "zip");
    fl(&home)
        .args(["--workbook", &wb, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(PathBuf::from(&zipped).exists());
    assert!(!PathBuf::from(&zipped).with_extension("sqlite").exists());

    fl(&home)
        .args(["--workbook", &wb, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("save"))
        .stdout(contains("backup"));
}

#[test]
fn test_backup_zip_beside_workbook_keeps_workbook() {
    let home = temp_home("cli_backup_beside");
    let wb = setup_test_workbook(&home, "farm");
    init_workbook_with_data(&home, &wb);
    let size_before = fs::metadata(&wb).expect("workbook metadata").len();

    let sibling = PathBuf::from(&home).join("other.sqlite");
    fs::write(&sibling, b"keep me").expect("write sibling");

    let zipped = PathBuf::from(&home).join("farm.zip");
    fl(&home)
        .args([
            "--workbook",
            &wb,
            "backup",
            "--file",
            &zipped.to_string_lossy(),
            "--compress",
        ])
        .assert()
        .success()
        .stderr(contains("Failed to write internal log").not());

    assert_eq!(fs::metadata(&wb).expect("workbook metadata").len(), size_before);
    assert!(zipped.exists());

    let other_zip = PathBuf::from(&home).join("other.zip");
    fl(&home)
        .args([
            "--workbook",
            &wb,
            "backup",
            "--file",
            &other_zip.to_string_lossy(),
            "--compress",
        ])
        .assert()
        .success();
    assert_eq!(fs::read(&sibling).expect("read sibling"), b"keep me");

    fl(&home)
        .args(["--workbook", &wb, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("Ravi"));
}

#[test]
fn test_backup_onto_workbook_is_refused() {
    let home = temp_home("cli_backup_self");
    let wb = setup_test_workbook(&home, "self");
    init_workbook_with_data(&home, &wb);
    let size_before = fs::metadata(&wb).expect("workbook metadata").len();

    fl(&home)
        .args(["--workbook", &wb, "backup", "--file", &wb, "--force"])
        .assert()
        .failure()
        .stderr(contains("workbook itself"));

    assert_eq!(fs::metadata(&wb).expect("workbook metadata").len(), size_before);

    fl(&home)
        .args(["--workbook", &wb, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("Ravi"));
}
