#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use farmledger::sheet::{MemoryBackend, Row};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a private directory so the
/// developer's own config file is never read.
pub fn fl(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("farmledger");
    cmd.env("HOME", home).env_remove("FARMLEDGER_PASSWORD");
    cmd
}

/// Fresh scratch directory inside the system temp dir.
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_farmledger_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Workbook path inside `home`, removed if left over from a previous run.
pub fn setup_test_workbook(home: &str, name: &str) -> String {
    let path = PathBuf::from(home).join(format!("{}.sqlite", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Output file path inside `home`, removed if it exists.
pub fn temp_out(home: &str, name: &str, ext: &str) -> String {
    let path = PathBuf::from(home).join(format!("{}_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

pub fn init_workbook(home: &str, wb: &str) {
    fl(home)
        .args(["--workbook", wb, "--test", "init"])
        .assert()
        .success();
}

/// Workbook with one worker (W001, wage 550), one work type (WT001) and two
/// storage places (P001 Shed A, P002 Shed B).
pub fn init_workbook_with_data(home: &str, wb: &str) {
    init_workbook(home, wb);

    fl(home)
        .args(["--workbook", wb, "worker", "add", "Ravi", "--wage", "550"])
        .assert()
        .success();
    fl(home)
        .args(["--workbook", wb, "work-type", "add", "Weeding"])
        .assert()
        .success();
    fl(home)
        .args(["--workbook", wb, "place", "add", "Shed A"])
        .assert()
        .success();
    fl(home)
        .args(["--workbook", wb, "place", "add", "Shed B"])
        .assert()
        .success();
}

pub fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Memory backend seeded with the same reference data as
/// `init_workbook_with_data`.
pub fn seeded_backend() -> MemoryBackend {
    MemoryBackend::new()
        .with_sheet(
            "workers",
            vec![
                row(&["worker_id", "name_te", "phone", "default_daily_wage", "active", "notes"]),
                row(&["W001", "Ravi", "9876543210", "550", "Y", ""]),
                row(&["W002", "Sita", "", "500", "N", "left in June"]),
            ],
        )
        .with_sheet(
            "work_types",
            vec![row(&["work_type_id", "name_te"]), row(&["WT001", "Weeding"])],
        )
        .with_sheet(
            "storage_places",
            vec![
                row(&["place_id", "name_te"]),
                row(&["P001", "Shed A"]),
                row(&["P002", "Shed B"]),
            ],
        )
        .with_sheet(
            "tools",
            vec![
                row(&[
                    "tool_id",
                    "name_te",
                    "tool_type",
                    "quantity",
                    "status_te",
                    "current_place_id",
                    "current_place_te",
                    "last_updated",
                    "notes",
                ]),
                row(&["T001", "Sprayer", "spray", "1", "OK", "P001", "Shed A", "2025-01-10", ""]),
            ],
        )
}
