use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const SOURCE_DATA: &str = r#"[
    {
        "employees": {
            "name": "Ada Lovelace",
            "workforceUtilisation": {
                "utilisationRateLastTwelveMonths": "0.8123",
                "utilisationRateYearToDate": 0.755,
                "lastThreeMonthsIndividually": [
                    {"month": "May", "utilisationRate": "0.9"},
                    {"month": "June", "utilisationRate": 0.4567}
                ]
            },
            "costsByMonth": {
                "potentialEarningsByMonth": [
                    {"month": "2024-05", "costs": "100.5"},
                    {"month": "2024-07", "costs": "88"},
                    {"month": "2024-06", "costs": "x"}
                ]
            }
        }
    },
    {
        "externals": {
            "name": "Jane Doe",
            "workforceUtilisation": {
                "lastThreeMonthsIndividually": [
                    {"month": "July", "utilisationRate": 0.3},
                    {"month": "August", "utilisationRate": 0.2}
                ]
            }
        }
    },
    {}
]"#;

fn write_source(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("source-data.json");
    std::fs::write(&path, SOURCE_DATA).unwrap();
    path
}

fn wftable(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wftable").unwrap();
    cmd.env("WFTABLE_DATA_DIR", config_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn show_prints_table() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path());

    wftable(&temp_dir)
        .arg("show")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Past 12 Months"))
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("88.00 EUR"))
        .stdout(predicate::str::contains("August").not())
        .stdout(predicate::str::contains(
            "3 people (1 employees, 1 externals, 1 unclassified)",
        ));
}

#[test]
fn columns_lists_discovered_months() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path());

    wftable(&temp_dir)
        .arg("columns")
        .arg(&source)
        .assert()
        .success()
        .stdout(
            "person\tPerson\n\
             past12Months\tPast 12 Months\n\
             y2d\tYTD\n\
             may\tMay\n\
             june\tJune\n\
             july\tJuly\n\
             netEarningsPrevMonth\tNet Earnings Prev Month\n",
        );
}

#[test]
fn months_flag_limits_columns() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path());

    wftable(&temp_dir)
        .args(["columns", "--months", "4"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("august\tAugust"));
}

#[test]
fn export_csv_writes_rows() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path());
    let output = temp_dir.path().join("table.csv");

    wftable(&temp_dir)
        .arg("export")
        .arg(&source)
        .args(["--format", "csv", "--currency", "USD", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 rows"));

    let csv = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Person,Past 12 Months,YTD,May,June,July,Net Earnings Prev Month"
    );
    assert_eq!(lines[1], "Ada Lovelace,81%,76%,90%,46%,0%,88.00 USD");
    assert_eq!(lines[2], "Jane Doe,0%,0%,0%,0%,30%,\u{2013}");
    assert_eq!(lines[3], "\u{2013},0%,0%,0%,0%,0%,\u{2013}");
}

#[test]
fn export_json_document() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path());
    let output = temp_dir.path().join("table.json");

    wftable(&temp_dir)
        .arg("export")
        .arg(&source)
        .arg("-o")
        .arg(&output)
        .arg("--pretty")
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["rows"].as_array().unwrap().len(), 3);
    assert_eq!(value["rows"][1]["person"], "Jane Doe");
    assert_eq!(value["rows"][1]["july"], "30%");
    assert_eq!(value["columns"][6]["displayLabel"], "Net Earnings Prev Month");
}

#[test]
fn default_input_from_settings() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path());
    let settings = serde_json::json!({ "default_input": source, "month_column_limit": 1 });
    std::fs::write(temp_dir.path().join("config.json"), settings.to_string()).unwrap();

    wftable(&temp_dir)
        .arg("columns")
        .assert()
        .success()
        .stdout(predicate::str::contains("may\tMay"))
        .stdout(predicate::str::contains("june").not());
}

#[test]
fn missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    wftable(&temp_dir)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input file given"));
}

#[test]
fn non_array_document_fails() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("bad.json");
    std::fs::write(&source, r#"{"employees": {}}"#).unwrap();

    wftable(&temp_dir)
        .arg("show")
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a JSON array"));
}

#[test]
fn config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    wftable(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Month columns: 3"))
        .stdout(predicate::str::contains("Currency:      EUR"));
}

#[test]
fn config_set_persists_settings() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(temp_dir.path());

    wftable(&temp_dir)
        .args(["config", "set", "--months", "1", "--currency", "USD", "--default-input"])
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings to:"));

    assert!(temp_dir.path().join("config.json").exists());

    wftable(&temp_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month columns: 1"))
        .stdout(predicate::str::contains("Currency:      USD"));

    wftable(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("88.00 USD"))
        .stdout(predicate::str::contains("June").not());
}
