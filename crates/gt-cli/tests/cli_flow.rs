//! End-to-end tests driving the `gt` binary against an exported journal.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn gt_binary() -> String {
    env!("CARGO_BIN_EXE_gt").to_string()
}

const PLANTS: &str = r#"[
    {
        "id": "p1",
        "name": "Blue Dream",
        "strain": "Sativa",
        "plantDate": 1600000000000,
        "medium": "COCO",
        "images": [],
        "actions": [
            {"type": "StageChange", "newStage": "VEGETATION", "date": 1600000000000},
            {"type": "Action", "action": "TOP", "date": 1600500000000},
            {"type": "StageChange", "newStage": "FLOWER", "date": 1602592000000},
            {"type": "Water", "ph": 6.2, "runoff": 6.6, "amount": 1500.0, "ppm": 800.0,
             "additives": [{"amount": 2.0, "description": "Bloom"}],
             "date": 1603456000000, "notes": "first feed"}
        ]
    },
    {"id": "p2", "name": "Northern Lights", "plantDate": 1600864000000, "actions": null}
]"#;

const GARDENS: &str = r#"[{"name": "Tent", "plantIds": ["p1", "p2"]}]"#;

const SCHEDULES: &str = r#"[{
    "id": "s1",
    "name": "Base",
    "description": "",
    "schedules": [
        {"id": "d2", "dateRange": [1, 60], "stageRange": ["FLOWER"],
         "additives": [{"amount": 2.0, "description": "Bloom"}]},
        {"id": "d1", "dateRange": [1, 7], "stageRange": ["SEEDLING", "VEGETATION"],
         "additives": [{"amount": 1.0, "description": "Grow"}]}
    ]
}]"#;

fn write_journal(dir: &Path) {
    std::fs::write(dir.join("plants.json"), PLANTS).unwrap();
    std::fs::write(dir.join("gardens.json"), GARDENS).unwrap();
    std::fs::write(dir.join("schedules.json"), SCHEDULES).unwrap();
}

/// Runs `gt` with an isolated home directory so user config is not picked up.
fn gt(home: &Path, args: &[&str]) -> Output {
    Command::new(gt_binary())
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .env_remove("GT_JOURNAL_DIR")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run gt")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "gt should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_plants_lists_every_plant() {
    let temp = TempDir::new().unwrap();
    write_journal(temp.path());
    let journal = temp.path().to_str().unwrap();

    let output = stdout_of(&gt(temp.path(), &["--journal", journal, "plants"]));
    assert!(output.starts_with("PLANTS (2)"), "{output}");
    assert!(output.contains("Blue Dream [p1] - Flowering"), "{output}");
    assert!(output.contains("Northern Lights [p2] - Planted"), "{output}");
    assert!(output.contains("6.2 pH ➙ 6.6 pH 1.5l"), "{output}");
}

#[test]
fn test_plants_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    write_journal(temp.path());
    let journal = temp.path().to_str().unwrap();

    let output = stdout_of(&gt(temp.path(), &["--journal", journal, "plants", "--json"]));
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["stage"], "FLOWER");
}

#[test]
fn test_show_resolves_plant_by_name() {
    let temp = TempDir::new().unwrap();
    write_journal(temp.path());
    let journal = temp.path().to_str().unwrap();

    let output = stdout_of(&gt(
        temp.path(),
        &["--journal", journal, "show", "blue dream"],
    ));
    assert!(output.starts_with("Blue Dream [p1]\nMedium: Coco coir\n"), "{output}");
    assert!(output.contains("Sativa - Planted"), "{output}");
    assert!(output.contains(" + 2.0ml additives"), "{output}");
    // Flower started 2020-10-13 and the journal is viewed later than day 60.
    assert!(output.contains("  Vegetation    30 days"), "{output}");
    assert!(!output.contains("Feeding (Base)"), "{output}");
}

#[test]
fn test_stages_json() {
    let temp = TempDir::new().unwrap();
    write_journal(temp.path());
    let journal = temp.path().to_str().unwrap();

    let output = stdout_of(&gt(
        temp.path(),
        &["--journal", journal, "stages", "p1", "--json"],
    ));
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed[0]["stage"], "VEGETATION");
    assert_eq!(parsed[0]["days"], 30);
    assert_eq!(parsed[1]["stage"], "FLOWER");
}

#[test]
fn test_schedules_and_gardens() {
    let temp = TempDir::new().unwrap();
    write_journal(temp.path());
    let journal = temp.path().to_str().unwrap();

    let schedules = stdout_of(&gt(temp.path(), &["--journal", journal, "schedules"]));
    let grow = schedules.find("Seedling-Vegetation, days 1-7").unwrap();
    let bloom = schedules.find("Flowering, days 1-60").unwrap();
    assert!(grow < bloom, "{schedules}");

    let gardens = stdout_of(&gt(temp.path(), &["--journal", journal, "gardens"]));
    assert!(gardens.starts_with("Tent (2 plants)"), "{gardens}");
}

#[test]
fn test_config_file_sets_units() {
    let temp = TempDir::new().unwrap();
    write_journal(temp.path());
    let config_path = temp.path().join("gt.toml");
    std::fs::write(
        &config_path,
        format!(
            "journal_dir = {:?}\n\n[display]\ndelivery_unit = \"ml\"\ntds_ec = true\n",
            temp.path().to_str().unwrap()
        ),
    )
    .unwrap();

    let output = stdout_of(&gt(
        temp.path(),
        &["--config", config_path.to_str().unwrap(), "waterings", "p1"],
    ));
    assert!(output.contains("EC: 1.6, Amount: 1500.0ml"), "{output}");
    assert!(output.contains("Notes: first feed"), "{output}");
}

#[test]
fn test_unknown_plant_fails() {
    let temp = TempDir::new().unwrap();
    write_journal(temp.path());
    let journal = temp.path().to_str().unwrap();

    let output = gt(temp.path(), &["--journal", journal, "show", "p9"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no plant with ID or name 'p9'"), "{stderr}");
}

#[test]
fn test_malformed_journal_reports_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("plants.json"), "[{").unwrap();
    let journal = temp.path().to_str().unwrap();

    let output = gt(temp.path(), &["--journal", journal, "status"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("plants.json"), "{stderr}");
}

#[test]
fn test_status_on_empty_journal() {
    let temp = TempDir::new().unwrap();
    let journal = temp.path().to_str().unwrap();

    let output = stdout_of(&gt(temp.path(), &["--journal", journal, "status"]));
    assert!(output.contains("Plants: 0"), "{output}");
    assert!(output.contains("Units: ml additives, l water, C"), "{output}");
}
