use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn catalog_prep(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("catalog-prep"));
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CATALOG_PREP_SUMMARY_TOP")
        .env_remove("CATALOG_PREP_LOG_FILE");
    cmd
}

fn game(sid: i64, languages: &str, meta: Value, grnk: Value, igdb: Value) -> Value {
    json!({
        "sid": sid,
        "store_url": "u",
        "published_store": "d",
        "image": "i",
        "name": "Game",
        "current_price": 10,
        "platforms": "Win,Mac",
        "categories": "Single-player",
        "genres": "Action",
        "tags": "Indie",
        "gfq_difficulty": 3,
        "hltb_complete": 5,
        "languages": languages,
        "meta_score": meta,
        "grnk_score": grnk,
        "igdb_score": igdb
    })
}

fn write_input(dir: &Path, name: &str, records: &[Value]) {
    fs::write(dir.join(name), serde_json::to_string(records).unwrap()).unwrap();
}

fn read_output(path: &Path) -> Vec<Value> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_bare_invocation_uses_fixed_paths() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "steamdb.json",
        &[
            game(1, "English,French", json!(80), json!(90), Value::Null),
            game(2, "French", json!(80), json!(90), Value::Null),
            game(3, "English", Value::Null, Value::Null, Value::Null),
            game(4, "German,English", Value::Null, Value::Null, json!(60)),
        ],
    );

    catalog_prep(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = read_output(&dir.path().join("project_data.json"));
    assert_eq!(output.len(), 2);
    assert_eq!(
        output[0],
        json!({
            "id": 1,
            "url": "u",
            "date": "d",
            "image": "i",
            "name": "Game",
            "price": 10,
            "os": ["Win", "Mac"],
            "mode": ["Single-player"],
            "genres": ["Action"],
            "tags": ["Indie"],
            "difficulty": 3,
            "duration": 5,
            "rating": 85.0
        })
    );
    assert_eq!(output[1]["id"], json!(4));
    assert_eq!(output[1]["rating"], json!(60.0));
}

#[test]
fn test_output_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "steamdb.json",
        &[game(1, "English", json!(50), Value::Null, Value::Null)],
    );

    catalog_prep(dir.path()).arg("transform").assert().success();

    let written = fs::read_to_string(dir.path().join("project_data.json")).unwrap();
    assert!(written.starts_with("[\n  {\n    \"id\": 1,\n    \"url\": \"u\","));
}

#[test]
fn test_explicit_paths() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "raw.json",
        &[game(9, "English", json!(70), json!(80), json!(90))],
    );

    catalog_prep(dir.path())
        .args(["transform", "--input", "raw.json", "--output", "clean.json"])
        .assert()
        .success();

    let output = read_output(&dir.path().join("clean.json"));
    assert_eq!(output[0]["rating"], json!(80.0));
    assert!(!dir.path().join("project_data.json").exists());
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();

    catalog_prep(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT-001"));

    assert!(!dir.path().join("project_data.json").exists());
}

#[test]
fn test_malformed_input_keeps_previous_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("steamdb.json"), "[{\"sid\": 1,").unwrap();
    fs::write(dir.path().join("project_data.json"), "previous").unwrap();

    catalog_prep(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT-002"));

    assert_eq!(
        fs::read_to_string(dir.path().join("project_data.json")).unwrap(),
        "previous"
    );
}

#[test]
fn test_same_input_and_output_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), "steamdb.json", &[]);

    catalog_prep(dir.path())
        .args(["transform", "--output", "steamdb.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must differ"));
}

#[test]
fn test_summary_reads_transformed_catalog() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "steamdb.json",
        &[
            game(1, "English", json!(80), Value::Null, Value::Null),
            game(2, "English", json!(60), Value::Null, Value::Null),
        ],
    );
    catalog_prep(dir.path()).assert().success();

    let assert = catalog_prep(dir.path())
        .args(["summary", "--format", "json", "--top", "1"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["total_games"], json!(2));
    assert_eq!(summary["rating"]["mean"], json!(70.0));
    assert_eq!(summary["genres"], json!([{"name": "Action", "count": 2}]));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    catalog_prep(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMANDS"))
        .stdout(predicate::str::contains("transform"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("similar"));
}

#[test]
fn test_summary_settings_do_not_block_transform() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "steamdb.json",
        &[game(1, "English", json!(80), Value::Null, Value::Null)],
    );
    fs::write(dir.path().join("catalog-prep.toml"), "[summary]\ntop = 0\n").unwrap();

    for top in ["0", "many"] {
        catalog_prep(dir.path())
            .env("CATALOG_PREP_SUMMARY_TOP", top)
            .assert()
            .success();
        assert_eq!(read_output(&dir.path().join("project_data.json")).len(), 1);
        fs::remove_file(dir.path().join("project_data.json")).unwrap();
    }

    catalog_prep(dir.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG-005"));
    catalog_prep(dir.path())
        .args(["summary", "steamdb.json"])
        .env("CATALOG_PREP_SUMMARY_TOP", "many")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG-004"));
}

#[test]
fn test_default_paths_ignore_environment() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "steamdb.json",
        &[game(1, "English", json!(80), Value::Null, Value::Null)],
    );

    catalog_prep(dir.path())
        .env("CATALOG_PREP_INPUT", "elsewhere.json")
        .env("CATALOG_PREP_OUTPUT", "moved.json")
        .assert()
        .success();

    assert!(dir.path().join("project_data.json").exists());
    assert!(!dir.path().join("moved.json").exists());
}

fn transformed(id: u64, name: &str, price: f64, genres: &[&str], rating: f64) -> Value {
    json!({
        "id": id,
        "url": "u",
        "date": "2020-01-01",
        "image": "i",
        "name": name,
        "price": price,
        "os": ["Win"],
        "mode": ["Single-player", "Steam Cloud"],
        "genres": genres,
        "tags": ["Atmospheric"],
        "difficulty": "Just Right",
        "duration": 10,
        "rating": rating
    })
}

#[test]
fn test_similar_ranks_closest_titles() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "project_data.json",
        &[
            transformed(10, "Target", 20.0, &["Action"], 80.0),
            transformed(11, "Far", 60.0, &["Strategy", "Gore"], 30.0),
            transformed(12, "Twin", 20.0, &["Action"], 81.0),
            transformed(13, "Cousin", 25.0, &["Action", "RPG"], 75.0),
        ],
    );

    let assert = catalog_prep(dir.path())
        .args(["similar", "10", "--limit", "2", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ranked: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<Value> = ranked.iter().map(|t| t["id"].clone()).collect();
    assert_eq!(ids, vec![json!(12), json!(13)]);
    assert_eq!(ranked[0]["name"], json!("Twin"));

    catalog_prep(dir.path())
        .args(["similar", "10", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Titles similar to Target (10):"))
        .stdout(predicate::str::contains("Twin"));
}

#[test]
fn test_similar_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    write_input(
        dir.path(),
        "project_data.json",
        &[transformed(10, "Target", 20.0, &["Action"], 80.0)],
    );

    catalog_prep(dir.path())
        .args(["similar", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SIMILAR-001"))
        .stderr(predicate::str::contains("id: 99"));
}
