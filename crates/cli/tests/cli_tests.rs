use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

const SHEET: &str = "\
Name,Description,Level(s),Difficulty,Video Link
Jano Skip,Skip the jano fight,1-2,★,https://youtu.be/jano
Jano Skip Glitch,Clip through the wall,3,★★,
Bomb Jump,Jump then bomb,,★★★,
";

fn write_sheet(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("goal-lookup-cli-{tag}-{}.csv", std::process::id()));
    std::fs::write(&path, SHEET).unwrap();
    path
}

fn goal_lookup() -> Command {
    let mut cmd = Command::cargo_bin("goal-lookup").unwrap();
    cmd.env_remove("GOAL_LOOKUP_CSV_URL");
    cmd
}

#[test]
fn test_cli_help() {
    goal_lookup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Look up goals from a spreadsheet CSV export"));
}

#[test]
fn test_cli_serve_help() {
    goal_lookup().arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_requires_a_source() {
    goal_lookup()
        .args(["lookup", "jano"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOAL_LOOKUP_CSV_URL"));
}

#[test]
fn test_cli_lookup_from_file() {
    let path = write_sheet("lookup");
    goal_lookup()
        .arg("--source-file")
        .arg(&path)
        .args(["lookup", "jano skip", "--compact"])
        .assert()
        .success()
        .stdout("Jano Skip: Skip the jano fight | 1-2 | ★\n");
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_lookup_unknown_name_fails() {
    let path = write_sheet("unknown");
    goal_lookup()
        .arg("--source-file")
        .arg(&path)
        .args(["lookup", "doesnotexist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_difficulty_lists_names() {
    let path = write_sheet("difficulty");
    goal_lookup()
        .arg("--source-file")
        .arg(&path)
        .args(["difficulty", "★★"])
        .assert()
        .success()
        .stdout("Jano Skip Glitch\nBomb Jump\n");
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_cli_list_prints_json() {
    let path = write_sheet("list");
    goal_lookup()
        .arg("--source-file")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalGoals\": 3"));
    let _ = std::fs::remove_file(path);
}
