use assert_cmd::Command;
use predicates::prelude::*;

fn studymate() -> Command {
    let mut cmd = Command::cargo_bin("studymate").unwrap();
    cmd.env_remove("STUDYMATE_API_KEY").env_remove("DATABASE_URL");
    cmd
}

#[test]
fn test_cli_help() {
    studymate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI study assistant"));
}

#[test]
fn test_cli_serve_help() {
    studymate()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("port"));
}

#[test]
fn test_parse_from_stdin() {
    studymate()
        .arg("parse")
        .write_stdin(
            "## Main Idea: Cells are the unit of life\nKey Terms:\n- Nucleus: control center\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mainIdea\": \"Cells are the unit of life\""))
        .stdout(predicate::str::contains("\"term\": \"Nucleus\""));
}

#[test]
fn test_parse_missing_file_fails() {
    studymate()
        .arg("parse")
        .arg("/nonexistent/reply.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_ask_without_api_key_fails() {
    studymate()
        .args(["ask", "solver", "2 + 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("STUDYMATE_API_KEY"));
}

#[test]
fn test_ask_rejects_unknown_feature() {
    studymate().args(["ask", "poetry", "roses"]).assert().failure();
}

#[test]
fn test_saved_history_commands_require_database_url() {
    for args in [
        vec!["history", "--user", "alice"],
        vec!["delete", "abc", "--user", "alice"],
        vec!["ask", "solver", "2 + 2", "--user", "alice"],
    ] {
        studymate()
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("DATABASE_URL environment variable must be set"));
    }
}

#[test]
fn test_history_requires_user() {
    studymate().arg("history").assert().failure().stderr(predicate::str::contains("--user"));
}
