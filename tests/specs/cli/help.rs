//! Help and discovery specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    jm().args(&["--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("scenario")
        .stdout_has("run")
        .stdout_has("completions")
        .stdout_has("--log-file");
}

#[test]
fn version_prints_name() {
    jm().args(&["--version"]).passes().stdout_has("jm ");
}

#[test]
fn list_shows_builtin_scenarios() {
    jm().args(&["list"])
        .passes()
        .stdout_has("logins-then-job")
        .stdout_has("skip-unsatisfiable")
        .stdout_has("highest ids");
}

#[test]
fn list_as_json() {
    let out = jm().args(&["list", "--format", "json"]).passes();
    let rows: serde_json::Value = serde_json::from_str(&out.stdout()).unwrap();

    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["name"], "logins-then-job");
    assert_eq!(rows[0]["servers"], 5);
}

#[test]
fn completions_for_bash() {
    jm().args(&["completions", "bash"]).passes().stdout_has("_jm");
}
