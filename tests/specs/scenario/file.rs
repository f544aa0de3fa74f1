//! Scenario file specs

use crate::prelude::*;

#[test]
fn runs_scenario_from_file() {
    let temp = Project::empty();
    temp.file("scenarios/desc.toml", DESCENDING_SCENARIO);

    temp.jm()
        .args(&["run", "scenarios/desc.toml"])
        .passes()
        .stdout_has("scenario from-file")
        .stdout_has("login ComputeServer ids=[1, 3, 5]")
        .stdout_has("released ComputeServer#5 -> job01")
        .stdout_has("released ComputeServer#3 -> job01")
        .stdout_has("parked: ComputeServer=[1]");
}

#[test]
fn absolute_path_works_from_anywhere() {
    let temp = Project::empty();
    let path = temp.file("desc.toml", DESCENDING_SCENARIO);

    jm().args(&["run", path.to_str().unwrap()])
        .passes()
        .stdout_has("released ComputeServer#5 -> job01");
}

#[test]
fn empty_job_completes_without_servers() {
    let temp = Project::empty();
    temp.file(
        "empty.toml",
        r#"
name = "empty-job"
[[step]]
submit = { name = "noop" }
[[step]]
note = "done"
"#,
    );

    temp.jm()
        .args(&["run", "empty.toml"])
        .passes()
        .stdout_has("submit noop {}")
        .stdout_has("note: done")
        .stdout_has("pending: (none)");
}

#[test]
fn job_waits_for_late_logins() {
    let temp = Project::empty();
    temp.file(
        "late.toml",
        r#"
name = "late"
[[step]]
submit = { name = "job01", requires = { ComputeServer = 1, StorageServer = 1 } }
[[step]]
login = { server_type = "ComputeServer", ids = [7] }
[[step]]
login = { server_type = "StorageServer", ids = [9] }
"#,
    );

    let out = temp.jm().args(&["run", "late.toml"]).passes();
    let text = out.stdout();

    let storage_login = text.find("login StorageServer").unwrap();
    let first_release = text.find("released").unwrap();
    assert!(first_release > storage_login, "{}", text);
    assert!(text.contains("pending: (none)"));
}
