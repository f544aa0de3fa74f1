//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_scenario_suggests_list() {
    jm().args(&["scenario", "ur9"])
        .fails()
        .stderr_has("error: Unknown scenario 'ur9'")
        .stderr_has("jm list");
}

#[test]
fn missing_file_is_reported() {
    let temp = Project::empty();
    temp.jm()
        .args(&["run", "absent.toml"])
        .fails()
        .stderr_has("Cannot load scenario")
        .stderr_has("absent.toml");
}

#[test]
fn zero_count_job_is_rejected_before_running() {
    let temp = Project::empty();
    temp.file(
        "zero.toml",
        r#"
name = "zero"
[[step]]
login = { server_type = "ComputeServer", ids = [1] }
[[step]]
submit = { name = "job01", requires = { ComputeServer = 0 } }
"#,
    );

    temp.jm()
        .args(&["run", "zero.toml"])
        .fails()
        .stderr_has("step 2")
        .stderr_has("at least 1")
        .stdout_lacks("login ComputeServer");
}

#[test]
fn step_with_two_actions_is_rejected() {
    let temp = Project::empty();
    temp.file(
        "two.toml",
        "name = \"two\"\n[[step]]\nnote = \"a\"\nsubmit = { name = \"j\" }\n",
    );

    temp.jm()
        .args(&["run", "two.toml"])
        .fails()
        .stderr_has("exactly one of login, submit, note");
}

#[test]
fn unknown_format_is_a_usage_error() {
    jm().args(&["scenario", "any-order", "--format", "yaml"])
        .fails()
        .stderr_has("yaml");
}
