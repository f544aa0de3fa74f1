//! Logging specs

use crate::prelude::*;

#[test]
fn quiet_by_default() {
    jm().args(&["scenario", "descending-ids"])
        .passes()
        .stderr_is_empty();
}

#[test]
fn log_file_receives_debug_output() {
    let temp = Project::empty();

    temp.jm()
        .args(&["--log-file", "logs/jm.log", "scenario", "logins-then-job"])
        .env("RUST_LOG", "debug")
        .passes()
        .stderr_is_empty()
        .stdout_has("released ComputeServer#4 -> job01");

    let log = temp.read("logs/jm.log");
    assert!(log.contains("job matched"), "log was: {}", log);
    assert!(log.contains("running scenario"));
}
