//! Built-in scenario specs

use crate::prelude::*;

#[test]
fn logins_then_job_releases_highest_two() {
    jm().args(&["scenario", "logins-then-job"])
        .passes()
        .stdout_has("submit job01 {ComputeServer=2}")
        .stdout_has("released ComputeServer#4 -> job01\n  released ComputeServer#3 -> job01")
        .stdout_has("pending: (none)")
        .stdout_has("parked: ComputeServer=[2, 1, 0]");
}

#[test]
fn skip_unsatisfiable_leaves_big_job_pending() {
    jm().args(&["scenario", "skip-unsatisfiable"])
        .passes()
        .stdout_has("released ComputeServer#1 -> jobB")
        .stdout_has("pending: jobA")
        .stdout_lacks("-> jobA");
}

#[test]
fn reverse_ids_multi_type() {
    jm().args(&["scenario", "reverse-ids-multi-type"])
        .passes()
        .stdout_has("released ComputeServer#20 -> job01")
        .stdout_has("released ComputeServer#15 -> job01")
        .stdout_has("released ComputeServer#10 -> job01")
        .stdout_has("released StorageServer#200 -> job01")
        .stdout_has("released StorageServer#150 -> job01")
        .stdout_has("parked: ComputeServer=[5, 1] StorageServer=[100, 50]");
}

#[test]
fn names_match_reports_each_job() {
    jm().args(&["scenario", "names-match"])
        .passes()
        .stdout_has("released ComputeServer#1 -> job01")
        .stdout_has("released ComputeServer#0 -> job01")
        .stdout_has("released StorageServer#0 -> job02")
        .stdout_has("parked: ComputeServer=[3, 2] StorageServer=[1]");
}

#[test]
fn json_report() {
    let out = jm()
        .args(&["scenario", "descending-ids", "--format", "json"])
        .passes();
    let report: serde_json::Value = serde_json::from_str(&out.stdout()).unwrap();

    assert_eq!(report["scenario"], "descending-ids");
    assert_eq!(report["pending"], serde_json::json!([]));
    assert_eq!(report["parked"]["ComputeServer"], serde_json::json!([0]));

    let released: Vec<i64> = report["events"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["event"] == "released")
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(released, vec![4, 3, 2, 1]);
}
