// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenarios compiled into the binary

use crate::scenario::{parse_scenario, Scenario, ScenarioError};

const BUILTINS: &[(&str, &str)] = &[
    (
        "logins-then-job",
        include_str!("../scenarios/logins-then-job.toml"),
    ),
    ("mixed-types", include_str!("../scenarios/mixed-types.toml")),
    (
        "jobs-then-logins",
        include_str!("../scenarios/jobs-then-logins.toml"),
    ),
    ("any-order", include_str!("../scenarios/any-order.toml")),
    ("names-match", include_str!("../scenarios/names-match.toml")),
    ("descending-ids", include_str!("../scenarios/descending-ids.toml")),
    (
        "reverse-ids-multi-type",
        include_str!("../scenarios/reverse-ids-multi-type.toml"),
    ),
    (
        "skip-unsatisfiable",
        include_str!("../scenarios/skip-unsatisfiable.toml"),
    ),
];

/// Built-in scenario names in listing order
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Parse a built-in scenario, `None` if no scenario has that name
pub fn load(name: &str) -> Option<Result<Scenario, ScenarioError>> {
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| parse_scenario(source))
}

/// Every built-in scenario, parsed
pub fn all() -> Result<Vec<Scenario>, ScenarioError> {
    BUILTINS
        .iter()
        .map(|(_, source)| parse_scenario(source))
        .collect()
}
