// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario TOML parsing
//!
//! A scenario is an ordered list of steps replayed against a fresh
//! coordinator:
//!
//! ```toml
//! name = "descending-ids"
//! settle_timeout = "5s"
//!
//! [[step]]
//! login = { server_type = "ComputeServer", ids = [1, 3, 5] }
//!
//! [[step]]
//! submit = { name = "job01", requires = { ComputeServer = 2 } }
//!
//! [[step]]
//! note = "expect ComputeServer 5 and 3 to be released"
//! ```

use jm_core::{CoordinatorError, JobRequest};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur during scenario parsing
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("step {step}: {source}")]
    InvalidJob {
        step: usize,
        #[source]
        source: CoordinatorError,
    },
}

/// One scripted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Start one server thread per id, all of one type
    Login { server_type: String, ids: Vec<i64> },
    /// Submit a job request
    Submit(JobRequest),
    /// Free text copied into the event log
    Note(String),
}

/// A parsed scenario
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    /// Upper bound on how long the harness waits for servers to register
    /// and released servers to report back after each step
    pub settle_timeout: Duration,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Scenario, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_scenario(&content)
    }

    /// Total server threads the scenario starts
    pub fn server_count(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Login { ids, .. } => ids.len(),
                _ => 0,
            })
            .sum()
    }
}

/// Parse a scenario from TOML content
pub fn parse_scenario(content: &str) -> Result<Scenario, ScenarioError> {
    let raw: toml::Value = toml::from_str(content)?;
    let table = raw
        .as_table()
        .ok_or_else(|| ScenarioError::InvalidFormat("root must be a table".to_string()))?;

    let name = table
        .get("name")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ScenarioError::MissingField("name".to_string()))?
        .to_string();

    let description = table
        .get("description")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    let settle_timeout = match table.get("settle_timeout") {
        Some(value) => {
            let text = value.as_str().ok_or_else(|| {
                ScenarioError::InvalidFormat("settle_timeout must be a string".to_string())
            })?;
            humantime::parse_duration(text).map_err(|e| {
                ScenarioError::InvalidFormat(format!("settle_timeout: {}", e))
            })?
        }
        None => DEFAULT_SETTLE_TIMEOUT,
    };

    let steps = match table.get("step") {
        Some(value) => value
            .as_array()
            .ok_or_else(|| ScenarioError::InvalidFormat("step must be an array of tables".to_string()))?
            .iter()
            .enumerate()
            .map(|(i, step)| parse_step(i + 1, step))
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(Scenario {
        name,
        description,
        settle_timeout,
        steps,
    })
}

fn parse_step(index: usize, value: &toml::Value) -> Result<Step, ScenarioError> {
    let table = value
        .as_table()
        .ok_or_else(|| ScenarioError::InvalidFormat(format!("step {} must be a table", index)))?;

    if table.len() != 1 {
        return Err(ScenarioError::InvalidFormat(format!(
            "step {} must have exactly one of login, submit, note",
            index
        )));
    }

    if let Some(login) = table.get("login") {
        return parse_login(index, login);
    }

    if let Some(submit) = table.get("submit") {
        let job: JobRequest = submit
            .clone()
            .try_into()
            .map_err(|e| ScenarioError::InvalidFormat(format!("step {}.submit: {}", index, e)))?;
        job.validate()
            .map_err(|source| ScenarioError::InvalidJob { step: index, source })?;
        return Ok(Step::Submit(job));
    }

    if let Some(note) = table.get("note") {
        let text = note.as_str().ok_or_else(|| {
            ScenarioError::InvalidFormat(format!("step {}.note must be a string", index))
        })?;
        return Ok(Step::Note(text.to_string()));
    }

    Err(ScenarioError::InvalidFormat(format!(
        "step {}: unknown action (expected login, submit or note)",
        index
    )))
}

fn parse_login(index: usize, value: &toml::Value) -> Result<Step, ScenarioError> {
    let table = value.as_table().ok_or_else(|| {
        ScenarioError::InvalidFormat(format!("step {}.login must be a table", index))
    })?;

    let server_type = table
        .get("server_type")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ScenarioError::MissingField(format!("step {}.login.server_type", index)))?
        .to_string();

    let ids = table
        .get("ids")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ScenarioError::MissingField(format!("step {}.login.ids", index)))?
        .iter()
        .map(|v| {
            v.as_integer().ok_or_else(|| {
                ScenarioError::InvalidFormat(format!("step {}.login.ids must be integers", index))
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    if ids.is_empty() {
        return Err(ScenarioError::InvalidFormat(format!(
            "step {}.login.ids must not be empty",
            index
        )));
    }

    Ok(Step::Login { server_type, ids })
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
