// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job requests: a named demand for counts of server types

use crate::error::CoordinatorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named demand for specific counts of specific server types.
///
/// Requirements are kept in a `BTreeMap` so the satisfiability check and the
/// allocation walk the types in the same order every time. Once submitted the
/// request is never mutated; its name is copied into every server it claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    name: String,
    #[serde(default)]
    requires: BTreeMap<String, u32>,
}

impl JobRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: BTreeMap::new(),
        }
    }

    /// Require `count` servers of `server_type`.
    ///
    /// Requiring the same type twice keeps the last count.
    pub fn require(mut self, server_type: impl Into<String>, count: u32) -> Self {
        self.requires.insert(server_type.into(), count);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> &BTreeMap<String, u32> {
        &self.requires
    }

    /// Number of servers this job claims when matched
    pub fn total_servers(&self) -> u64 {
        self.requires.values().map(|&count| u64::from(count)).sum()
    }

    /// Check the submit preconditions
    pub fn validate(&self) -> Result<(), CoordinatorError> {
        if self.name.is_empty() {
            return Err(CoordinatorError::EmptyJobName);
        }
        for (server_type, count) in &self.requires {
            if server_type.is_empty() {
                return Err(CoordinatorError::EmptyRequirementType {
                    job: self.name.clone(),
                });
            }
            if *count == 0 {
                return Err(CoordinatorError::ZeroCount {
                    job: self.name.clone(),
                    server_type: server_type.clone(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for JobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, (server_type, count)) in self.requires.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", server_type, count)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
