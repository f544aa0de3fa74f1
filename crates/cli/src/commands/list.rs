// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jm list` - List built-in scenarios

use crate::builtin;
use crate::error::JmError;
use crate::output::{render_listing, OutputFormat};
use crate::scenario::Scenario;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One row of `jm list`
#[derive(Debug, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub description: String,
    pub steps: usize,
    pub servers: usize,
}

impl From<&Scenario> for ScenarioSummary {
    fn from(scenario: &Scenario) -> Self {
        Self {
            name: scenario.name.clone(),
            description: scenario.description.clone(),
            steps: scenario.steps.len(),
            servers: scenario.server_count(),
        }
    }
}

impl fmt::Display for ScenarioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} {:>7}  {}", self.name, self.servers, self.description)
    }
}

pub fn list(args: ListArgs) -> Result<()> {
    let scenarios =
        builtin::all().map_err(|e| JmError::invalid_scenario("built-in", e))?;
    let summaries: Vec<ScenarioSummary> = scenarios.iter().map(ScenarioSummary::from).collect();
    println!("{}", render_listing(&summaries, args.format)?);
    Ok(())
}
