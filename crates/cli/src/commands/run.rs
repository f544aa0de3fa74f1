// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jm scenario <name>` and `jm run <path>` - Replay a scenario

use crate::builtin;
use crate::error::JmError;
use crate::harness::Harness;
use crate::output::{render_report, OutputFormat};
use crate::scenario::Scenario;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ScenarioArgs {
    /// Built-in scenario name (see `jm list`)
    pub name: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to a scenario TOML file
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn scenario(args: ScenarioArgs) -> Result<()> {
    let scenario = builtin::load(&args.name)
        .ok_or_else(|| JmError::unknown_scenario(&args.name, &builtin::names()))?
        .map_err(|e| JmError::invalid_scenario(&args.name, e))?;
    replay(&scenario, args.format)
}

pub fn run(args: RunArgs) -> Result<()> {
    let scenario = Scenario::load(&args.path).map_err(|e| JmError::scenario_file(&args.path, e))?;
    replay(&scenario, args.format)
}

fn replay(scenario: &Scenario, format: OutputFormat) -> Result<()> {
    tracing::info!(
        scenario = %scenario.name,
        steps = scenario.steps.len(),
        servers = scenario.server_count(),
        "running scenario"
    );
    let report = Harness::run(scenario)?;
    println!("{}", render_report(&report, format)?);
    Ok(())
}
