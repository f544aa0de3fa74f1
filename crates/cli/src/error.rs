// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use crate::scenario::ScenarioError;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct JmError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl JmError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for JmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for JmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl JmError {
    /// Error for a built-in scenario name that does not exist.
    pub fn unknown_scenario(name: &str, known: &[&str]) -> Self {
        JmError::new(format!("Unknown scenario '{}'", name))
            .with_context(format!("Built-in scenarios: {}", known.join(", ")))
            .with_suggestion("List built-in scenarios: jm list")
            .with_suggestion("Run a scenario file instead: jm run <path>")
    }

    /// Error for a scenario that cannot be read or parsed.
    pub fn invalid_scenario(origin: &str, err: ScenarioError) -> Self {
        let error = JmError::new(format!("Cannot load scenario '{}'", origin))
            .with_context(err.to_string());
        let error = match &err {
            ScenarioError::Io { .. } => error.with_suggestion("Check that the file exists and is readable"),
            ScenarioError::InvalidJob { .. } => error
                .with_suggestion("Job names must be non-empty and every count at least 1"),
            _ => error.with_suggestion(
                "Each [[step]] needs exactly one of: login = { server_type, ids }, submit = { name, requires }, note = \"...\"",
            ),
        };
        error.with_source(err)
    }

    /// Error for a scenario file path given on the command line.
    pub fn scenario_file(path: &Path, err: ScenarioError) -> Self {
        JmError::invalid_scenario(&path.display().to_string(), err)
    }

    /// Error for when the harness gives up waiting after a step.
    pub fn settle_timeout(step: usize, timeout: Duration, waiting_for: &str) -> Self {
        JmError::new(format!("Step {} did not settle", step))
            .with_context(format!(
                "Waited {} for {}",
                humantime::format_duration(timeout),
                waiting_for
            ))
            .with_suggestion("Raise settle_timeout in the scenario file")
            .with_suggestion("Re-run with RUST_LOG=jm_core=trace to see every registration and match")
    }

    /// Error for when a server thread cannot be started.
    pub fn spawn_failed(server_type: &str, id: i64, err: std::io::Error) -> Self {
        JmError::new(format!("Failed to start server thread {}#{}", server_type, id))
            .with_context("The operating system refused to create another thread")
            .with_suggestion("Reduce the number of servers in the scenario")
            .with_source(err)
    }
}
