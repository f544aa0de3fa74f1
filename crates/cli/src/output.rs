// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of scenario listings and reports

use crate::commands::list::ScenarioSummary;
use crate::harness::ScenarioReport;
use clap::ValueEnum;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render a scenario report: the event log with its summary, or the whole
/// report as pretty JSON
pub fn render_report(report: &ScenarioReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// Render the built-in scenario table
pub fn render_listing(rows: &[ScenarioSummary], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!("{:<24} {:>7}  DESCRIPTION", "NAME", "SERVERS");
            for row in rows {
                // Writing to a String cannot fail
                let _ = write!(out, "\n{}", row);
            }
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Event;
    use std::collections::BTreeMap;

    fn report() -> ScenarioReport {
        ScenarioReport {
            scenario: "tiny".to_string(),
            events: vec![Event::Released {
                server_type: "ComputeServer".to_string(),
                id: 3,
                job: "job01".to_string(),
            }],
            pending: vec![],
            parked: BTreeMap::from([("ComputeServer".to_string(), vec![1])]),
        }
    }

    #[test]
    fn text_report_ends_with_summary() {
        let text = render_report(&report(), OutputFormat::Text).unwrap();

        assert!(text.contains("  released ComputeServer#3 -> job01\n"));
        assert!(text.ends_with("parked: ComputeServer=[1]"));
    }

    #[test]
    fn json_report_tags_events() {
        let json = render_report(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["events"][0]["event"], "released");
        assert_eq!(value["pending"], serde_json::json!([]));
    }

    #[test]
    fn text_listing_has_header_and_one_row_per_scenario() {
        let rows = vec![ScenarioSummary {
            name: "descending-ids".to_string(),
            description: "Highest first".to_string(),
            steps: 2,
            servers: 5,
        }];

        let text = render_listing(&rows, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("descending-ids"));
        assert!(lines[1].contains("      5  Highest first"));
    }

    #[test]
    fn empty_listing_as_json_is_an_empty_array() {
        let json = render_listing(&[], OutputFormat::Json).unwrap();
        assert_eq!(json, "[]");
    }
}
