// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario harness
//!
//! Replays a scenario against a fresh coordinator. Every login id becomes a
//! server thread blocked in `login`; released servers report back over a
//! channel. After each step the harness waits for the coordinator to go
//! quiet so the event log is the same on every run.

use crate::error::JmError;
use crate::scenario::{Scenario, Step};
use jm_core::{Coordinator, CoordinatorError, CoordinatorSnapshot, JobManager, JobRequest, TracedManager};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Pause between `snapshot()` checks while a server thread registers
const REGISTRATION_POLL: Duration = Duration::from_millis(1);

/// One line of the scenario log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Login { server_type: String, ids: Vec<i64> },
    Submit { job: JobRequest },
    Released { server_type: String, id: i64, job: String },
    Note { text: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Login { server_type, ids } => write!(f, "login {} ids={:?}", server_type, ids),
            Event::Submit { job } => write!(f, "submit {}", job),
            Event::Released {
                server_type,
                id,
                job,
            } => write!(f, "released {}#{} -> {}", server_type, id, job),
            Event::Note { text } => write!(f, "note: {}", text),
        }
    }
}

/// Outcome of a scenario run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub events: Vec<Event>,
    /// Jobs still waiting at the end, oldest first
    pub pending: Vec<String>,
    /// Servers still blocked in login, per type, highest id first
    pub parked: BTreeMap<String, Vec<i64>>,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario {}", self.scenario)?;
        for event in &self.events {
            writeln!(f, "  {}", event)?;
        }

        if self.pending.is_empty() {
            writeln!(f, "pending: (none)")?;
        } else {
            writeln!(f, "pending: {}", self.pending.join(", "))?;
        }

        if self.parked.is_empty() {
            write!(f, "parked: (none)")
        } else {
            let parked: Vec<String> = self
                .parked
                .iter()
                .map(|(server_type, ids)| format!("{}={:?}", server_type, ids))
                .collect();
            write!(f, "parked: {}", parked.join(" "))
        }
    }
}

/// Message a server thread sends when its `login` returns
#[derive(Debug)]
struct Release {
    server_type: String,
    id: i64,
    outcome: Result<String, CoordinatorError>,
}

/// Drives one scenario against one coordinator
pub struct Harness {
    manager: Arc<TracedManager<Coordinator>>,
    sender: Sender<Release>,
    releases: Receiver<Release>,
    settle_timeout: Duration,
    /// Server threads started so far
    spawned: u64,
    /// Releases received so far
    observed: u64,
    events: Vec<Event>,
}

impl Harness {
    pub fn new(settle_timeout: Duration) -> Self {
        let (sender, releases) = mpsc::channel();
        Self {
            manager: Arc::new(TracedManager::new(Coordinator::new())),
            sender,
            releases,
            settle_timeout,
            spawned: 0,
            observed: 0,
            events: Vec::new(),
        }
    }

    /// Run every step of `scenario` on a fresh harness
    pub fn run(scenario: &Scenario) -> Result<ScenarioReport, JmError> {
        let mut harness = Harness::new(scenario.settle_timeout);
        for (index, step) in scenario.steps.iter().enumerate() {
            harness.step(index + 1, step)?;
        }
        Ok(harness.finish(&scenario.name))
    }

    /// Apply one step and wait for the coordinator to settle
    pub fn step(&mut self, index: usize, step: &Step) -> Result<(), JmError> {
        let _span = tracing::info_span!("step", index).entered();
        let mut released = Vec::new();

        match step {
            Step::Login { server_type, ids } => {
                self.events.push(Event::Login {
                    server_type: server_type.clone(),
                    ids: ids.clone(),
                });
                // One at a time, so ties between equal jobs resolve the
                // same way on every run
                for &id in ids {
                    self.spawn_server(server_type, id)?;
                    self.await_registration(index, &mut released)?;
                }
            }
            Step::Submit(job) => {
                self.events.push(Event::Submit { job: job.clone() });
                self.manager
                    .submit(job.clone())
                    .map_err(|e| JmError::new(format!("Step {} submit failed", index)).with_source(e))?;
            }
            Step::Note(text) => {
                self.events.push(Event::Note { text: text.clone() });
            }
        }

        self.await_releases(index, &mut released)?;

        released.sort_by(|a, b| release_key(a).cmp(&release_key(b)));
        tracing::debug!(released = released.len(), "step settled");
        self.events.extend(released);
        Ok(())
    }

    /// Final report; servers still parked stay blocked
    pub fn finish(self, scenario: &str) -> ScenarioReport {
        let snapshot = self.snapshot();
        if snapshot.idle() > 0 {
            tracing::info!(parked = snapshot.idle(), "leaving servers parked");
        }
        ScenarioReport {
            scenario: scenario.to_string(),
            events: self.events,
            pending: snapshot.pending,
            parked: snapshot.available,
        }
    }

    pub fn snapshot(&self) -> CoordinatorSnapshot {
        self.manager.inner().snapshot()
    }

    fn spawn_server(&mut self, server_type: &str, id: i64) -> Result<(), JmError> {
        let manager = Arc::clone(&self.manager);
        let sender = self.sender.clone();
        let thread_type = server_type.to_string();

        thread::Builder::new()
            .name(format!("{}-{}", server_type, id))
            .spawn(move || {
                let outcome = manager.login(&thread_type, id);
                // The receiver is gone once the run is over
                let _ = sender.send(Release {
                    server_type: thread_type,
                    id,
                    outcome,
                });
            })
            .map_err(|e| JmError::spawn_failed(server_type, id, e))?;

        self.spawned += 1;
        Ok(())
    }

    /// Wait until every spawned server is registered with the coordinator.
    ///
    /// A thread blocked inside `login` gives no signal that it has
    /// registered, so the harness polls `snapshot()` here. Only this runner
    /// polls; the coordinator itself parks waiters on condition variables.
    fn await_registration(&mut self, index: usize, released: &mut Vec<Event>) -> Result<(), JmError> {
        let deadline = Instant::now() + self.settle_timeout;
        loop {
            loop {
                match self.releases.try_recv() {
                    Ok(release) => released.push(self.observe(index, release)?),
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
                }
            }

            if self.snapshot().logins >= self.spawned {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(JmError::settle_timeout(
                    index,
                    self.settle_timeout,
                    &format!("{} server registrations", self.spawned),
                ));
            }
            thread::sleep(REGISTRATION_POLL);
        }
    }

    /// Wait until every server the coordinator assigned has reported back
    fn await_releases(&mut self, index: usize, released: &mut Vec<Event>) -> Result<(), JmError> {
        let deadline = Instant::now() + self.settle_timeout;
        loop {
            let assigned = self.snapshot().servers_assigned;
            if self.observed >= assigned {
                return Ok(());
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.releases.recv_timeout(remaining) {
                Ok(release) => released.push(self.observe(index, release)?),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return Err(JmError::settle_timeout(
                        index,
                        self.settle_timeout,
                        &format!("{} server releases", assigned - self.observed),
                    ));
                }
            }
        }
    }

    fn observe(&mut self, index: usize, release: Release) -> Result<Event, JmError> {
        let job = release.outcome.map_err(|e| {
            JmError::new(format!(
                "Step {}: login {}#{} was rejected",
                index, release.server_type, release.id
            ))
            .with_source(e)
        })?;
        self.observed += 1;
        Ok(Event::Released {
            server_type: release.server_type,
            id: release.id,
            job,
        })
    }
}

fn release_key(event: &Event) -> (&str, &str, Reverse<i64>) {
    match event {
        Event::Released {
            server_type,
            id,
            job,
        } => (job.as_str(), server_type.as_str(), Reverse(*id)),
        _ => ("", "", Reverse(0)),
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
