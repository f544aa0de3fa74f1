// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordinator: pairs job requests with logged-in servers
//!
//! One mutex guards the pending queue, the availability registry and every
//! waiter. Both operations mutate under that lock and then run a matching
//! pass before releasing it. A `login` caller then parks on its own
//! condition variable until a pass assigns it.

use crate::error::CoordinatorError;
use crate::job::JobRequest;
use crate::matching::{self, Assignment};
use crate::pending::PendingQueue;
use crate::registry::{AvailabilityRegistry, ServerEntry};
use crate::waiter::Waiters;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Everything behind the coordinator lock
#[derive(Debug, Default)]
struct State {
    pending: PendingQueue,
    registry: AvailabilityRegistry,
    waiters: Waiters,
    logins: u64,
    jobs_matched: u64,
    servers_assigned: u64,
}

impl State {
    fn rescan(&mut self) -> Vec<Assignment> {
        let assignments =
            matching::rescan(&mut self.pending, &mut self.registry, &mut self.waiters);
        for assignment in &assignments {
            self.jobs_matched += 1;
            self.servers_assigned += assignment.servers.len() as u64;
        }
        assignments
    }
}

/// Point-in-time view of the coordinator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoordinatorSnapshot {
    /// Pending job names, oldest first
    pub pending: Vec<String>,
    /// Idle server ids per type, highest first
    pub available: BTreeMap<String, Vec<i64>>,
    /// Logins registered since creation
    pub logins: u64,
    pub jobs_matched: u64,
    pub servers_assigned: u64,
}

impl CoordinatorSnapshot {
    /// Idle servers of one type
    pub fn available_count(&self, server_type: &str) -> usize {
        self.available.get(server_type).map_or(0, Vec::len)
    }

    /// Idle servers across all types
    pub fn idle(&self) -> usize {
        self.available.values().map(Vec::len).sum()
    }
}

/// Shared matcher between job submitters and server threads.
///
/// Share it with `Arc<Coordinator>`; both operations take `&self`.
#[derive(Debug, Default)]
pub struct Coordinator {
    state: Mutex<State>,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // The state is only mutated by code that cannot panic midway
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a job and run one matching pass.
    ///
    /// Never blocks beyond taking the lock. A job that can never be satisfied
    /// stays pending indefinitely.
    pub fn submit(&self, job: JobRequest) -> Result<(), CoordinatorError> {
        job.validate()?;

        let mut state = self.lock();
        tracing::trace!(job = job.name(), servers = job.total_servers(), "job queued");
        state.pending.push(job);
        state.rescan();
        Ok(())
    }

    /// Register an idle server and block until a job claims it.
    ///
    /// Returns the name of the claiming job. There is no timeout: the call
    /// blocks for as long as no pending job selects this server.
    pub fn login(&self, server_type: &str, id: i64) -> Result<String, CoordinatorError> {
        if server_type.is_empty() {
            return Err(CoordinatorError::EmptyServerType);
        }

        let mut state = self.lock();
        let (waiter, signal) = state.waiters.register();
        state.registry.register(ServerEntry {
            server_type: server_type.to_string(),
            id,
            waiter,
        });
        state.logins += 1;
        tracing::trace!(server_type, id, %waiter, "server registered");
        state.rescan();

        loop {
            if let Some(job) = state.waiters.take_assignment(waiter) {
                return Ok(job);
            }
            state = signal.wait(state).unwrap_or_else(|e| e.into_inner());
        }
    }

    pub fn snapshot(&self) -> CoordinatorSnapshot {
        let state = self.lock();
        CoordinatorSnapshot {
            pending: state.pending.names(),
            available: state.registry.ids_by_type(),
            logins: state.logins,
            jobs_matched: state.jobs_matched,
            servers_assigned: state.servers_assigned,
        }
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
