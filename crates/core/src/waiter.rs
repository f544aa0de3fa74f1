// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-login blocking handles
//!
//! Every `login` call parks on its own [`Waiter`]. The waiter's fields live
//! inside the coordinator's locked state, and its condition variable is only
//! ever waited on with that same lock, so one mutex guards everything while
//! wakeups stay targeted at a single thread.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Condvar};

/// Opaque handle naming one waiter in a [`Waiters`] table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaiterId(u64);

impl fmt::Display for WaiterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "waiter-{}", self.0)
    }
}

/// Unassigned -> Assigned, exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaiterState {
    Unassigned,
    Assigned { job: String },
}

/// Blocking handle for a single logged-in server
#[derive(Debug)]
pub struct Waiter {
    state: WaiterState,
    signal: Arc<Condvar>,
}

impl Waiter {
    fn new() -> Self {
        Self {
            state: WaiterState::Unassigned,
            signal: Arc::new(Condvar::new()),
        }
    }

    pub fn state(&self) -> &WaiterState {
        &self.state
    }

    pub fn assigned_job(&self) -> Option<&str> {
        match &self.state {
            WaiterState::Assigned { job } => Some(job),
            WaiterState::Unassigned => None,
        }
    }

    /// Record the job and wake the one thread parked on this waiter.
    fn assign(&mut self, job: &str) {
        debug_assert!(
            self.state == WaiterState::Unassigned,
            "waiter assigned twice"
        );
        self.state = WaiterState::Assigned {
            job: job.to_string(),
        };
        self.signal.notify_one();
    }
}

/// All live waiters of one coordinator, keyed by id
#[derive(Debug, Default)]
pub struct Waiters {
    slots: HashMap<WaiterId, Waiter>,
    next_id: u64,
}

impl Waiters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh unassigned waiter.
    ///
    /// Returns its id and the condition variable its owner parks on.
    pub fn register(&mut self) -> (WaiterId, Arc<Condvar>) {
        let id = WaiterId(self.next_id);
        self.next_id += 1;
        let waiter = Waiter::new();
        let signal = Arc::clone(&waiter.signal);
        self.slots.insert(id, waiter);
        (id, signal)
    }

    pub fn get(&self, id: WaiterId) -> Option<&Waiter> {
        self.slots.get(&id)
    }

    /// Transition a waiter to `Assigned` and wake it
    pub fn assign(&mut self, id: WaiterId, job: &str) {
        debug_assert!(self.slots.contains_key(&id), "assigning unknown {}", id);
        if let Some(waiter) = self.slots.get_mut(&id) {
            waiter.assign(job);
        }
    }

    /// Remove an assigned waiter and hand back its job name.
    ///
    /// Unassigned waiters are left in place and `None` is returned.
    pub fn take_assignment(&mut self, id: WaiterId) -> Option<String> {
        if self.slots.get(&id)?.assigned_job().is_none() {
            return None;
        }
        match self.slots.remove(&id)?.state {
            WaiterState::Assigned { job } => Some(job),
            WaiterState::Unassigned => None,
        }
    }

    /// Waiters currently parked or not yet collected
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
#[path = "waiter_tests.rs"]
mod tests;
