// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The matching pass
//!
//! Runs with the coordinator lock held after every queue or registry
//! mutation. The first job (from the front) whose requirements are all
//! available is allocated in one step, removed from the queue, and the scan
//! restarts from the front. Unsatisfiable jobs never hold back jobs behind
//! them. The pass ends once no pending job can be satisfied.

use crate::pending::PendingQueue;
use crate::registry::{AvailabilityRegistry, ServerEntry};
use crate::waiter::Waiters;

/// One job paired with the servers it claimed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub job: String,
    pub servers: Vec<ServerEntry>,
}

/// Match pending jobs against idle servers until nothing more fits.
///
/// Every chosen server's waiter is assigned and woken before returning.
pub fn rescan(
    pending: &mut PendingQueue,
    registry: &mut AvailabilityRegistry,
    waiters: &mut Waiters,
) -> Vec<Assignment> {
    let mut assignments = Vec::new();

    while let Some(index) = pending.position(|job| registry.can_satisfy(job)) {
        let Some(job) = pending.remove(index) else {
            break;
        };

        let mut servers = Vec::with_capacity(job.total_servers() as usize);
        for (server_type, count) in job.requirements() {
            servers.extend(registry.take_highest(server_type, *count));
        }
        debug_assert_eq!(servers.len(), job.total_servers() as usize);

        for server in &servers {
            waiters.assign(server.waiter, job.name());
        }

        tracing::debug!(
            job = job.name(),
            position = index,
            servers = ?servers.iter().map(|s| (s.server_type.as_str(), s.id)).collect::<Vec<_>>(),
            "job matched"
        );
        assignments.push(Assignment {
            job: job.name().to_string(),
            servers,
        });
    }

    if !pending.is_empty() {
        tracing::trace!(pending = pending.len(), idle = registry.len(), "jobs still waiting");
    }
    assignments
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
