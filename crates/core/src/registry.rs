// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Availability registry: idle servers grouped by type

use crate::job::JobRequest;
use crate::waiter::WaiterId;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

/// One logged-in server waiting to be claimed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    pub server_type: String,
    pub id: i64,
    pub waiter: WaiterId,
}

/// Idle, unassigned servers by type
#[derive(Debug, Default)]
pub struct AvailabilityRegistry {
    by_type: HashMap<String, Vec<ServerEntry>>,
}

impl AvailabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: ServerEntry) {
        self.by_type
            .entry(entry.server_type.clone())
            .or_default()
            .push(entry);
    }

    /// Number of idle servers of one type
    pub fn available(&self, server_type: &str) -> usize {
        self.by_type.get(server_type).map_or(0, Vec::len)
    }

    /// Whether every requirement of `job` can be met right now
    pub fn can_satisfy(&self, job: &JobRequest) -> bool {
        job.requirements()
            .iter()
            .all(|(server_type, count)| self.available(server_type) >= *count as usize)
    }

    /// Remove the `count` highest-id servers of a type.
    ///
    /// Callers check [`can_satisfy`](Self::can_satisfy) first; asking for more
    /// than is available returns only what there is.
    pub fn take_highest(&mut self, server_type: &str, count: u32) -> Vec<ServerEntry> {
        let Some(bucket) = self.by_type.get_mut(server_type) else {
            return Vec::new();
        };
        debug_assert!(bucket.len() >= count as usize, "partial allocation");

        bucket.sort_by_key(|entry| Reverse(entry.id));
        let take = bucket.len().min(count as usize);
        let taken: Vec<ServerEntry> = bucket.drain(..take).collect();

        if bucket.is_empty() {
            self.by_type.remove(server_type);
        }
        taken
    }

    /// Total idle servers across all types
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Idle server ids per type, highest first
    pub fn ids_by_type(&self) -> BTreeMap<String, Vec<i64>> {
        self.by_type
            .iter()
            .map(|(server_type, entries)| {
                let mut ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
                ids.sort_by_key(|id| Reverse(*id));
                (server_type.clone(), ids)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
