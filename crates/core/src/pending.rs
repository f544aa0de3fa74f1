// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pending job queue in submission order

use crate::job::JobRequest;
use std::collections::VecDeque;

/// Jobs waiting for servers, oldest first
#[derive(Debug, Default)]
pub struct PendingQueue {
    jobs: VecDeque<JobRequest>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: JobRequest) {
        self.jobs.push_back(job);
    }

    /// Position of the first job, from the front, matching `pred`
    pub fn position(&self, pred: impl FnMut(&JobRequest) -> bool) -> Option<usize> {
        self.jobs.iter().position(pred)
    }

    pub fn remove(&mut self, index: usize) -> Option<JobRequest> {
        self.jobs.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRequest> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Job names in queue order
    pub fn names(&self) -> Vec<String> {
        self.jobs.iter().map(|j| j.name().to_string()).collect()
    }
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod tests;
