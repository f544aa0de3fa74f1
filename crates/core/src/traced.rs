// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced manager wrapper for consistent observability

use crate::error::CoordinatorError;
use crate::job::JobRequest;
use crate::manager::JobManager;

/// Wrapper that adds tracing to any JobManager
#[derive(Debug, Clone)]
pub struct TracedManager<M> {
    inner: M,
}

impl<M> TracedManager<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: JobManager> JobManager for TracedManager<M> {
    fn submit(&self, job: JobRequest) -> Result<(), CoordinatorError> {
        let span = tracing::info_span!("manager.submit", job = job.name());
        let _guard = span.enter();

        tracing::debug!(
            servers = job.total_servers(),
            types = job.requirements().len(),
            "submitting"
        );
        let result = self.inner.submit(job);

        match &result {
            Ok(()) => tracing::debug!("submitted"),
            Err(e) => tracing::warn!(error = %e, "submit rejected"),
        }

        result
    }

    fn login(&self, server_type: &str, id: i64) -> Result<String, CoordinatorError> {
        let span = tracing::info_span!("manager.login", server_type, id);
        let _guard = span.enter();

        tracing::debug!("waiting for a job");
        let start = std::time::Instant::now();
        let result = self.inner.login(server_type, id);
        let elapsed = start.elapsed();

        match &result {
            Ok(job) => tracing::info!(
                job = job.as_str(),
                waited_ms = elapsed.as_millis() as u64,
                "released"
            ),
            Err(e) => tracing::warn!(error = %e, "login rejected"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
