// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The two operations callers use, as a trait seam

use crate::coordinator::Coordinator;
use crate::error::CoordinatorError;
use crate::job::JobRequest;
use std::sync::Arc;

/// Job submission and blocking server login
pub trait JobManager: Send + Sync {
    /// Queue a job; never blocks beyond one matching pass
    fn submit(&self, job: JobRequest) -> Result<(), CoordinatorError>;

    /// Register a server and block until a job claims it; returns the job name
    fn login(&self, server_type: &str, id: i64) -> Result<String, CoordinatorError>;
}

impl JobManager for Coordinator {
    fn submit(&self, job: JobRequest) -> Result<(), CoordinatorError> {
        Coordinator::submit(self, job)
    }

    fn login(&self, server_type: &str, id: i64) -> Result<String, CoordinatorError> {
        Coordinator::login(self, server_type, id)
    }
}

impl<M: JobManager + ?Sized> JobManager for Arc<M> {
    fn submit(&self, job: JobRequest) -> Result<(), CoordinatorError> {
        (**self).submit(job)
    }

    fn login(&self, server_type: &str, id: i64) -> Result<String, CoordinatorError> {
        (**self).login(server_type, id)
    }
}
