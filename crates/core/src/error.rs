// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the coordinator boundary

use thiserror::Error;

/// Malformed input rejected before any shared state is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    #[error("job name must not be empty")]
    EmptyJobName,
    #[error("job {job}: server type must not be empty")]
    EmptyRequirementType { job: String },
    #[error("job {job}: required count for {server_type} must be positive")]
    ZeroCount { job: String, server_type: String },
    #[error("server type must not be empty")]
    EmptyServerType,
}
