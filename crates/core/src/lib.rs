//! jm-core: resource-matching coordinator for the Job Manager (jm)
//!
//! This crate provides:
//! - Job requests naming counts of server types
//! - A coordinator that pairs pending jobs with logged-in servers under one lock
//! - Per-login waiters that park server threads until a job claims them
//! - A `JobManager` trait seam with a traced wrapper

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod error;
pub mod job;

// Engine parts (order matters for dependencies)
pub mod waiter;
pub mod registry;
pub mod pending;
pub mod matching;
pub mod coordinator;

pub mod manager;
pub mod traced;

// Re-exports
pub use coordinator::{Coordinator, CoordinatorSnapshot};
pub use error::CoordinatorError;
pub use job::JobRequest;
pub use manager::JobManager;
pub use matching::Assignment;
pub use traced::TracedManager;
pub use waiter::{WaiterId, WaiterState};
