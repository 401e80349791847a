use mizar_common::prelude::*;
use strum_macros::{AsRefStr, EnumString};

/// Parameters for one ephemeral unit of work contending for the shared lock.
#[derive(Clone, Debug)]
pub struct JobModel {
    /// Identifier written into the resource, also used for log correlation.
    pub job_id: InlineStr,
    /// Simulated work duration, spent while the lock is held.
    pub delay: Duration,
    /// Upper bound on the lock acquisition wait.
    pub lock_timeout: Duration,
}

impl JobModel {
    pub fn new(job_id: impl Into<InlineStr>, delay: Duration, lock_timeout: Duration) -> Self {
        Self {
            job_id: job_id.into(),
            delay,
            lock_timeout,
        }
    }
}

#[derive(Clone, Copy, Debug, EnumString, AsRefStr, PartialEq, Eq)]
pub enum JobStatus {
    /// Acquired the lock, wrote the resource and released cleanly.
    Completed,
    /// The bounded acquisition wait expired; the resource was never touched.
    TimedOut,
    /// The job thread panicked after acquiring the lock. The lock itself is
    /// released during unwinding.
    Failed,
}

impl JobStatus {
    pub fn is_successful(&self) -> bool {
        match self {
            JobStatus::Completed => true,
            JobStatus::TimedOut | JobStatus::Failed => false,
        }
    }
}
