mod model;
mod runtime;
mod service;

pub use model::{JobModel, JobStatus, ProtectedResource};
pub use runtime::{JobHandle, JobRunner, TimedLock, TimedLockGuard};
pub use service::{Scenario, ScenarioService};
