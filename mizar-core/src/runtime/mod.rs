mod execution;
mod sync;

pub use execution::{JobHandle, JobRunner};
pub use sync::{TimedLock, TimedLockGuard};
