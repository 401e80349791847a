use std::thread;
use std::thread::JoinHandle;

use mizar_common::prelude::*;

use crate::model::{JobModel, JobStatus, ProtectedResource};
use crate::runtime::sync::TimedLock;

/// Launches independent concurrent jobs contending for the shared lock.
pub struct JobRunner;

impl JobRunner {
    /// Spawns the job on its own thread and returns immediately. The caller
    /// may drop the returned handle (fire-and-forget) or join it.
    pub fn run(job: JobModel, lock: Arc<TimedLock>, resource: Arc<ProtectedResource>) -> JobHandle {
        Self::run_with_work(job, lock, resource, |job| thread::sleep(job.delay))
    }

    /// Same launch contract as [`run`](JobRunner::run), with an injectable
    /// simulated-work step. The work runs while the lock is held; if it
    /// panics, the lock is still released during unwinding.
    pub fn run_with_work<F>(
        job: JobModel,
        lock: Arc<TimedLock>,
        resource: Arc<ProtectedResource>,
        work: F,
    ) -> JobHandle
    where
        F: FnOnce(&JobModel) + Send + 'static,
    {
        let job_id = job.job_id.clone();
        let handle = thread::spawn(move || Self::execute(&job, &lock, &resource, work));
        JobHandle { job_id, handle }
    }

    fn execute<F>(
        job: &JobModel,
        lock: &TimedLock,
        resource: &ProtectedResource,
        work: F,
    ) -> JobStatus
    where
        F: FnOnce(&JobModel),
    {
        let guard = match lock.acquire_guard(job.lock_timeout) {
            Some(guard) => guard,
            None => {
                warn!("[{}] lock not acquired", job.job_id);
                return JobStatus::TimedOut;
            }
        };

        info!("[{}] lock acquired", job.job_id);
        info!("[{}] before set, resource: {}", job.job_id, resource.get());
        resource.set(job.job_id.clone());
        info!("[{}] after set, resource: {}", job.job_id, resource.get());
        info!("[{}] holding lock for {:?}", job.job_id, job.delay);
        work(job);
        info!("[{}] releasing lock", job.job_id);
        info!("[{}] resource: {}", job.job_id, resource.get());
        drop(guard);
        info!("[{}] lock released", job.job_id);
        JobStatus::Completed
    }
}

/// Join surface for a launched job. Callers launching fire-and-forget work
/// simply drop it.
pub struct JobHandle {
    job_id: InlineStr,
    handle: JoinHandle<JobStatus>,
}

impl JobHandle {
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the job thread to finish. A panic inside the job is
    /// reported as [`JobStatus::Failed`]; the lock has already been released
    /// by the time the panic is observed here.
    pub fn join(self) -> JobStatus {
        match self.handle.join() {
            Ok(status) => status,
            Err(_) => {
                error!("[{}] job thread panicked", self.job_id);
                JobStatus::Failed
            }
        }
    }
}
