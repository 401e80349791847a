use std::thread;

use mizar_common::prelude::*;
use strum_macros::{AsRefStr, EnumString};

use crate::model::{JobModel, JobStatus, ProtectedResource};
use crate::runtime::{JobHandle, JobRunner, TimedLock};

/// Demonstration phases. All parameters are inline constants of the
/// orchestration layer.
#[derive(Clone, Copy, Debug, EnumString, AsRefStr, PartialEq, Eq)]
pub enum Scenario {
    /// Two jobs overlap; the second waits out the first's hold and still
    /// acquires within its timeout.
    Overlap,
    /// The first acquirer holds the lock past the other's timeout, so the
    /// second acquisition fails.
    AcquireTimeout,
}

impl Scenario {
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_secs(2)
    }

    pub fn work_delay(&self) -> Duration {
        match self {
            Scenario::Overlap => Duration::from_millis(1500),
            Scenario::AcquireTimeout => Duration::from_secs(3),
        }
    }
}

pub struct ScenarioService;

impl ScenarioService {
    /// Pause between the two demo phases, long enough for the first phase's
    /// jobs to have fully completed. Demo pacing only; tests use
    /// [`join_all`](ScenarioService::join_all) instead.
    pub const PHASE_PAUSE: Duration = Duration::from_secs(5);

    const JOB_IDS: [&'static str; 2] = ["job_1", "job_2"];

    /// Launches the scenario's pair of contending jobs back-to-back without
    /// waiting for either. job_1 is launched strictly before job_2;
    /// acquisition order beyond that is up to the scheduler.
    pub fn launch(
        scenario: Scenario,
        lock: &Arc<TimedLock>,
        resource: &Arc<ProtectedResource>,
    ) -> Vec<JobHandle> {
        info!(
            "scenario {}: lock_timeout {:?}, work_delay {:?}",
            scenario.as_ref(),
            scenario.lock_timeout(),
            scenario.work_delay()
        );
        Self::JOB_IDS
            .iter()
            .map(|job_id| {
                JobRunner::run(
                    JobModel::new(*job_id, scenario.work_delay(), scenario.lock_timeout()),
                    Arc::clone(lock),
                    Arc::clone(resource),
                )
            })
            .collect()
    }

    /// Deterministic completion signal: waits for every launched job and
    /// returns their statuses in launch order.
    pub fn join_all(handles: Vec<JobHandle>) -> Vec<JobStatus> {
        handles.into_iter().map(JobHandle::join).collect()
    }

    /// Runs both demonstration phases: overlapping timely acquisition, then
    /// guaranteed timeout failure. Jobs launch fire-and-forget with a fixed
    /// pacing pause between the phases; both phases are joined before
    /// returning so no job thread outlives the demo.
    pub fn run_demo(lock: &Arc<TimedLock>, resource: &Arc<ProtectedResource>) {
        info!("overlapping case:");
        let overlap = Self::launch(Scenario::Overlap, lock, resource);

        thread::sleep(Self::PHASE_PAUSE);

        info!("lock acquire failure case:");
        let acquire_timeout = Self::launch(Scenario::AcquireTimeout, lock, resource);

        Self::join_all(overlap);
        Self::join_all(acquire_timeout);
        info!("demo complete, final resource: {}", resource.get());
    }
}
