use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use mizar_core::{JobModel, JobRunner, JobStatus, ProtectedResource, TimedLock};

fn init_log() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

fn shared() -> (Arc<TimedLock>, Arc<ProtectedResource>) {
    (
        Arc::new(TimedLock::new()),
        Arc::new(ProtectedResource::new()),
    )
}

#[test]
fn job_writes_resource_and_releases() {
    init_log();

    let (lock, resource) = shared();
    assert!(resource.is_unset());

    let handle = JobRunner::run(
        JobModel::new("job_1", Duration::from_millis(50), Duration::from_secs(1)),
        Arc::clone(&lock),
        Arc::clone(&resource),
    );
    assert_eq!(handle.join(), JobStatus::Completed);

    assert_eq!(resource.get().as_str(), "job_1");
    assert!(!lock.is_held());
}

#[test]
fn launch_does_not_block_the_caller() {
    let (lock, resource) = shared();

    let started = Instant::now();
    let handle = JobRunner::run(
        JobModel::new("job_1", Duration::from_millis(500), Duration::from_secs(1)),
        Arc::clone(&lock),
        Arc::clone(&resource),
    );
    assert!(started.elapsed() < Duration::from_millis(250));

    assert_eq!(handle.join(), JobStatus::Completed);
}

#[test]
fn timed_out_job_never_touches_the_resource() {
    init_log();

    let (lock, resource) = shared();
    assert!(lock.acquire(Duration::from_millis(10)));

    let handle = JobRunner::run(
        JobModel::new(
            "job_2",
            Duration::from_millis(50),
            Duration::from_millis(100),
        ),
        Arc::clone(&lock),
        Arc::clone(&resource),
    );
    assert_eq!(handle.join(), JobStatus::TimedOut);

    assert!(resource.is_unset());
    assert!(lock.is_held());
    lock.release().expect("release failed");
}

#[test]
fn lock_is_released_when_work_panics() {
    init_log();

    let (lock, resource) = shared();
    let handle = JobRunner::run_with_work(
        JobModel::new("job_1", Duration::from_millis(50), Duration::from_secs(1)),
        Arc::clone(&lock),
        Arc::clone(&resource),
        |_| panic!("injected work failure"),
    );
    assert_eq!(handle.join(), JobStatus::Failed);

    // the panicking job must not starve later contenders
    assert!(!lock.is_held());
    assert!(lock.acquire(Duration::from_millis(100)));
    lock.release().expect("release failed");
}

#[test]
fn at_most_one_job_holds_the_lock() {
    init_log();

    let (lock, resource) = shared();
    let in_section = Arc::new(AtomicUsize::new(0));
    let max_seen = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let in_section = Arc::clone(&in_section);
            let max_seen = Arc::clone(&max_seen);
            JobRunner::run_with_work(
                JobModel::new(
                    format!("job_{}", i + 1),
                    Duration::from_millis(10),
                    Duration::from_secs(5),
                ),
                Arc::clone(&lock),
                Arc::clone(&resource),
                move |job| {
                    let concurrent = in_section.fetch_add(1, Ordering::SeqCst) + 1;
                    max_seen.fetch_max(concurrent, Ordering::SeqCst);
                    thread::sleep(job.delay);
                    in_section.fetch_sub(1, Ordering::SeqCst);
                },
            )
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join(), JobStatus::Completed);
    }

    assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    assert!(!lock.is_held());
}
