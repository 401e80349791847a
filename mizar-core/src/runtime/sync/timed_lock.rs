use std::thread;
use std::thread::ThreadId;

use mizar_common::prelude::*;

/// Mutual-exclusion primitive with a bounded-wait acquisition.
///
/// At most one thread holds the lock at any instant. Waiters block until the
/// holder releases or their deadline expires; a release wakes at most one
/// waiter. The lock is not reentrant: a holder that calls
/// [`acquire`](TimedLock::acquire) again waits on itself until the timeout
/// expires.
pub struct TimedLock {
    holder: Mutex<Option<ThreadId>>,
    freed: Condvar,
}

impl TimedLock {
    pub fn new() -> Self {
        Self {
            holder: Mutex::new(None),
            freed: Condvar::new(),
        }
    }

    /// Blocks the calling thread until the lock is granted to it, or until
    /// `timeout` elapses with no grant. Returns whether the lock was
    /// acquired.
    pub fn acquire(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut holder = self.holder.lock();
        while holder.is_some() {
            if self.freed.wait_until(&mut holder, deadline).timed_out() && holder.is_some() {
                debug!(
                    "Thread {:?} failed to acquire lock within {:?}.",
                    thread::current().id(),
                    timeout
                );
                return false;
            }
        }
        *holder = Some(thread::current().id());
        debug!("Thread {:?} acquired lock.", thread::current().id());
        true
    }

    /// Transitions held -> free and wakes at most one blocked waiter.
    ///
    /// Calling this from a thread that does not hold the lock is a hard
    /// error and leaves the lock state untouched.
    pub fn release(&self) -> MizResult<()> {
        let mut holder = self.holder.lock();
        match *holder {
            Some(id) if id == thread::current().id() => {
                *holder = None;
                drop(holder);
                self.freed.notify_one();
                debug!("Thread {:?} released lock.", thread::current().id());
                Ok(())
            }
            _ => fmt_err!(
                IllegalState,
                "lock released by thread {:?} which does not hold it",
                thread::current().id()
            ),
        }
    }

    /// Scoped acquisition: the returned guard releases the lock on every
    /// exit path from the calling scope, including unwinding.
    pub fn acquire_guard(&self, timeout: Duration) -> Option<TimedLockGuard<'_>> {
        if self.acquire(timeout) {
            Some(TimedLockGuard { lock: self })
        } else {
            None
        }
    }

    pub fn is_held(&self) -> bool {
        self.holder.lock().is_some()
    }
}

impl Default for TimedLock {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII handle to a held [`TimedLock`].
pub struct TimedLockGuard<'a> {
    lock: &'a TimedLock,
}

impl Drop for TimedLockGuard<'_> {
    fn drop(&mut self) {
        // The guard releases on the acquiring thread exactly once; a failure
        // here is logged rather than panicking out of a drop.
        if let Err(e) = self.lock.release() {
            error!("lock release failed on guard drop: {}", e);
        }
    }
}
