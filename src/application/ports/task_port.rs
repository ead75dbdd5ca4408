//! TaskExecutor - submission interface for background work
//!
//! Preference writes and refreshes are fire-and-forget: callers submit a job
//! and observe its effect through the repositories' observables. The executor
//! owns the jobs' lifecycle; dropping or shutting it down ends background work.

use std::collections::VecDeque;

use parking_lot::Mutex;

/// A unit of background work
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Port interface for running background jobs
pub trait TaskExecutor: Send + Sync {
    /// Queue `job`; `name` is used for logging
    fn submit(&self, name: &str, job: Job);
}

/// Executor that queues jobs until [`ManualExecutor::run_pending`] is called.
///
/// Lets tests drive fire-and-forget work deterministically.
#[derive(Default)]
pub struct ManualExecutor {
    queue: Mutex<VecDeque<(String, Job)>>,
}

impl ManualExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Pending job names, oldest first
    pub fn pending_names(&self) -> Vec<String> {
        self.queue.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    /// Run queued jobs, including ones they submit, until the queue is empty.
    /// Returns the number of jobs run.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // Release the queue before running so jobs can submit more work
            let next = self.queue.lock().pop_front();
            match next {
                Some((_, job)) => {
                    job();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }
}

impl TaskExecutor for ManualExecutor {
    fn submit(&self, name: &str, job: Job) {
        self.queue.lock().push_back((name.to_string(), job));
    }
}
