//! WorkerPool - thread-backed task executor
//!
//! Jobs are pulled from one shared channel by a fixed set of worker threads.
//! Shutdown closes the channel, lets the workers drain what is queued and
//! joins them.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::application::ports::task_port::{Job, TaskExecutor};

type Message = (String, Job);

pub struct WorkerPool {
    sender: Mutex<Option<Sender<Message>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Start a pool with `threads` workers (at least one)
    pub fn start(threads: usize) -> Self {
        let (sender, receiver) = mpsc::channel::<Message>();
        let receiver = Arc::new(Mutex::new(receiver));

        let mut workers = Vec::new();
        for n in 0..threads.max(1) {
            let receiver = Arc::clone(&receiver);
            let spawned = thread::Builder::new()
                .name(format!("nisi-worker-{}", n))
                .spawn(move || worker_loop(&receiver));
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(e) => log::error!("Failed to spawn worker {}: {}", n, e),
            }
        }
        log::debug!("Worker pool started with {} threads", workers.len());

        Self {
            sender: Mutex::new(Some(sender)),
            workers: Mutex::new(workers),
        }
    }

    /// Stop accepting jobs, run everything already queued and join the workers
    pub fn shutdown(&self) {
        // Dropping the sender ends the workers' receive loops once drained
        drop(self.sender.lock().take());

        let workers: Vec<JoinHandle<()>> = self.workers.lock().drain(..).collect();
        for handle in workers {
            if handle.join().is_err() {
                log::error!("Worker thread panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.sender.lock().is_some()
    }
}

fn worker_loop(receiver: &Mutex<Receiver<Message>>) {
    loop {
        // The lock is released before the job runs
        let message = receiver.lock().recv();
        let Ok((name, job)) = message else {
            return;
        };

        log::debug!("Running job {}", name);
        if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            log::error!("Job {} panicked", name);
        }
    }
}

impl TaskExecutor for WorkerPool {
    fn submit(&self, name: &str, job: Job) {
        let sender = self.sender.lock();
        let Some(sender) = sender.as_ref() else {
            log::warn!("Dropping job {} submitted after shutdown", name);
            return;
        };
        if sender.send((name.to_string(), job)).is_err() {
            log::warn!("Dropping job {}: no workers left", name);
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_job(counter: &Arc<AtomicUsize>) -> Job {
        let counter = Arc::clone(counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_shutdown_drains_queue() {
        let pool = WorkerPool::start(4);
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..100 {
            pool.submit("count", counting_job(&counter));
        }
        pool.shutdown();

        assert_eq!(counter.load(Ordering::SeqCst), 100);
        assert!(!pool.is_running());
    }

    #[test]
    fn test_jobs_after_shutdown_are_dropped() {
        let pool = WorkerPool::start(1);
        let counter = Arc::new(AtomicUsize::new(0));

        pool.shutdown();
        pool.submit("late", counting_job(&counter));
        pool.shutdown();

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_panicking_job_keeps_worker_alive() {
        let pool = WorkerPool::start(1);
        let counter = Arc::new(AtomicUsize::new(0));

        pool.submit("boom", Box::new(|| panic!("job failure")));
        pool.submit("count", counting_job(&counter));
        pool.shutdown();

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
