//! Fixed-size worker pool, the ExecutorService kata: boxed jobs flow over
//! a channel to a set of worker threads; dropping the pool closes the
//! channel and joins every worker.

use std::sync::mpsc;
use std::thread::JoinHandle;

use parking_lot::Mutex;
use tracing::debug;

type Job = Box<dyn FnOnce() + Send + 'static>;

pub struct WorkerPool {
    sender: Option<mpsc::Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "pool needs at least one worker");

        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = std::sync::Arc::new(Mutex::new(receiver));

        let workers = (0..size)
            .map(|id| {
                let receiver = std::sync::Arc::clone(&receiver);
                std::thread::spawn(move || loop {
                    let job = receiver.lock().recv();
                    match job {
                        Ok(job) => {
                            debug!(worker = id, "job picked up");
                            job();
                        }
                        Err(_) => {
                            debug!(worker = id, "channel closed, exiting");
                            break;
                        }
                    }
                })
            })
            .collect();

        Self {
            sender: Some(sender),
            workers,
        }
    }

    /// Queues a job; false if the pool is already shutting down.
    pub fn execute<F: FnOnce() + Send + 'static>(&self, job: F) -> bool {
        match &self.sender {
            Some(sender) => sender.send(Box::new(job)).is_ok(),
            None => false,
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        drop(self.sender.take());
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}
