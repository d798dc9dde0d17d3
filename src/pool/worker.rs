use super::shared::PoolShared;
use slog::{debug, error, o, Logger};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

pub(super) struct Worker {
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn new(id: usize, shared: Arc<PoolShared>) -> Worker {
        let thread = thread::spawn(move || {
            let log = shared.log.new(o!("worker" => id));
            run(&shared, &log);
        });

        Worker {
            thread: Some(thread),
        }
    }

    pub fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            // run() never panics, job panics are caught inside it
            let _ = thread.join();
        }
    }
}

// wait for work, claim one job, run it outside the lock, repeat
fn run(shared: &PoolShared, log: &Logger) {
    loop {
        let job = {
            let mut state = match shared.state.lock() {
                Ok(state) => state,
                Err(_) => {
                    error!(log, "pool lock poisoned, worker exiting");
                    return;
                }
            };

            // re-checked in a loop: a wake never implies the condition holds
            while state.queue.is_empty() && !state.shutdown {
                state = match shared.work_available.wait(state) {
                    Ok(state) => state,
                    Err(_) => {
                        error!(log, "pool lock poisoned, worker exiting");
                        return;
                    }
                };
            }

            // shutdown outranks pending work unless draining was requested
            if state.shutdown && (!shared.config.drain_on_shutdown || state.queue.is_empty()) {
                debug!(log, "worker exiting");
                return;
            }

            match state.queue.dequeue() {
                Some(job) => job,
                None => continue,
            }
        };

        // the guard is dropped, the job runs with no lock held
        if panic::catch_unwind(AssertUnwindSafe(|| job())).is_err() {
            error!(log, "job panicked, worker continuing");
        }
    }
}
