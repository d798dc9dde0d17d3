use super::worker::Worker;
use super::{Job, PoolConfig, ThreadPool, MAX_WORKERS};
use crate::error::{ErrorKind, Result};
use crate::queue::TaskQueue;
use slog::{info, o, Discard, Logger};
use std::sync::{Arc, Condvar, Mutex};

pub(super) struct PoolState {
    pub queue: TaskQueue<Job>,
    pub shutdown: bool,
}

/// Everything the workers share: one mutex over the queue and the shutdown
/// flag, one condvar for "queue non-empty or shutdown requested".
pub(super) struct PoolShared {
    pub state: Mutex<PoolState>,
    pub work_available: Condvar,
    pub config: PoolConfig,
    pub log: Logger,
}

pub struct QueueThreadPool {
    shared: Arc<PoolShared>,
    workers: Vec<Worker>,
}

impl QueueThreadPool {
    pub fn with_config(size: usize, config: PoolConfig, log: Logger) -> Result<Self> {
        if size == 0 || size > MAX_WORKERS {
            return Err(ErrorKind::InvalidWorkerCount(size, MAX_WORKERS).into());
        }

        let shared = Arc::new(PoolShared {
            state: Mutex::new(PoolState {
                queue: TaskQueue::new(),
                shutdown: false,
            }),
            work_available: Condvar::new(),
            config,
            log,
        });

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::new(id, Arc::clone(&shared)));
        }
        info!(shared.log, "pool started"; "workers" => size);

        Ok(QueueThreadPool { shared, workers })
    }

    /// Stop the pool and block until every worker has observed the shutdown
    /// flag and exited. With the default config, jobs still queued at this
    /// point are dropped unexecuted; jobs already claimed by a worker run
    /// to completion first.
    pub fn shutdown(mut self) {
        self.terminate_and_join();
    }

    fn terminate_and_join(&mut self) {
        {
            let mut state = match self.shared.state.lock() {
                Ok(state) => state,
                // workers bail out on poison themselves; still join them
                Err(poisoned) => poisoned.into_inner(),
            };
            state.shutdown = true;
            // every worker must observe the flag, so wake all of them
            self.shared.work_available.notify_all();
        }

        for worker in &mut self.workers {
            worker.join();
        }

        let mut state = match self.shared.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let abandoned = state.queue.len();
        while state.queue.dequeue().is_some() {}
        if abandoned > 0 {
            info!(self.shared.log, "shutdown abandoned queued jobs"; "count" => abandoned);
        }
    }
}

impl std::fmt::Debug for QueueThreadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueThreadPool")
            .field("workers", &self.workers.len())
            .finish()
    }
}

impl ThreadPool for QueueThreadPool {
    fn new(size: usize) -> Result<Self>
    where
        Self: Sized,
    {
        Self::with_config(size, PoolConfig::default(), Logger::root(Discard, o!()))
    }

    fn execute<F>(&self, job: F) -> Result<()>
    where
        F: Send + FnOnce() + 'static,
    {
        let mut state = self
            .shared
            .state
            .lock()
            .map_err(|e| ErrorKind::LockPoisoned(e.to_string()))?;
        if state.shutdown {
            return Err(ErrorKind::PoolShutdown.into());
        }
        state.queue.enqueue(Box::new(job));
        // one new job, wake at most one sleeping worker
        self.shared.work_available.notify_one();
        Ok(())
    }
}

impl Drop for QueueThreadPool {
    fn drop(&mut self) {
        // no-op if shutdown() already ran, the handles are gone by then
        self.terminate_and_join();
    }
}
