use crate::error::Result;

mod shared;
mod worker;
pub use shared::QueueThreadPool;

/// Hard cap on the worker count accepted at construction.
pub const MAX_WORKERS: usize = 200;

pub trait ThreadPool {
    fn new(size: usize) -> Result<Self>
    where
        Self: Sized;

    fn execute<F>(&self, job: F) -> Result<()>
    where
        // since function works in a thread, it must have static lifetime
        F: Send + FnOnce() + 'static;
}

pub type Job = Box<dyn Send + FnOnce() + 'static>;

/// Shutdown contract for queued-but-unclaimed jobs.
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    /// When true, workers finish the backlog before exiting at shutdown.
    /// When false (the default), shutdown abandons anything still queued;
    /// only jobs already claimed by a worker run to completion.
    pub drain_on_shutdown: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            drain_on_shutdown: false,
        }
    }
}
