pub mod error;
pub mod pool;
pub mod queue;

pub use error::{Error, ErrorKind, Result};
pub use pool::{PoolConfig, QueueThreadPool, ThreadPool, MAX_WORKERS};
