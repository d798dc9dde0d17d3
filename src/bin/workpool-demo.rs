use clap::{crate_authors, crate_version, Clap};
use slog::{info, o, Drain};
use std::process::exit;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;
use workpool::{PoolConfig, QueueThreadPool, Result, ThreadPool};

#[derive(Clap)]
#[clap(version = crate_version!(), author = crate_authors!())]
struct Options {
    #[clap(long, short, default_value = "4")]
    workers: usize,

    #[clap(long, short, default_value = "100")]
    jobs: usize,

    /// per-job busy time in milliseconds
    #[clap(long, default_value = "5")]
    job_millis: u64,

    /// finish the backlog at shutdown instead of abandoning it
    #[clap(long)]
    drain: bool,
}

fn main() {
    let logger = logger();
    let options = Options::parse();

    if let Err(e) = run(&options, &logger) {
        slog::error!(&logger, "{}", e);
        exit(1);
    }
}

fn logger() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    slog::Logger::root(drain, o!())
}

fn run(options: &Options, logger: &slog::Logger) -> Result<()> {
    info!(logger, "workpool demo starting";
        "version" => crate_version!(),
        "workers" => options.workers,
        "jobs" => options.jobs,
    );

    let config = PoolConfig {
        drain_on_shutdown: options.drain,
    };
    let pool = QueueThreadPool::with_config(options.workers, config, logger.clone())?;

    let completed = Arc::new(AtomicUsize::new(0));
    let delay = Duration::from_millis(options.job_millis);
    for _ in 0..options.jobs {
        let completed = Arc::clone(&completed);
        pool.execute(move || {
            sleep(delay);
            completed.fetch_add(1, Ordering::SeqCst);
        })?;
    }

    pool.shutdown();
    info!(logger, "pool shut down";
        "submitted" => options.jobs,
        "completed" => completed.load(Ordering::SeqCst),
    );
    Ok(())
}
