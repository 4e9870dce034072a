//! Job execution and the worker pool.
//!
//! - **Execution**: [`JobExecutor`] spawns `<shell> -c <command>` and captures output
//! - **Dispatch**: [`WorkerPool`] runs jobs across a fixed number of workers
//!
//! # Execution Flow
//!
//! 1. All jobs are loaded into one [`JobQueue`](crate::scheduler::JobQueue)
//! 2. `W` workers take jobs FIFO until the queue is drained
//! 3. Each job runs through a [`CommandRunner`] and yields a
//!    [`JobResult`](crate::scheduler::JobResult)
//! 4. The pool collects exactly one result per job and returns them in job order
//!
//! # Security Note
//!
//! Commands are executed directly via shell without sandboxing.

pub mod executor;
pub mod pool;

pub use executor::{CommandRunner, JobExecutor};
pub use pool::WorkerPool;
