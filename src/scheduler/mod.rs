pub mod job;
pub mod queue;

pub use job::{Job, JobResult, JobStatus};
pub use queue::JobQueue;
