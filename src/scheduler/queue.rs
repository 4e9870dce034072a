use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::scheduler::job::Job;

/// FIFO of jobs shared by all workers.
///
/// The queue is filled once at construction and closed immediately, so
/// [`next`](Self::next) returns `None` once every job has been handed out.
/// Each job is handed out exactly once.
#[derive(Debug, Clone)]
pub struct JobQueue {
    rx: Arc<Mutex<mpsc::Receiver<Job>>>,
    len: usize,
}

impl JobQueue {
    /// Load `jobs` in order. Capacity equals the job count so loading never waits.
    pub fn load(jobs: Vec<Job>) -> Self {
        let len = jobs.len();
        let (tx, rx) = mpsc::channel(len.max(1));
        for job in jobs {
            if let Err(e) = tx.try_send(job) {
                // Unreachable with capacity == len and the receiver held here
                tracing::error!(error = %e, "Job queue rejected a job");
            }
        }

        Self {
            rx: Arc::new(Mutex::new(rx)),
            len,
        }
    }

    /// Take the next job, or `None` once the queue is drained.
    pub async fn next(&self) -> Option<Job> {
        self.rx.lock().await.recv().await
    }

    /// Number of jobs the queue was loaded with
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hands_out_jobs_in_fifo_order_then_closes() {
        let queue = JobQueue::load(vec![Job::new(0, "a"), Job::new(1, "b"), Job::new(2, "c")]);
        assert_eq!(queue.len(), 3);

        let mut seen = Vec::new();
        while let Some(job) = queue.next().await {
            seen.push(job.index);
        }
        assert_eq!(seen, vec![0, 1, 2]);
        assert!(queue.next().await.is_none());
    }

    #[tokio::test]
    async fn empty_queue_is_closed() {
        let queue = JobQueue::load(Vec::new());
        assert!(queue.is_empty());
        assert!(queue.next().await.is_none());
    }

    #[tokio::test]
    async fn clones_share_one_queue() {
        let queue = JobQueue::load((0..10).map(|i| Job::new(i, "x")).collect());
        let other = queue.clone();

        let mut count = 0;
        while queue.next().await.is_some() {
            count += 1;
            if other.next().await.is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 10);
    }
}
