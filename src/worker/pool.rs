use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::{FailurePolicy, DEFAULT_PROGRESS_LABEL};
use crate::scheduler::{Job, JobQueue, JobResult};
use crate::worker::CommandRunner;

/// Fixed-size pool of workers draining one shared job queue.
pub struct WorkerPool<R> {
    runner: Arc<R>,
    workers: usize,
    policy: FailurePolicy,
    stop: CancellationToken,
    label: String,
}

impl<R: CommandRunner> WorkerPool<R> {
    pub fn new(runner: R, workers: usize) -> Self {
        Self {
            runner: Arc::new(runner),
            workers: workers.max(1),
            policy: FailurePolicy::default(),
            stop: CancellationToken::new(),
            label: DEFAULT_PROGRESS_LABEL.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Share a token that halts dispatch of queued jobs when cancelled.
    /// In-flight jobs are always allowed to finish.
    pub fn with_stop_token(mut self, stop: CancellationToken) -> Self {
        self.stop = stop;
        self
    }

    /// Label attached to each per-job progress event.
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every job and return exactly one result per job, sorted by job index.
    ///
    /// Each finished job emits one info-level "Job finished" progress event.
    /// Jobs are handed out in index order; completion order is whatever the
    /// commands' run times make it. Once dispatch stops (a failure under
    /// [`FailurePolicy::Abort`], or the stop token) the remaining queued jobs
    /// come back as skipped.
    ///
    /// Blocks until all results are in. A worker that dies before reporting
    /// its job leaves this waiting forever.
    pub async fn dispatch(&self, jobs: Vec<Job>) -> Vec<JobResult> {
        let total = jobs.len();
        let queue = JobQueue::load(jobs);
        let (results_tx, mut results_rx) = mpsc::channel(total.max(1));
        let abort = self.stop.child_token();

        tracing::debug!(total, workers = self.workers, "Dispatching jobs");

        for worker_id in 1..=self.workers {
            tokio::spawn(Self::worker_loop(
                worker_id,
                queue.clone(),
                self.runner.clone(),
                results_tx.clone(),
                abort.clone(),
                self.policy,
            ));
        }

        let mut results = Vec::with_capacity(total);
        while results.len() < total {
            // results_tx is still alive here, so this only returns None if the
            // runtime is shutting down.
            let Some(result) = results_rx.recv().await else {
                break;
            };
            tracing::info!(
                label = %self.label,
                index = result.index,
                status = %result.status,
                elapsed_ms = result.duration().num_milliseconds(),
                done = results.len() + 1,
                total,
                "Job finished"
            );
            results.push(result);
        }
        drop(results_tx);

        results.sort_by_key(|r| r.index);
        results
    }

    async fn worker_loop(
        worker_id: usize,
        queue: JobQueue,
        runner: Arc<R>,
        results: mpsc::Sender<JobResult>,
        abort: CancellationToken,
        policy: FailurePolicy,
    ) {
        while let Some(job) = queue.next().await {
            let result = if abort.is_cancelled() {
                tracing::debug!(worker_id, index = job.index, "Dispatch stopped, skipping job");
                JobResult::skipped(job)
            } else {
                let mut result = runner.run(&job).await;
                result.executed_by = Some(worker_id);

                if result.failed() && policy == FailurePolicy::Abort && !abort.is_cancelled() {
                    tracing::warn!(
                        worker_id,
                        index = result.index,
                        error = ?result.error,
                        "Job failed, stopping dispatch"
                    );
                    abort.cancel();
                }
                result
            };

            if results.send(result).await.is_err() {
                // Collector gone
                break;
            }
        }
    }
}
