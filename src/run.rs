use std::io::Write;

use tokio_util::sync::CancellationToken;

use crate::config::{FailurePolicy, RunConfig};
use crate::error::{PrlError, Result};
use crate::reporter::Reporter;
use crate::scheduler::{Job, JobResult};
use crate::source::{self, resolve_template, ValueSource};
use crate::template::{expand, validate};
use crate::worker::{JobExecutor, WorkerPool};

/// Drives one run: resolve, validate, expand, then dispatch or print.
pub struct Runner {
    config: RunConfig,
    source: Box<dyn ValueSource>,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        let source = source::for_kind(config.source, &config.shell);
        Self { config, source }
    }

    /// Replace the value source picked from the config.
    pub fn with_source(mut self, source: Box<dyn ValueSource>) -> Self {
        self.source = source;
        self
    }

    /// Turn the template into jobs without running any of them.
    ///
    /// # Errors
    ///
    /// - [`PrlError::NoPlaceholders`] if the template has no `{...}`
    /// - [`PrlError::ArgumentCountMismatch`] if the value lists differ in length
    pub async fn plan(&self) -> Result<Vec<Job>> {
        let template = &self.config.template;

        let sequences = resolve_template(self.source.as_ref(), template).await?;
        validate(&sequences)?;
        let jobs = expand(template, &sequences);

        tracing::info!(
            placeholders = sequences.len(),
            jobs = jobs.len(),
            "Template expanded"
        );
        Ok(jobs)
    }

    /// Run `jobs` on the worker pool and return their results in job order.
    ///
    /// Under [`FailurePolicy::Abort`] the first failed job (by index) fails the
    /// run and no results are returned, even if `stop` also fired. Otherwise,
    /// if `stop` fired before every job started, the run fails with
    /// [`PrlError::Interrupted`].
    pub async fn execute(&self, jobs: Vec<Job>, stop: CancellationToken) -> Result<Vec<JobResult>> {
        let pool = WorkerPool::new(
            JobExecutor::new(self.config.shell.clone()),
            self.config.workers,
        )
        .with_policy(self.config.failure_policy)
        .with_stop_token(stop.clone())
        .with_progress_label(self.config.progress_label.clone());

        tracing::info!(
            jobs = jobs.len(),
            workers = pool.workers(),
            "{}",
            self.config.progress_label
        );

        let results = pool.dispatch(jobs).await;

        // A failure outranks a later signal as the reason the run stopped
        if self.config.failure_policy == FailurePolicy::Abort {
            if let Some(failed) = results.iter().find(|r| r.failed()) {
                return Err(PrlError::WorkerExecution {
                    index: failed.index,
                    command: failed.command.clone(),
                    reason: failed
                        .error
                        .clone()
                        .unwrap_or_else(|| "command failed".to_string()),
                });
            }
        }

        let skipped = results.iter().filter(|r| r.skipped_run()).count();
        if stop.is_cancelled() && skipped > 0 {
            return Err(PrlError::Interrupted { skipped });
        }

        let failed = results.iter().filter(|r| r.failed()).count();
        tracing::info!(
            completed = results.len() - failed - skipped,
            failed,
            "Run finished"
        );
        Ok(results)
    }

    /// Plan, then either print the commands (dry run) or execute and print results.
    pub async fn run<W: Write>(&self, out: &mut W, stop: CancellationToken) -> Result<()> {
        let jobs = self.plan().await?;
        let reporter = Reporter::new(self.config.output, self.config.silent);

        if self.config.dry_run {
            return reporter.report_commands(out, &jobs);
        }

        let results = self.execute(jobs, stop).await?;
        reporter.report_results(out, &results)
    }
}
