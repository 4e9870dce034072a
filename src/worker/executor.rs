use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::ShellConfig;
use crate::scheduler::{Job, JobResult, JobStatus};
use crate::shell::{describe_failure, run_combined, CombinedOutput};

/// Anything that can turn a job into a result. The pool is generic over this
/// so tests can swap in scripted runners.
#[async_trait]
pub trait CommandRunner: Send + Sync + 'static {
    async fn run(&self, job: &Job) -> JobResult;
}

/// Executes jobs as `<shell> -c <command>` on the local machine.
///
/// Commands run unsandboxed with the caller's environment and working
/// directory. stdout and stderr are captured as one stream.
#[derive(Debug, Clone, Default)]
pub struct JobExecutor {
    shell: ShellConfig,
}

impl JobExecutor {
    pub fn new(shell: ShellConfig) -> Self {
        Self { shell }
    }

    /// Execute a job and wait for it to finish
    pub async fn execute(&self, job: &Job) -> JobResult {
        tracing::debug!(index = job.index, command = %job.command, "Executing job");

        let started_at = Utc::now();
        let result = run_combined(&self.shell, &job.command).await;

        Self::process_output(job, started_at, result)
    }

    fn process_output(
        job: &Job,
        started_at: DateTime<Utc>,
        result: std::io::Result<CombinedOutput>,
    ) -> JobResult {
        let completed_at = Utc::now();

        match result {
            Ok(out) => {
                let exit_code = out.status.code();
                let (status, error) = if out.status.success() {
                    (JobStatus::Completed, None)
                } else {
                    (JobStatus::Failed, Some(describe_failure(&out.status)))
                };

                tracing::debug!(
                    index = job.index,
                    status = %status,
                    exit_code = ?exit_code,
                    "Job completed"
                );

                JobResult {
                    index: job.index,
                    command: job.command.clone(),
                    status,
                    exit_code,
                    output: out.output,
                    error,
                    executed_by: None,
                    started_at,
                    completed_at,
                }
            }
            Err(e) => {
                tracing::error!(index = job.index, error = %e, "Job execution failed");
                JobResult {
                    index: job.index,
                    command: job.command.clone(),
                    status: JobStatus::Failed,
                    exit_code: None,
                    output: String::new(),
                    error: Some(e.to_string()),
                    executed_by: None,
                    started_at,
                    completed_at,
                }
            }
        }
    }
}

#[async_trait]
impl CommandRunner for JobExecutor {
    async fn run(&self, job: &Job) -> JobResult {
        self.execute(job).await
    }
}
