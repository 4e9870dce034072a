use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Completed,
    Failed,
    Skipped,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// A fully substituted command, identified by its expansion index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub index: usize,
    pub command: String,
}

impl Job {
    pub fn new(index: usize, command: impl Into<String>) -> Self {
        Self {
            index,
            command: command.into(),
        }
    }
}

/// Outcome of one job.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    pub index: usize,
    pub command: String,
    pub status: JobStatus,
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr
    pub output: String,
    pub error: Option<String>,
    /// Worker that dequeued the job, counted from 1
    pub executed_by: Option<usize>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl JobResult {
    /// Result for a job that was dequeued after dispatch stopped.
    pub fn skipped(job: Job) -> Self {
        let now = Utc::now();
        Self {
            index: job.index,
            command: job.command,
            status: JobStatus::Skipped,
            exit_code: None,
            output: String::new(),
            error: None,
            executed_by: None,
            started_at: now,
            completed_at: now,
        }
    }

    pub fn failed(&self) -> bool {
        self.status == JobStatus::Failed
    }

    pub fn skipped_run(&self) -> bool {
        self.status == JobStatus::Skipped
    }

    pub fn duration(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }
}
