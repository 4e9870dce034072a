use async_trait::async_trait;

use crate::config::ShellConfig;
use crate::shell::{describe_failure, run_combined};
use crate::source::{Fetched, ValueSource};

/// Runs the placeholder text as a shell snippet and uses its combined output.
#[derive(Debug, Clone, Default)]
pub struct ShellSource {
    shell: ShellConfig,
}

impl ShellSource {
    pub fn new(shell: ShellConfig) -> Self {
        Self { shell }
    }
}

#[async_trait]
impl ValueSource for ShellSource {
    async fn fetch(&self, inner: &str) -> Fetched {
        tracing::debug!(snippet = inner, shell = %self.shell.program, "Running placeholder snippet");

        match run_combined(&self.shell, inner).await {
            Ok(out) if out.status.success() => Fetched::ok(out.output),
            Ok(out) => Fetched::degraded(out.output, describe_failure(&out.status)),
            Err(e) => Fetched::degraded(String::new(), e.to_string()),
        }
    }
}
