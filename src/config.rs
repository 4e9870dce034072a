use crate::reporter::OutputFormat;

pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_PROGRESS_LABEL: &str = "Executing commands...";

/// Shell used both to resolve placeholder snippets and to run jobs.
///
/// Scripts are prefixed with `exec 2>&1;`, so the program must be
/// POSIX-compatible (bash, dash, zsh, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Shell program (e.g. "bash")
    pub program: String,
    /// Flag that makes the shell read the script from its next argument
    pub script_flag: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: "bash".to_string(),
            script_flag: "-c".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }
}

/// How a placeholder's inner text is turned into values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Run the text as a shell snippet and split its output into lines
    #[default]
    Shell,
    /// Read the file at the text's path and split it into lines
    File,
}

/// What the dispatcher does once a job fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop handing out queued jobs and fail the run
    #[default]
    Abort,
    /// Run every job and leave the decision to the caller
    Continue,
}

/// Everything one run needs, passed explicitly through the pipeline.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub template: String,
    pub workers: usize,
    pub dry_run: bool,
    pub progress_label: String,
    pub silent: bool,
    pub source: SourceKind,
    pub shell: ShellConfig,
    pub failure_policy: FailurePolicy,
    pub output: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            template: String::new(),
            workers: DEFAULT_WORKERS,
            dry_run: false,
            progress_label: DEFAULT_PROGRESS_LABEL.to_string(),
            silent: false,
            source: SourceKind::default(),
            shell: ShellConfig::default(),
            failure_policy: FailurePolicy::default(),
            output: OutputFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_config_default() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.program, "bash");
        assert_eq!(cfg.script_flag, "-c");
    }

    #[test]
    fn shell_config_new_keeps_script_flag() {
        let cfg = ShellConfig::new("sh");
        assert_eq!(cfg.program, "sh");
        assert_eq!(cfg.script_flag, "-c");
    }

    #[test]
    fn run_config_default() {
        let cfg = RunConfig::default();
        assert!(cfg.template.is_empty());
        assert_eq!(cfg.workers, 4);
        assert!(!cfg.dry_run);
        assert_eq!(cfg.progress_label, "Executing commands...");
        assert!(!cfg.silent);
        assert_eq!(cfg.source, SourceKind::Shell);
        assert_eq!(cfg.failure_policy, FailurePolicy::Abort);
        assert_eq!(cfg.output, OutputFormat::Text);
    }

    #[test]
    fn run_config_builders() {
        let cfg = RunConfig::new("echo {seq 3}")
            .with_workers(8)
            .with_source(SourceKind::File)
            .with_failure_policy(FailurePolicy::Continue)
            .with_output(OutputFormat::Json)
            .dry_run(true)
            .silent(true);
        assert_eq!(cfg.template, "echo {seq 3}");
        assert_eq!(cfg.workers, 8);
        assert_eq!(cfg.source, SourceKind::File);
        assert_eq!(cfg.failure_policy, FailurePolicy::Continue);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(cfg.dry_run);
        assert!(cfg.silent);
    }
}
