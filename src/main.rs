use std::process::ExitCode;

use clap::builder::RangedU64ValueParser;
use clap::{CommandFactory, Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use prl::config::{
    FailurePolicy, RunConfig, ShellConfig, SourceKind, DEFAULT_PROGRESS_LABEL, DEFAULT_WORKERS,
};
use prl::reporter::OutputFormat;
use prl::shutdown::install_shutdown_handler;
use prl::Runner;

#[derive(Parser, Debug)]
#[command(name = "prl")]
#[command(version)]
#[command(about = "Expand a command template over value lists and run it on a worker pool")]
#[command(
    long_about = "Expand a command template over value lists and run it on a worker pool.\n\n\
                  Every {...} in the template is resolved to a list of values, one per line. \
                  All lists must have the same length; one command is built per line and \
                  the commands run in parallel. Use --dry-run to see the generated commands."
)]
struct Args {
    /// Number of workers
    #[arg(
        short = 'j',
        long = "jobs",
        default_value_t = DEFAULT_WORKERS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    workers: usize,

    /// Command template to parallelize over, e.g. 'gzip {ls *.log}'
    #[arg(short = 'c', long = "cmd")]
    template: String,

    /// Print the generated commands instead of running them
    #[arg(long)]
    dry_run: bool,

    /// Label logged when execution starts
    #[arg(long = "progbar-string", default_value = DEFAULT_PROGRESS_LABEL)]
    progress_label: String,

    /// Don't print command results
    #[arg(short = 's', long)]
    silent: bool,

    /// How placeholder text is turned into values
    #[arg(long, value_enum, default_value = "shell")]
    source: SourceArg,

    /// POSIX-compatible shell used for placeholder snippets and jobs
    #[arg(long, default_value = "bash")]
    shell: String,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value = "text")]
    output: OutputArg,
}

#[derive(Debug, Clone, ValueEnum)]
enum SourceArg {
    /// Run the placeholder text as a shell snippet
    Shell,
    /// Read the placeholder text as a file path
    File,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl Args {
    fn into_config(self) -> RunConfig {
        RunConfig {
            template: self.template,
            workers: self.workers,
            dry_run: self.dry_run,
            progress_label: self.progress_label,
            silent: self.silent,
            source: match self.source {
                SourceArg::Shell => SourceKind::Shell,
                SourceArg::File => SourceKind::File,
            },
            shell: ShellConfig::new(self.shell),
            failure_policy: FailurePolicy::Abort,
            output: match self.output {
                OutputArg::Text => OutputFormat::Text,
                OutputArg::Json => OutputFormat::Json,
            },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only commands and results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.into_config();
    tracing::debug!(?config, "Parsed configuration");

    let stop = match install_shutdown_handler() {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(error = %e, "Could not install signal handlers");
            CancellationToken::new()
        }
    };

    let runner = Runner::new(config);
    let mut stdout = std::io::stdout();

    match runner.run(&mut stdout, stop).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", Args::command().render_usage());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
