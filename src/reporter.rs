use std::io::Write;

use crate::error::Result;
use crate::scheduler::{Job, JobResult};

const DIVIDER_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Divider-separated blocks
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Renders expanded commands (dry run) or job results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    format: OutputFormat,
    silent: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, silent: bool) -> Self {
        Self { format, silent }
    }

    /// Print the expanded commands in job order.
    pub fn report_commands<W: Write>(&self, out: &mut W, jobs: &[Job]) -> Result<()> {
        if self.silent {
            return Ok(());
        }
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(jobs)?)?;
            }
            OutputFormat::Text => {
                for job in jobs {
                    write_block(out, &job.command)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Print job results in the order given.
    pub fn report_results<W: Write>(&self, out: &mut W, results: &[JobResult]) -> Result<()> {
        if self.silent {
            return Ok(());
        }
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(results)?)?;
            }
            OutputFormat::Text => {
                // Separate from anything the progress log left on the line
                writeln!(out)?;
                for result in results {
                    write_block(out, &result.output)?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn write_block<W: Write>(out: &mut W, body: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(DIVIDER_WIDTH))?;
    writeln!(out, "{}", body)
}
