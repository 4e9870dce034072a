//! Value sources turn a placeholder's inner text into a list of values.
//!
//! - [`ShellSource`]: runs the text as a shell snippet
//! - [`FileSource`]: reads the text as a file path
//!
//! Source failures do not stop the run. The failure is logged as a warning and whatever
//! text was captured (possibly nothing) is used; a short list then shows up as
//! an argument count mismatch during validation.

pub mod file;
pub mod shell;

pub use file::FileSource;
pub use shell::ShellSource;

use async_trait::async_trait;

use crate::config::{ShellConfig, SourceKind};
use crate::error::{PrlError, Result};
use crate::template::{scan, PlaceholderSpec, ValueSequence};

/// Raw text produced by a source, plus the failure if it did not fully succeed.
#[derive(Debug, Clone, Default)]
pub struct Fetched {
    pub text: String,
    pub failure: Option<String>,
}

impl Fetched {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: None,
        }
    }

    pub fn degraded(text: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: Some(failure.into()),
        }
    }
}

#[async_trait]
pub trait ValueSource: Send + Sync {
    /// Produce the raw text for a placeholder's inner text.
    async fn fetch(&self, inner: &str) -> Fetched;
}

/// Build the source for `kind`.
pub fn for_kind(kind: SourceKind, shell: &ShellConfig) -> Box<dyn ValueSource> {
    match kind {
        SourceKind::Shell => Box::new(ShellSource::new(shell.clone())),
        SourceKind::File => Box::new(FileSource),
    }
}

/// Count lines, treating a missing trailing newline as ending one more line.
pub fn count_lines(s: &str) -> usize {
    let mut n = s.matches('\n').count();
    if !s.is_empty() && !s.ends_with('\n') {
        n += 1;
    }
    n
}

/// Resolve a single placeholder.
pub async fn resolve(source: &dyn ValueSource, placeholder: PlaceholderSpec) -> ValueSequence {
    let fetched = source.fetch(placeholder.inner()).await;

    if let Some(reason) = fetched.failure {
        let err = PrlError::SourceResolution {
            placeholder: placeholder.to_string(),
            reason,
        };
        tracing::warn!(error = %err, "Continuing with partial values");
    }

    tracing::debug!(
        placeholder = %placeholder,
        lines = count_lines(&fetched.text),
        "Placeholder resolved"
    );

    ValueSequence::from_text(placeholder, &fetched.text)
}

/// Scan `template` and resolve every placeholder in order.
///
/// Fails with [`PrlError::NoPlaceholders`] before touching the source when the
/// template has nothing to expand.
pub async fn resolve_template(
    source: &dyn ValueSource,
    template: &str,
) -> Result<Vec<ValueSequence>> {
    let placeholders = scan(template);
    if placeholders.is_empty() {
        return Err(PrlError::NoPlaceholders);
    }

    let mut sequences = Vec::with_capacity(placeholders.len());
    for placeholder in placeholders {
        sequences.push(resolve(source, placeholder).await);
    }
    Ok(sequences)
}
