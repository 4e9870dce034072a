use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrlError {
    #[error("no dynamic arguments supplied, nothing to parallelize over")]
    NoPlaceholders,

    #[error(
        "number of input args in dynamic variables not the same: \
         {placeholder} has {found} values but {previous} has {expected}"
    )]
    ArgumentCountMismatch {
        placeholder: String,
        previous: String,
        expected: usize,
        found: usize,
    },

    #[error("failed to resolve {placeholder}: {reason}")]
    SourceResolution { placeholder: String, reason: String },

    #[error("job {index} failed ({command}): {reason}")]
    WorkerExecution {
        index: usize,
        command: String,
        reason: String,
    },

    #[error("interrupted, {skipped} queued jobs were not run")]
    Interrupted { skipped: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrlError>;
