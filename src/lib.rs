pub mod config;
pub mod error;
pub mod reporter;
pub mod run;
pub mod scheduler;
pub mod shell;
pub mod shutdown;
pub mod source;
pub mod template;
pub mod worker;

pub use config::RunConfig;
pub use error::{PrlError, Result};
pub use run::Runner;
