//! Template handling: placeholder scanning, validation and expansion.
//!
//! A template is an arbitrary command string with zero or more `{...}`
//! placeholders. Each placeholder is resolved to a list of values by a
//! [`ValueSource`](crate::source::ValueSource); the lists must all have the
//! same length, and the expander then builds one job per index.
//!
//! # Components
//!
//! - [`scan`]: finds placeholders (non-greedy, no nesting)
//! - [`validate`]: checks that all value lists have the same length
//! - [`expand`]: substitutes values into the template, one [`Job`](crate::scheduler::Job) per index

pub mod expand;
pub mod placeholder;
pub mod validate;

pub use expand::expand;
pub use placeholder::{scan, PlaceholderSpec, ValueSequence};
pub use validate::validate;
