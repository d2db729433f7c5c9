//! Shared primitives for the gapalign workspace.
//!
//! - **Error types**: [`AlignError`] and [`Result`] for structured error handling
//! - **Traits**: [`Sequence`] for alignment inputs, [`Scored`] for results

pub mod error;
pub mod traits;

pub use error::{AlignError, Result};
pub use traits::*;
