//! maskedit - pattern-based text masking for input fields
//!
//! This crate compiles masks such as `(000) 000-0000` into slot patterns and
//! provides the editing engine behind a masked input: typing, deletion,
//! paste, selection replacement and pattern changes under two reflow
//! policies.

pub mod config;
pub mod config_paths;
pub mod error;
pub mod mask;
pub mod tracing;

// Re-export commonly used types
pub use config::MaskConfig;
pub use error::MaskError;
pub use mask::{
    CharClassTable, EditOutcome, MaskEditMsg, MaskOptions, MaskState, MaskSync, Pattern,
    ReflowPolicy,
};
