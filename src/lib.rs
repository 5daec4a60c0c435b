#![deny(rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_precision_loss,      // likes / 100 bonus is a heuristic, not an exact value
    clippy::missing_errors_doc,       // Internal API
    clippy::missing_panics_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. CategoryDefinition in category module
    clippy::must_use_candidate,       // Annotated selectively on critical APIs
    clippy::doc_markdown              // Internal API
)]

pub mod app;
pub mod classifier;
pub mod config;
pub mod distribution;
pub mod domain;
pub mod export;
pub mod featured;
pub mod naming;
pub mod screening;

// Re-export main types for easy access
pub use classifier::{ClassificationStrategy, KeywordSelector, RuleBasedStrategy};
pub use config::{Config, ConfigError, CuratorSettings};
pub use distribution::{CategoryAssignment, Distribution, Distributor};
pub use domain::{CategoryDefinition, CuratorError, PostRecord};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
