//! Domain layer for showcase-curator.
//!
//! Contains the canonical types shared across all modules:
//! - `PostRecord`: one scraped Instagram post, the pipeline's input unit
//! - `CategoryDefinition`: a gallery page's theme, metadata and keywords
//! - `CuratorError`: Top-level error type

pub mod category;
pub mod error;
pub mod post;

pub use category::CategoryDefinition;
pub use error::CuratorError;
pub use post::PostRecord;
