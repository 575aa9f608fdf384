//! Release data model
//!
//! Everything the parsers produce and the matrix builders consume.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Version   │────▶│   Release   │────▶│   Filter    │
//! │   (parse)   │     │ (version,   │     │  (chain)    │
//! └─────────────┘     │  tag, kind) │     └─────────────┘
//!                     └─────────────┘            │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Matrix    │
//!                                         │(reduce/proj)│
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`version`]: Version grammar and parsing
//! - [`types`]: `Release`, `ClientKind`, `ServerKind`, `MatrixOptionKind`
//! - [`filter`]: Release filters and chain evaluation
//! - [`matrix`]: Latest-patch reduction and field projection
//! - [`error`]: Error types for parsing and fetching

pub mod error;
pub mod filter;
pub mod matrix;
pub mod types;
pub mod version;

pub use error::{ReleaseError, SourceError};
pub use filter::ReleaseFilter;
pub use types::{ClientKind, MatrixOptionKind, Release, ServerKind};
pub use version::Version;
