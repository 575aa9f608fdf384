//! Release matrices for server and client test runs
//!
//! Reads the plain-text server and client release feeds, turns them into
//! typed [`release::Release`] values, filters them and reduces them to the
//! entries a CI matrix needs (for example the latest patch of each minor line).
//!
//! # Modules
//!
//! - [`release`]: Version and release data model, filters, reductions
//! - [`parser`]: Feed parsers and the shared fetch/parse/filter pipeline
//! - [`source`]: Fetching feed text
//! - [`artifact`]: Maven downloads of server jars
//! - [`launcher`]: Starting the remote controller
//! - [`readiness`]: Waiting for the remote controller port
//! - [`config`]: Constants and user configuration
//! - [`logging`]: Tracing subscriber setup

pub mod artifact;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod parser;
pub mod readiness;
pub mod release;
pub mod source;
