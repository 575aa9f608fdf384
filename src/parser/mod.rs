//! Parser layer
//! - traits.rs: ReleaseParser trait and the shared fetch/parse/filter pipeline
//! - block.rs: Release block splitting and `Key: Value` extraction
//! - server.rs: Server release feed parser
//! - client.rs: Client release feed parser

pub mod block;
pub mod client;
pub mod server;
pub mod traits;

pub use client::ClientReleaseParser;
pub use server::ServerReleaseParser;
pub use traits::{ReleaseParser, get_all_releases, parse_releases};
