//! Shared fixtures for integration tests

#![allow(dead_code)]

pub mod feeds;

pub use feeds::{CLIENT_FEED, SERVER_FEED, serve_feed};
