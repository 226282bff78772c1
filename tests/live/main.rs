#![cfg(feature = "live-tests")]

//! Acceptance suite against the configured favorites host.
//! These tests reach out to the network and create real records.
//! Run with: cargo test --features live-tests --test live

#[path = "../common/mod.rs"]
mod common;
