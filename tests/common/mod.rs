//! Common test utilities shared between the offline suite (tests/api) and
//! the live suite (tests/live).

pub mod helpers;

pub use helpers::*;
