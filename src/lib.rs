//! cozy - Journal of daily memories
//!
//! Each day gets one memory made of text, photo, sketch and voice chunks.
//! Memories carry type-safe tags that can be ranked, counted and used to
//! filter the journal.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CozyError;
