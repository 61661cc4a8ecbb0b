//! Domain layer - Business logic and domain models

pub mod memory;
pub mod tags;

pub use memory::{Chunk, Memory};
