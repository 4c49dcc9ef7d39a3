//! Enemy instances and the scaled enemy generator.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
