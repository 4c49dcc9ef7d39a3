//! Character attributes, derived stats, leveling, and persistence snapshots.

pub mod attributes;
pub mod derived_stats;
pub mod leveling;
pub mod save;
pub mod types;

pub use attributes::*;
pub use derived_stats::*;
pub use leveling::*;
pub use save::*;
pub use types::*;
