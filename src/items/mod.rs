//! Item instances, equipment slots, bag management and durability.

pub mod durability;
pub mod equipment;
pub mod inventory;
pub mod types;

pub use durability::*;
pub use equipment::*;
pub use inventory::*;
pub use types::*;
