//! Static game tables: races, classes, items, enemy templates and prefixes.

pub mod classes;
pub mod enemies;
pub mod items;
pub mod prefixes;
pub mod races;

pub use classes::*;
pub use enemies::*;
pub use items::*;
pub use prefixes::*;
pub use races::*;
