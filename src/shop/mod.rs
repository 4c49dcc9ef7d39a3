//! The shop between runs: stock rotation, trading, repairs and the vault.

pub mod stock;
pub mod trade;
pub mod vault;

pub use stock::*;
pub use trade::*;
pub use vault::*;
