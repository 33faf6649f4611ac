//! Configuration:
//! - `types.rs` (data structures + defaults)
//! - `load.rs`  (IO: load_default / load_from + env overrides)

pub mod load;
pub mod types;

pub use load::{load_default, load_from};
pub use types::*;
