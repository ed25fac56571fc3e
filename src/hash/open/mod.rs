mod error;
mod open_hash_map;

pub use error::*;
pub use open_hash_map::*;
