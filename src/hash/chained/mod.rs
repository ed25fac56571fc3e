mod chained_hash_map;
mod hasher;

pub use chained_hash_map::*;
pub use hasher::*;
