//! Hash tables: separate chaining, open addressing with double hashing, and a number word
//! dictionary built on the chained table.

pub mod chained;
pub mod dictionary;
pub mod open;

#[doc(inline)]
pub use chained::{ChainedHashMap, Djb2Builder, ShiftAddBuilder};
#[doc(inline)]
pub use dictionary::NumberDictionary;
#[doc(inline)]
pub use open::OpenHashMap;
