use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyExists {
    pub key: u64,
}

impl Display for KeyExists {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key {} is already present in the table!", self.key)
    }
}

impl Error for KeyExists {}

/// Every slot on the probe sequence of a key is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFull;

impl Display for TableFull {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No free slot left on the probe sequence!")
    }
}

impl Error for TableFull {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound {
    pub key: u64,
}

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key {} isn't present in the table!", self.key)
    }
}

impl Error for KeyNotFound {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    KeyExists(KeyExists),
    TableFull(TableFull),
}
