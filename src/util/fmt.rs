//! Formatting helpers.

use std::fmt::{self, Debug, Formatter};

/// Text written as is by [`Debug`], so that a collection can hand `debug_list` and friends an
/// entry it has already rendered, such as a whole hash bucket.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
