//! Test helpers for code paths that are expected to panic.

/// Asserts that the provided block panics. The unwind is caught so the test can carry on, and
/// anything the block borrows is treated as unwind safe since it is never used after a panic.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "Block was expected to panic!")
    };
    ($run:block, $msg:literal) => {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
