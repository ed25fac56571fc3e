//! Panicking conversions for results.

use std::error::Error;

/// Panicking access to [`Result`]s carrying this crate's error types, used by the non-`try`
/// halves of fallible operations.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Like [`Result::unwrap`], but the panic message is the error's own
    /// [`Display`](std::fmt::Display) output rather than its [`Debug`](std::fmt::Debug) form. The
    /// panic is reported at the caller's location.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
