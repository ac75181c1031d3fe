use std::error::Error;
use std::panic::Location;

use tracing::error;

/// Panicking counterparts for the fallible `try_` methods of the collections.
pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`] value, or panics with the message of the error itself. The error is
    /// emitted as a tracing event before panicking, tagged with the location of the caller.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(err) => {
                error!(%err, location = %Location::caller(), "collection operation failed");
                panic!("{err}")
            },
        }
    }
}
