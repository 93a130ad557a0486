use crate::Base36Error;

/// A result type defaulting to the crate's [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `hashuid` can produce.
///
/// Every variant except [`Error::Io`] describes a malformed input value and
/// reports `true` from [`Error::is_invalid_argument`]. Stream failures from
/// the binary codec are kept as the underlying [`std::io::Error`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The textual form is missing one of the three mandatory hash segments.
    #[error("malformed uid `{input}`: expected at least 3 dot-separated parts, found {parts}")]
    MissingSegments {
        /// The rejected input.
        input: String,
        /// Number of dot-separated parts that were found.
        parts: usize,
    },

    /// A hash or time segment is not a valid base-36 integer.
    #[error("base36 error: {0}")]
    Base36Error(#[from] Base36Error),

    /// The time component is negative. `-1` is reserved for "absent".
    #[error("invalid time {time}: must be non-negative")]
    NegativeTime {
        /// The rejected time value.
        time: i64,
    },

    /// The extra uniqueifier is empty or has an empty segment.
    #[error("invalid extra `{extra}`: segments must be non-empty")]
    InvalidExtra {
        /// The rejected extra value.
        extra: String,
    },

    /// Reading or writing the binary form failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the error was caused by a malformed input value
    /// rather than by the underlying stream.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            other => Self::new(std::io::ErrorKind::InvalidData, other),
        }
    }
}
