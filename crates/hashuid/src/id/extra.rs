use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Segment separator inside an [`Extra`], and between identifier parts.
pub const SEGMENT_SEPARATOR: char = '.';

/// A hierarchical uniqueifier: one or more non-empty, dot-separated segments.
///
/// An `Extra` distinguishes identifiers whose hash and time collide, and can
/// be used to address a position in a shard hierarchy. Its content is opaque
/// beyond the segment structure.
///
/// # Example
///
/// ```
/// use hashuid::Extra;
///
/// let extra = Extra::new("attachment.2.page")?;
/// assert_eq!(extra.depth(), 3);
/// assert_eq!(extra.truncated(2).unwrap(), "attachment.2");
/// assert!(Extra::new("a..b").is_err());
/// # Ok::<(), hashuid::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Extra(String);

impl Extra {
    /// Validates and wraps `extra`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtra`] if `extra` is empty or contains an
    /// empty segment (leading, trailing or doubled separators).
    pub fn new(extra: impl Into<String>) -> Result<Self> {
        let extra = extra.into();
        if extra.split(SEGMENT_SEPARATOR).any(str::is_empty) {
            return Err(Error::InvalidExtra { extra });
        }
        Ok(Self(extra))
    }

    /// Returns the dot-joined textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEGMENT_SEPARATOR)
    }

    /// Number of segments, always at least one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.matches(SEGMENT_SEPARATOR).count() + 1
    }

    /// Keeps at most the first `depth` segments.
    ///
    /// - `depth < 0`, or at least [`Self::depth`]: unchanged
    /// - `depth == 0`: `None`, the extra is dropped entirely
    /// - otherwise: the first `depth` segments, dot-joined
    #[must_use]
    pub fn truncated(&self, depth: isize) -> Option<Self> {
        let Ok(keep) = usize::try_from(depth) else {
            return Some(self.clone());
        };
        if keep == 0 {
            return None;
        }
        match self.0.match_indices(SEGMENT_SEPARATOR).nth(keep - 1) {
            Some((end, _)) => Some(Self(self.0[..end].to_owned())),
            None => Some(self.clone()),
        }
    }

    /// Returns a new extra one or more levels below this one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtra`] if `segment` would introduce an empty
    /// segment.
    pub fn child(&self, segment: &str) -> Result<Self> {
        Self::new(format!("{}{SEGMENT_SEPARATOR}{segment}", self.0))
    }

    /// Drops the last segment, or returns `None` for a single-segment extra.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once(SEGMENT_SEPARATOR)
            .map(|(parent, _)| Self(parent.to_owned()))
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Extra {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Extra {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Extra {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Extra {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Extra> for String {
    fn from(extra: Extra) -> Self {
        extra.0
    }
}

impl PartialEq<str> for Extra {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Extra {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
