use super::{Extra, SEGMENT_SEPARATOR, Uid};
use crate::{Base36Ext, Error, Result};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Marker between the third hash segment and the time component.
pub const TIME_SEPARATOR: char = '+';

/// Raw time value reported when an identifier carries no time.
pub const NO_TIME: i64 = -1;

/// A content-hash identifier.
///
/// A `HashUid` is made of three 32-bit components of a hash over a record's
/// raw content, an optional time and an optional [`Extra`] uniqueifier. Its
/// textual form is
///
/// ```text
/// base36(h0) '.' base36(h1) '.' base36(h2) ['+' base36(time)] ['.' extra]
/// ```
///
/// The part before the extra is the *sharded portion*: every identifier
/// derived from the same content and time shares it, whatever its extra.
///
/// Identifiers are ordered by their textual form, which is the order they
/// take as row keys in a lexicographically sorted store.
///
/// # Example
///
/// ```
/// use hashuid::{HashUid, Uid};
///
/// let uid = HashUid::parse("12a52.23b52.12c65+42c.something_extra")?;
/// assert_eq!(uid.option_prefix(), "12a52");
/// assert_eq!(uid.time(), Some(5_268));
/// assert_eq!(uid.extra().unwrap(), "something_extra");
/// assert_eq!(uid.sharded_portion(), "12a52.23b52.12c65+42c");
/// # Ok::<(), hashuid::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashUid {
    h0: i32,
    h1: i32,
    h2: i32,
    time: Option<i64>,
    extra: Option<Extra>,
}

impl HashUid {
    /// Creates an identifier from its three hash components, with no time and
    /// no extra.
    #[must_use]
    pub const fn from_hashes(h0: i32, h1: i32, h2: i32) -> Self {
        Self {
            h0,
            h1,
            h2,
            time: None,
            extra: None,
        }
    }

    /// Creates an identifier from all of its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeTime`] if `time` is negative.
    pub fn from_components(
        h0: i32,
        h1: i32,
        h2: i32,
        time: Option<i64>,
        extra: Option<Extra>,
    ) -> Result<Self> {
        if let Some(time) = time.filter(|t| *t < 0) {
            return Err(Error::NegativeTime { time });
        }
        Ok(Self {
            h0,
            h1,
            h2,
            time,
            extra,
        })
    }

    /// Returns a copy of this identifier stamped with `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeTime`] if `time` is negative.
    pub fn with_time(self, time: i64) -> Result<Self> {
        Self::from_components(self.h0, self.h1, self.h2, Some(time), self.extra)
    }

    /// Stamps a time already known to be non-negative.
    pub(crate) fn stamped(self, time: i64) -> Self {
        debug_assert!(time >= 0, "negative time");
        Self {
            time: Some(time),
            ..self
        }
    }

    /// Returns this identifier with its extra replaced by `extra`.
    #[must_use]
    pub fn with_extra(self, extra: Option<Extra>) -> Self {
        Self { extra, ..self }
    }

    /// Returns the identifier of the sharded portion alone, i.e. this
    /// identifier without its extra.
    #[must_use]
    pub fn without_extra(&self) -> Self {
        Self {
            extra: None,
            ..self.clone()
        }
    }

    /// First hash component.
    #[must_use]
    pub const fn h0(&self) -> i32 {
        self.h0
    }

    /// Second hash component.
    #[must_use]
    pub const fn h1(&self) -> i32 {
        self.h1
    }

    /// Third hash component.
    #[must_use]
    pub const fn h2(&self) -> i32 {
        self.h2
    }

    /// The time, or [`NO_TIME`] when absent.
    #[must_use]
    pub fn raw_time(&self) -> i64 {
        self.time.unwrap_or(NO_TIME)
    }

    /// Number of extra segments, `0` without an extra.
    #[must_use]
    pub fn extra_depth(&self) -> usize {
        self.extra.as_ref().map_or(0, Extra::depth)
    }

    /// The base-36 rendering of `h0`, used as a routing/bucketing prefix.
    #[must_use]
    pub fn option_prefix(&self) -> String {
        self.h0.to_base36()
    }

    fn write_sharded<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        self.h0.write_base36(w)?;
        w.write_char(SEGMENT_SEPARATOR)?;
        self.h1.write_base36(w)?;
        w.write_char(SEGMENT_SEPARATOR)?;
        self.h2.write_base36(w)?;
        if let Some(time) = self.time {
            w.write_char(TIME_SEPARATOR)?;
            time.write_base36(w)?;
        }
        Ok(())
    }

    /// Splits `s` into the three hash segments and whatever follows the third
    /// separator, then decodes the hash and time parts.
    fn parse_parts(s: &str) -> Result<(Self, Option<&str>)> {
        let mut parts = s.splitn(4, SEGMENT_SEPARATOR);
        let (Some(s0), Some(s1), Some(s2)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::MissingSegments {
                input: s.to_owned(),
                parts: s.split(SEGMENT_SEPARATOR).count(),
            });
        };
        let (s2, time) = match s2.split_once(TIME_SEPARATOR) {
            Some((hash, time)) => (hash, Some(i64::from_base36(time)?)),
            None => (s2, None),
        };
        let uid = Self::from_components(
            i32::from_base36(s0)?,
            i32::from_base36(s1)?,
            i32::from_base36(s2)?,
            time,
            None,
        )?;
        Ok((uid, parts.next()))
    }

    fn parse_full(s: &str) -> Result<Self> {
        let (uid, extra) = Self::parse_parts(s)?;
        let extra = extra.map(Extra::new).transpose()?;
        Ok(uid.with_extra(extra))
    }
}

impl Uid for HashUid {
    #[cfg_attr(feature = "tracing", instrument(level = "trace", err(level = "debug")))]
    fn parse(s: &str) -> Result<Self> {
        Self::parse_full(s)
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", err(level = "debug")))]
    fn parse_with_depth(s: &str, depth: isize) -> Result<Self> {
        let uid = Self::parse_full(s)?;
        let extra = uid.extra.as_ref().and_then(|e| e.truncated(depth));
        Ok(uid.with_extra(extra))
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", err(level = "debug")))]
    fn parse_base(s: &str) -> Result<Self> {
        Self::parse_parts(s).map(|(uid, _)| uid)
    }

    fn sharded_portion(&self) -> String {
        let mut out = String::with_capacity(32);
        // Writing into a `String` cannot fail
        let _ = self.write_sharded(&mut out);
        out
    }

    fn extra(&self) -> Option<&Extra> {
        self.extra.as_ref()
    }

    fn time(&self) -> Option<i64> {
        self.time
    }
}

impl fmt::Display for HashUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sharded(f)?;
        if let Some(extra) = &self.extra {
            write!(f, "{SEGMENT_SEPARATOR}{extra}")?;
        }
        Ok(())
    }
}

impl Ord for HashUid {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        self.to_string().cmp(&other.to_string())
    }
}

impl PartialOrd for HashUid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for HashUid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HashUid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<HashUid> for String {
    fn from(uid: HashUid) -> Self {
        uid.to_string()
    }
}

impl From<&HashUid> for String {
    fn from(uid: &HashUid) -> Self {
        uid.to_string()
    }
}

impl PartialEq<str> for HashUid {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for HashUid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<HashUid> for &str {
    fn eq(&self, other: &HashUid) -> bool {
        other == *self
    }
}
