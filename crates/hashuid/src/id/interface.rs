use crate::{Error, Extra, Result, UidWritable};
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

/// The identifier capability shared by every identifier scheme.
///
/// An identifier has a canonical textual form (its [`fmt::Display`]
/// rendering, which [`Uid::parse`] inverts), a fixed-order binary form (via
/// [`UidWritable`]), and a total order. Consumers that route or sort by
/// physical placement rely only on [`Ord`] and [`Uid::sharded_portion`].
///
/// [`HashUid`](crate::HashUid) is the provided implementation.
pub trait Uid:
    Clone + fmt::Debug + fmt::Display + Ord + Hash + FromStr<Err = Error> + UidWritable
{
    /// Parses the full textual form, keeping the extra verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the mandatory prefix is missing or malformed, or if
    /// the extra contains an empty segment.
    fn parse(s: &str) -> Result<Self>;

    /// Parses like [`Uid::parse`], then keeps at most the first `depth` extra
    /// segments. A negative `depth` keeps everything, `0` drops the extra.
    ///
    /// # Errors
    ///
    /// Same as [`Uid::parse`].
    fn parse_with_depth(s: &str, depth: isize) -> Result<Self>;

    /// Parses only the sharded portion, discarding any extra unexamined.
    ///
    /// Identifiers that differ only in their extra parse to equal values.
    ///
    /// # Errors
    ///
    /// Returns an error if the mandatory prefix is missing or malformed.
    fn parse_base(s: &str) -> Result<Self>;

    /// The textual form without the extra: the physical placement key shared
    /// by every identifier derived from the same content and time.
    fn sharded_portion(&self) -> String;

    /// Alias of [`Uid::sharded_portion`].
    fn base_uid(&self) -> String {
        self.sharded_portion()
    }

    /// The uniqueifier, if any.
    fn extra(&self) -> Option<&Extra>;

    /// The time component, if any.
    fn time(&self) -> Option<i64>;

    /// Compares against a possibly absent identifier. An absent identifier
    /// sorts first, so this is never [`Ordering::Equal`] for `None`.
    fn compare_to(&self, other: Option<&Self>) -> Ordering {
        crate::compare(Some(self), other)
    }
}
