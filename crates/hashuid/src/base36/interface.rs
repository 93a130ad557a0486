use super::{MAX_BASE36_LEN, decode_base36, encode_base36};
use crate::Base36Error;
use core::fmt;

/// Extension trait for signed integers that render in radix 36.
///
/// The textual form uses the digits `0-9a-z`, carries a leading `-` for
/// negative values and never a leading `+`, so it can be embedded in the
/// dot-separated identifier grammar where `+` marks the time component.
/// Decoding also accepts upper-case digits.
///
/// # Example
///
/// ```
/// use hashuid::Base36Ext;
///
/// assert_eq!(1_786_070_i32.to_base36(), "12a52");
/// assert_eq!((-36_i64).to_base36(), "-10");
/// assert_eq!(i32::from_base36("42C").unwrap(), 5_268);
/// ```
pub trait Base36Ext: Sized + Copy {
    /// Encodes this value into a [`String`].
    fn to_base36(self) -> String {
        let mut out = String::with_capacity(MAX_BASE36_LEN);
        // Writing into a `String` cannot fail
        let _ = self.write_base36(&mut out);
        out
    }

    /// Writes this value into any [`fmt::Write`] sink without allocating.
    ///
    /// # Errors
    ///
    /// Propagates errors from the sink.
    fn write_base36<W: fmt::Write>(self, w: &mut W) -> fmt::Result;

    /// Decodes a radix-36 string into this integer type.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains a non-digit byte, or
    /// is out of range for `Self`.
    fn from_base36(s: &str) -> Result<Self, Base36Error>;
}

macro_rules! impl_base36_ext {
    ($($int:ty),*) => {
        $(
            impl Base36Ext for $int {
                fn write_base36<W: fmt::Write>(self, w: &mut W) -> fmt::Result {
                    let mut buf = [0_u8; MAX_BASE36_LEN];
                    w.write_str(encode_base36(i64::from(self), &mut buf))
                }

                fn from_base36(s: &str) -> Result<Self, Base36Error> {
                    let wide = decode_base36(s)?;
                    <$int>::try_from(wide).map_err(|_| Base36Error::DecodeOverflow {
                        input: s.to_owned(),
                        bits: <$int>::BITS,
                    })
                }
            }
        )*
    };
}

impl_base36_ext!(i32, i64);
