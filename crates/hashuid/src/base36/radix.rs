use crate::Base36Error;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;
const RADIX: i64 = 36;

/// Longest rendering of an `i64`: 13 digits for `2^63` plus the sign.
pub const MAX_BASE36_LEN: usize = 14;

/// Lookup table for base-36 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 36 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i; // uppercase letter
        }
        i += 1;
    }
    lut
};

/// Renders `value` in radix 36 into the tail of `buf` and returns the
/// rendered slice.
///
/// Negative values get a leading `-`. Zero renders as `"0"`.
pub fn encode_base36(value: i64, buf: &mut [u8; MAX_BASE36_LEN]) -> &str {
    let mut n = value.unsigned_abs();
    let mut pos = MAX_BASE36_LEN;
    loop {
        pos -= 1;
        buf[pos] = ALPHABET[(n % 36) as usize];
        n /= 36;
        if n == 0 {
            break;
        }
    }
    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }

    // SAFETY: every byte written is either `-` or taken from `ALPHABET`, all
    // of which are ASCII.
    unsafe { core::str::from_utf8_unchecked(&buf[pos..]) }
}

/// Decodes a signed radix-36 string into an `i64`.
///
/// Accepts an optional leading `-` followed by one or more digits from
/// `0-9`, `a-z` or `A-Z`. The value is accumulated negatively so that
/// `i64::MIN` decodes without overflow.
pub fn decode_base36(encoded: &str) -> Result<i64, Base36Error> {
    let bytes = encoded.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some(_) => (false, bytes),
        None => return Err(Base36Error::DecodeEmpty),
    };
    if digits.is_empty() {
        return Err(Base36Error::DecodeEmpty);
    }

    let overflow = || Base36Error::DecodeOverflow {
        input: encoded.to_owned(),
        bits: i64::BITS,
    };
    let offset = usize::from(negative);
    let mut acc = 0_i64;
    for (i, &b) in digits.iter().enumerate() {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return Err(Base36Error::DecodeInvalidAscii {
                byte: b,
                index: i + offset,
            });
        }
        acc = acc
            .checked_mul(RADIX)
            .and_then(|acc| acc.checked_sub(i64::from(val)))
            .ok_or_else(overflow)?;
    }

    if negative {
        Ok(acc)
    } else {
        acc.checked_neg().ok_or_else(overflow)
    }
}
