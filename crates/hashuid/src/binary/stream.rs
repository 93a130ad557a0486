//! Big-endian primitives shared by the binary identifier codecs.
//!
//! The layout matches Java's `DataOutput`: fixed-width big-endian integers,
//! one byte per boolean, and strings as a `u16` byte length followed by the
//! UTF-8 bytes.

use std::io::{self, Read, Write};

pub(crate) fn invalid_data(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

fn read_array<const N: usize, R: Read + ?Sized>(r: &mut R) -> io::Result<[u8; N]> {
    let mut buf = [0_u8; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

pub(crate) fn read_i32<R: Read + ?Sized>(r: &mut R) -> io::Result<i32> {
    read_array(r).map(i32::from_be_bytes)
}

pub(crate) fn read_i64<R: Read + ?Sized>(r: &mut R) -> io::Result<i64> {
    read_array(r).map(i64::from_be_bytes)
}

pub(crate) fn write_flag<W: Write + ?Sized>(w: &mut W, flag: bool) -> io::Result<()> {
    w.write_all(&[u8::from(flag)])
}

pub(crate) fn read_flag<R: Read + ?Sized>(r: &mut R) -> io::Result<bool> {
    match read_array::<1, _>(r)? {
        [0] => Ok(false),
        [1] => Ok(true),
        [b] => Err(invalid_data(format!("invalid presence flag {b:#04x}"))),
    }
}

pub(crate) fn write_utf<W: Write + ?Sized>(w: &mut W, s: &str) -> io::Result<()> {
    let len = u16::try_from(s.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("string of {} bytes exceeds {} bytes", s.len(), u16::MAX),
        )
    })?;
    w.write_all(&len.to_be_bytes())?;
    w.write_all(s.as_bytes())
}

pub(crate) fn read_utf<R: Read + ?Sized>(r: &mut R) -> io::Result<String> {
    let len = u16::from_be_bytes(read_array(r)?);
    let mut buf = vec![0_u8; usize::from(len)];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| invalid_data(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf_is_length_prefixed() {
        let mut out = Vec::new();
        write_utf(&mut out, "blabla").unwrap();
        assert_eq!(out, b"\x00\x06blabla");
        assert_eq!(read_utf(&mut out.as_slice()).unwrap(), "blabla");
    }

    #[test]
    fn utf_rejects_oversized_strings() {
        let long = "x".repeat(usize::from(u16::MAX) + 1);
        let err = write_utf(&mut Vec::new(), &long).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn utf_rejects_invalid_bytes() {
        let err = read_utf(&mut &b"\x00\x02\xff\xfe"[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn flags_are_strict() {
        assert!(!read_flag(&mut &[0_u8][..]).unwrap());
        assert!(read_flag(&mut &[1_u8][..]).unwrap());
        let err = read_flag(&mut &[2_u8][..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn truncated_integers_are_eof() {
        let err = read_i64(&mut &[0_u8; 7][..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(read_i32(&mut &[0, 0, 1, 0][..]).unwrap(), 256);
    }
}
