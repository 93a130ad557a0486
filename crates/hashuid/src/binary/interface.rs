use super::stream::invalid_data;
use crate::Result;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io;

/// Fixed-order binary serialization for identifiers.
///
/// Decoding is a factory: [`UidWritable::read_from`] either returns a fully
/// built identifier or fails, it never yields a partially populated value.
pub trait UidWritable: Sized {
    /// Writes this identifier's binary form to `w`.
    ///
    /// # Errors
    ///
    /// Propagates errors from `w`, and fails with
    /// [`io::ErrorKind::InvalidInput`] if a field cannot be represented.
    fn write_to<W: io::Write + ?Sized>(&self, w: &mut W) -> io::Result<()>;

    /// Reads an identifier previously written with [`UidWritable::write_to`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the stream is truncated
    /// ([`io::ErrorKind::UnexpectedEof`]) or corrupt
    /// ([`io::ErrorKind::InvalidData`]).
    fn read_from<R: io::Read + ?Sized>(r: &mut R) -> Result<Self>;
}

/// Extension trait converting identifiers to and from in-memory buffers.
///
/// # Example
///
/// ```
/// use hashuid::{BinaryUidExt, HashUid, Uid};
///
/// let uid = HashUid::parse("12a52.23b52.12c65+42c.blabla")?;
/// let bytes = uid.to_bytes()?;
/// assert_eq!(HashUid::from_bytes(bytes)?, uid);
/// # Ok::<(), hashuid::Error>(())
/// ```
pub trait BinaryUidExt: UidWritable {
    /// Encodes this identifier into a new [`Bytes`] buffer.
    ///
    /// # Errors
    ///
    /// Fails if a field cannot be represented, see
    /// [`UidWritable::write_to`].
    fn to_bytes(&self) -> Result<Bytes> {
        let mut w = BytesMut::with_capacity(32).writer();
        self.write_to(&mut w)?;
        Ok(w.into_inner().freeze())
    }

    /// Decodes an identifier that must span the whole of `buf`.
    ///
    /// # Errors
    ///
    /// Fails like [`UidWritable::read_from`], and with
    /// [`io::ErrorKind::InvalidData`] if bytes remain after the identifier.
    fn from_bytes<B: Buf>(buf: B) -> Result<Self> {
        let mut r = buf.reader();
        let uid = Self::read_from(&mut r)?;
        let trailing = r.get_ref().remaining();
        if trailing > 0 {
            return Err(invalid_data(format!("{trailing} trailing bytes after uid")).into());
        }
        Ok(uid)
    }
}

impl<U: UidWritable> BinaryUidExt for U {}
