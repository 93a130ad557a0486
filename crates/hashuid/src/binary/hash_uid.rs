use super::UidWritable;
use super::stream::{read_flag, read_i32, read_i64, read_utf, write_flag, write_utf};
use crate::{Extra, HashUid, Result, Uid};
use std::io;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Field order: `h0:i32, h1:i32, h2:i32, time?:bool, [time:i64],
/// extra?:bool, [extra:utf]`.
impl UidWritable for HashUid {
    fn write_to<W: io::Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.h0().to_be_bytes())?;
        w.write_all(&self.h1().to_be_bytes())?;
        w.write_all(&self.h2().to_be_bytes())?;
        write_flag(w, self.time().is_some())?;
        if let Some(time) = self.time() {
            w.write_all(&time.to_be_bytes())?;
        }
        write_flag(w, self.extra().is_some())?;
        if let Some(extra) = self.extra() {
            write_utf(w, extra.as_str())?;
        }
        Ok(())
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip_all, err(level = "debug"))
    )]
    fn read_from<R: io::Read + ?Sized>(r: &mut R) -> Result<Self> {
        let h0 = read_i32(r)?;
        let h1 = read_i32(r)?;
        let h2 = read_i32(r)?;
        let time = if read_flag(r)? {
            Some(read_i64(r)?)
        } else {
            None
        };
        let extra = if read_flag(r)? {
            Some(Extra::new(read_utf(r)?).map_err(io::Error::from)?)
        } else {
            None
        };
        // Field-level failures on a stream are corrupt data, not bad arguments
        let uid = Self::from_components(h0, h1, h2, time, extra).map_err(io::Error::from)?;
        Ok(uid)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryUidExt, Error, Extra, HashUid, UidWritable};
    use std::io;

    fn variants() -> Vec<HashUid> {
        let base = HashUid::from_hashes(-1_234_567, 0, i32::MAX);
        let extra = Extra::new("blabla.blabla").unwrap();
        vec![
            base.clone(),
            base.clone().with_time(5_268).unwrap(),
            base.clone().with_extra(Some(extra.clone())),
            base.with_time(0).unwrap().with_extra(Some(extra)),
        ]
    }

    #[test]
    fn stream_roundtrip_for_every_presence_combination() {
        for uid in variants() {
            let mut out = Vec::new();
            uid.write_to(&mut out).unwrap();
            let back = HashUid::read_from(&mut out.as_slice()).unwrap();
            assert_eq!(back, uid);
            assert_eq!(back.to_string(), uid.to_string());
        }
    }

    #[test]
    fn layout_is_fixed() {
        let uid = HashUid::from_hashes(1, 2, 3)
            .with_time(4)
            .unwrap()
            .with_extra(Some(Extra::new("x").unwrap()));
        let bytes = uid.to_bytes().unwrap();
        assert_eq!(
            bytes.as_ref(),
            [
                0, 0, 0, 1, // h0
                0, 0, 0, 2, // h1
                0, 0, 0, 3, // h2
                1, 0, 0, 0, 0, 0, 0, 0, 4, // time
                1, 0, 1, b'x', // extra
            ]
        );

        let bare = HashUid::from_hashes(1, 2, 3).to_bytes().unwrap();
        assert_eq!(bare.len(), 14);
        assert_eq!(&bare[12..], [0, 0]);
    }

    #[test]
    fn truncated_stream_is_an_io_error() {
        let bytes = variants()[3].to_bytes().unwrap();
        for len in 0..bytes.len() {
            let err = HashUid::read_from(&mut &bytes[..len]).unwrap_err();
            assert!(
                matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof),
                "len {len}: {err:?}"
            );
            assert!(!err.is_invalid_argument());
        }
    }

    #[test]
    fn corrupt_fields_are_invalid_data() {
        let mut negative_time = Vec::new();
        negative_time.extend_from_slice(&[0; 12]);
        negative_time.push(1);
        negative_time.extend_from_slice(&(-5_i64).to_be_bytes());
        negative_time.push(0);

        let mut empty_extra = vec![0; 12];
        empty_extra.extend_from_slice(&[0, 1, 0, 0]);

        let mut bad_flag = vec![0; 12];
        bad_flag.push(7);

        for bytes in [negative_time, empty_extra, bad_flag] {
            let err = HashUid::from_bytes(bytes.as_slice()).unwrap_err();
            assert!(
                matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::InvalidData),
                "{err:?}"
            );
        }
    }

    #[test]
    fn from_bytes_rejects_trailing_bytes() {
        let mut bytes = HashUid::from_hashes(1, 2, 3).to_bytes().unwrap().to_vec();
        bytes.push(0);
        let err = HashUid::from_bytes(bytes.as_slice()).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::InvalidData));
    }

    #[test]
    fn oversized_extra_cannot_be_written() {
        let extra = Extra::new("x".repeat(70_000)).unwrap();
        let uid = HashUid::from_hashes(1, 2, 3).with_extra(Some(extra));
        let err = uid.to_bytes().unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::InvalidInput));
    }
}
