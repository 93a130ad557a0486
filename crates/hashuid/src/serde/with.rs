use serde::{Deserialize, Deserializer, Serializer};

/// Serializes any [`Uid`](crate::Uid) as its textual form, for use with
/// `#[serde(with = "as_string_uid")]`.
pub mod as_string_uid {
    use super::*;
    use crate::Uid;

    pub fn serialize<U, S>(uid: &U, s: S) -> Result<S::Ok, S::Error>
    where
        U: Uid,
        S: Serializer,
    {
        s.collect_str(uid)
    }

    pub fn deserialize<'de, U, D>(d: D) -> Result<U, D::Error>
    where
        U: Uid,
        D: Deserializer<'de>,
    {
        struct UidVisitor<U>(core::marker::PhantomData<U>);

        impl<U: Uid> serde::de::Visitor<'_> for UidVisitor<U> {
            type Value = U;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a dot-separated base36 uid")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                U::parse(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(UidVisitor(core::marker::PhantomData))
    }
}

/// Serializes any [`Uid`](crate::Uid) as its fixed-order binary form, for use
/// with `#[serde(with = "as_binary_uid")]`.
pub mod as_binary_uid {
    use super::*;
    use crate::{BinaryUidExt, Uid};

    pub fn serialize<U, S>(uid: &U, s: S) -> Result<S::Ok, S::Error>
    where
        U: Uid,
        S: Serializer,
    {
        let bytes = uid.to_bytes().map_err(serde::ser::Error::custom)?;
        s.serialize_bytes(&bytes)
    }

    pub fn deserialize<'de, U, D>(d: D) -> Result<U, D::Error>
    where
        U: Uid,
        D: Deserializer<'de>,
    {
        let bytes = <Vec<u8>>::deserialize(d)?;
        U::from_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HashUid, Uid};
    use serde::Serialize;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "as_string_uid")]
        text: HashUid,
        #[serde(with = "as_binary_uid")]
        binary: HashUid,
    }

    #[test]
    fn with_modules_roundtrip() {
        let uid = HashUid::parse("1.2.3+4.x").unwrap();
        let row = Row {
            text: uid.clone(),
            binary: uid,
        };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(
            json,
            r#"{"text":"1.2.3+4.x","binary":[0,0,0,1,0,0,0,2,0,0,0,3,1,0,0,0,0,0,0,0,4,1,0,1,120]}"#
        );
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn string_form_is_validated() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Text {
            #[serde(with = "as_string_uid")]
            id: HashUid,
        }
        assert!(serde_json::from_str::<Text>(r#"{"id":"1.2"}"#).is_err());
    }
}
