//! `HashUid` and `Extra` serialize as their textual forms.

use crate::{Extra, HashUid, Uid};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for HashUid {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HashUid {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(d)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Extra {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Extra {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Extra, HashUid, Uid};
    use serde::{Deserialize, Serialize};

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        id: HashUid,
        extra: Option<Extra>,
    }

    #[test]
    fn serializes_as_text() {
        let row = Row {
            id: HashUid::parse("12a52.23b52.12c65+42c.blabla").unwrap(),
            extra: Some(Extra::new("a.b").unwrap()),
        };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"id":"12a52.23b52.12c65+42c.blabla","extra":"a.b"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(serde_json::from_str::<HashUid>(r#""12a52.23b52""#).is_err());
        assert!(serde_json::from_str::<Extra>(r#""a..b""#).is_err());
    }
}
