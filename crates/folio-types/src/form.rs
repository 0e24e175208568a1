//! Lenient reading of text fields posted by the site's scripts.
//!
//! A field holding an empty JSON value (`null`, `false`, `0`, `[]`, `{}`)
//! reads as absent, so it fails validation like a missing field. Any other
//! non-string value is a malformed payload.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Unexpected, Visitor};

/// `deserialize_with` helper for optional text fields.
pub fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextFieldVisitor)
}

struct TextFieldVisitor;

impl<'de> Visitor<'de> for TextFieldVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an empty value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        if v {
            Err(E::invalid_type(Unexpected::Bool(v), &self))
        } else {
            Ok(None)
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        if v == 0 {
            Ok(None)
        } else {
            Err(E::invalid_type(Unexpected::Signed(v), &self))
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        if v == 0 {
            Ok(None)
        } else {
            Err(E::invalid_type(Unexpected::Unsigned(v), &self))
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v == 0.0 {
            Ok(None)
        } else {
            Err(E::invalid_type(Unexpected::Float(v), &self))
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        match seq.next_element::<IgnoredAny>()? {
            None => Ok(None),
            Some(_) => Err(de::Error::invalid_type(Unexpected::Seq, &self)),
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        match map.next_key::<IgnoredAny>()? {
            None => Ok(None),
            Some(_) => Err(de::Error::invalid_type(Unexpected::Map, &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "super::text_field")]
        value: Option<String>,
    }

    fn read(json: &str) -> Result<Option<String>, serde_json::Error> {
        serde_json::from_str::<Field>(json).map(|f| f.value)
    }

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(read(r#"{"value": " Ada "}"#).unwrap().as_deref(), Some(" Ada "));
        assert_eq!(read(r#"{"value": ""}"#).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_empty_values_read_as_absent() {
        for json in [
            r#"{}"#,
            r#"{"value": null}"#,
            r#"{"value": false}"#,
            r#"{"value": 0}"#,
            r#"{"value": 0.0}"#,
            r#"{"value": []}"#,
            r#"{"value": {}}"#,
        ] {
            assert_eq!(read(json).unwrap(), None, "{json}");
        }
    }

    #[test]
    fn test_other_values_are_rejected() {
        for json in [
            r#"{"value": true}"#,
            r#"{"value": 7}"#,
            r#"{"value": -1}"#,
            r#"{"value": 1.5}"#,
            r#"{"value": ["Ada"]}"#,
            r#"{"value": {"first": "Ada"}}"#,
        ] {
            assert!(read(json).is_err(), "{json}");
        }
    }
}
