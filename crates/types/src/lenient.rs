//! `serde_with` adapters that never reject a JSON value.
//!
//! The order API is not versioned and its scalar types drift (amounts show up
//! as strings or numbers depending on the chain). Every field of the record is
//! optional, and a value of the wrong JSON type is read as absent instead of
//! failing the whole record.

use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DefaultOnError, DeserializeAs, DisplayFromStr, PickFirst, Same, SerializeAs};

/// Strings pass through, numbers are kept as their decimal text.
pub type Text = DefaultOnError<Option<NumberOrString>>;

/// JSON numbers or numeric strings.
pub type Numeric = DefaultOnError<Option<PickFirst<(Same, DisplayFromStr)>>>;

pub type Flag = DefaultOnError<Option<Same>>;

/// Nested records. Anything that is not a matching object yields the default.
pub type Section = DefaultOnError<Same>;

pub struct NumberOrString;

impl<'de> DeserializeAs<'de, String> for NumberOrString {
    fn deserialize_as<D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Number(n) => n.to_string(),
        })
    }
}

impl SerializeAs<String> for NumberOrString {
    fn serialize_as<S>(source: &String, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(source)
    }
}
