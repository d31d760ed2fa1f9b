use std::fmt;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};

/// A single configured renderer option value.
///
/// The value shape decides how the option serializes into command-line flags:
///
/// - [`OptionValue::Unset`] and `Flag(false)` contribute nothing.
/// - `Flag(true)` emits the bare `--name`.
/// - `Scalar` emits `--name <value>`.
/// - `Seq` emits `--name <value>` once per element, preserving order.
/// - `Map` emits `--name <key> <value>` per named entry and `--name <value>`
///   per unnamed entry, preserving order. Mixed keyed/positional entries are
///   allowed; an unnamed entry simply drops the key token.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// The null sentinel; the option is omitted from the built command.
    Unset,
    /// A presence/absence flag.
    Flag(bool),
    /// A single literal value.
    Scalar(String),
    /// A repeated flag, one occurrence per element.
    Seq(Vec<String>),
    /// A repeated flag with an optional named sub-key per entry.
    Map(Vec<(Option<String>, String)>),
}

impl OptionValue {
    /// `true` for the [`OptionValue::Unset`] sentinel.
    pub fn is_unset(&self) -> bool {
        matches!(self, OptionValue::Unset)
    }

    /// Build a [`OptionValue::Seq`] from anything yielding stringish items.
    pub fn seq<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionValue::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Build a fully-keyed [`OptionValue::Map`] from `(key, value)` pairs.
    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        OptionValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (Some(k.into()), v.into()))
                .collect(),
        )
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Scalar(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Scalar(value)
    }
}

macro_rules! scalar_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    OptionValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_number!(i32, i64, u32, u64, f64);

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        OptionValue::Seq(items)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(items: Vec<&str>) -> Self {
        OptionValue::seq(items)
    }
}

impl<'de> serde::Deserialize<'de> for OptionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a boolean, a scalar, a sequence of scalars, or a map of scalars")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionValue::Unset)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionValue::Unset)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(ValueVisitor)
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(OptionValue::Flag(v))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(OptionValue::Scalar(v.to_string()))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(OptionValue::Scalar(v.to_string()))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(OptionValue::Scalar(v.to_string()))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(OptionValue::Scalar(v.to_string()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<ScalarString>()? {
            items.push(item.0);
        }
        Ok(OptionValue::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, ScalarString>()? {
            entries.push((Some(key), value.0));
        }
        Ok(OptionValue::Map(entries))
    }
}

/// A scalar inside a sequence or map, normalized to its string form.
struct ScalarString(String);

impl<'de> serde::Deserialize<'de> for ScalarString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = ScalarString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or a number")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_bool<E: serde::de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Err(E::custom("booleans are not valid repeated-flag values"))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/value.rs"]
mod tests;
