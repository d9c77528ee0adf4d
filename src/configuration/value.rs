use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};


/// A mapping of string keys to untyped values, in document order.
pub type DynamicMapping = IndexMap<String, DynamicValue>;


/// Parsed-but-untyped document content.
///
/// Both the YAML and the TOML front-ends deserialize into this type,
/// so everything downstream only ever deals with one shape of tree.
#[derive(Clone, PartialEq, Debug)]
pub enum DynamicValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<DynamicValue>),
    Mapping(DynamicMapping),
}

impl DynamicValue {
    /// Name of this value's shape, as used in `WrongType` errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            DynamicValue::Null => "Null",
            DynamicValue::Bool(_) => "Bool",
            DynamicValue::Integer(_) => "Integer",
            DynamicValue::Float(_) => "Float",
            DynamicValue::String(_) => "String",
            DynamicValue::List(_) => "Array",
            DynamicValue::Mapping(_) => "Dictionary",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&DynamicMapping> {
        match self {
            DynamicValue::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::Null => f.write_str("null"),
            DynamicValue::Bool(value) => write!(f, "{value}"),
            DynamicValue::Integer(value) => write!(f, "{value}"),
            DynamicValue::Float(value) => write!(f, "{value}"),
            DynamicValue::String(value) => f.write_str(value),
            DynamicValue::List(values) => {
                f.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            DynamicValue::Mapping(mapping) => {
                f.write_str("{")?;
                for (index, (key, value)) in mapping.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}


/// Typed extraction out of a [`DynamicValue`].
pub trait FromDynamicValue: Sized {
    /// Name reported as the expected type when extraction fails.
    const TYPE_NAME: &'static str;

    /// Returns `None` if `value` does not have the required shape.
    fn from_dynamic(value: &DynamicValue) -> Option<Self>;
}

impl FromDynamicValue for String {
    const TYPE_NAME: &'static str = "String";

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromDynamicValue for DynamicMapping {
    const TYPE_NAME: &'static str = "Dictionary";

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        value.as_mapping().cloned()
    }
}

impl FromDynamicValue for Vec<String> {
    const TYPE_NAME: &'static str = "Array of Strings";

    fn from_dynamic(value: &DynamicValue) -> Option<Self> {
        value
            .as_list()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }
}


impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DynamicValueVisitor)
    }
}

struct DynamicValueVisitor;

impl<'de> Visitor<'de> for DynamicValueVisitor {
    type Value = DynamicValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any configuration value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(DynamicValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        Ok(match i64::try_from(value) {
            Ok(value) => DynamicValue::Integer(value),
            Err(_) => DynamicValue::Float(value as f64),
        })
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(value))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        DynamicValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(sequence.size_hint().unwrap_or(0));
        while let Some(value) = sequence.next_element()? {
            values.push(value);
        }

        Ok(DynamicValue::List(values))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = DynamicMapping::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<DynamicValue, DynamicValue>()? {
            let key = match key {
                DynamicValue::List(_) | DynamicValue::Mapping(_) => {
                    return Err(de::Error::custom(format!(
                        "mapping keys must be scalars, found {}",
                        key.type_name()
                    )));
                }
                scalar => scalar.to_string(),
            };

            mapping.insert(key, value);
        }

        Ok(DynamicValue::Mapping(mapping))
    }
}
