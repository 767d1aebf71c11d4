//! Deserialization of arrays and values, and conversion from `serde_json`

use std::fmt::{self, Formatter};

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::array::DynArray;
use crate::value::{Object, Value};

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Into::into)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    #[inline]
    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(value.into())
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(value.into())
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(value.into())
    }

    #[inline]
    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(value.into())
    }

    #[inline]
    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(value.into())
    }

    #[inline]
    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(value.into())
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::NULL)
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::NULL)
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut arr = DynArray::with_capacity(visitor.size_hint().unwrap_or(0));
        while let Some(v) = visitor.next_element::<Value>()? {
            arr.push(v);
        }
        Ok(arr.into())
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut obj = Object::with_capacity(visitor.size_hint().unwrap_or(0));
        while let Some((k, v)) = visitor.next_entry::<String, Value>()? {
            obj.insert(k, v);
        }
        Ok(obj.into())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::NULL,
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    v.into()
                } else if let Some(v) = n.as_u64() {
                    v.into()
                } else {
                    n.as_f64().map_or(Value::NULL, Value::from)
                }
            }
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(a) => a
                .into_iter()
                .map(Value::from)
                .collect::<DynArray<Value>>()
                .into(),
            serde_json::Value::Object(o) => o
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect::<Object>()
                .into(),
        }
    }
}
