//! Serialization of arrays and values, and conversion into `serde_json`

use serde::ser::{Serialize, Serializer};

use crate::array::DynArray;
use crate::number::Number;
use crate::value::Value;

impl<T: Serialize> Serialize for DynArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.has_decimal_point() {
            serializer.serialize_f64(self.to_f64_lossy())
        } else if let Some(v) = self.to_i64() {
            serializer.serialize_i64(v)
        } else if let Some(v) = self.to_u64() {
            serializer.serialize_u64(v)
        } else {
            serializer.serialize_f64(self.to_f64_lossy())
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(a) => serializer.collect_seq(a.iter()),
            Value::Object(o) => serializer.collect_map(o.iter()),
        }
    }
}

impl From<&Number> for serde_json::Value {
    fn from(n: &Number) -> Self {
        if n.has_decimal_point() {
            serde_json::Number::from_f64(n.to_f64_lossy())
                .map_or(serde_json::Value::Null, serde_json::Value::Number)
        } else if let Some(v) = n.to_i64() {
            v.into()
        } else if let Some(v) = n.to_u64() {
            v.into()
        } else {
            serde_json::Value::Null
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => n.into(),
            Value::String(s) => serde_json::Value::String(s.to_string()),
            Value::Array(a) => serde_json::Value::Array(a.iter().map(Into::into).collect()),
            Value::Object(o) => serde_json::Value::Object(
                o.iter().map(|(k, v)| (k.clone(), v.into())).collect(),
            ),
        }
    }
}
