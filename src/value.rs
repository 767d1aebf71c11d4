//! Functionality relating to the heterogeneous element type

use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use crate::array::DynArray;
use crate::error::ArrayError;
use crate::number::Number;

/// Map type stored inside [`Value::Object`].
pub type Object = hashbrown::HashMap<String, Value>;

/// Enum returned by [`Value::type_of`] to describe what a value holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The absent-value placeholder
    Null,
    /// Boolean
    Bool,
    /// Number
    Number,
    /// String
    String,
    /// Array
    Array,
    /// Object
    Object,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        })
    }
}

/// A dynamically-typed element, for arrays that mix element types.
///
/// Strings, arrays and objects are reference counted: cloning a `Value`
/// copies a handle, so two arrays holding the "same" composite value
/// share it rather than holding two copies. Shared composites are
/// immutable; build a new one to change it.
///
/// `Value::Null` is the absent-value placeholder and the `Default`.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// The absent-value placeholder
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(Number),
    /// String
    String(Rc<str>),
    /// Nested array
    Array(Rc<DynArray<Value>>),
    /// String-keyed map
    Object(Rc<Object>),
}

impl Value {
    /// The `null` value.
    pub const NULL: Self = Value::Null;
    /// The `true` value.
    pub const TRUE: Self = Value::Bool(true);
    /// The `false` value.
    pub const FALSE: Self = Value::Bool(false);

    /// Returns the type of this value.
    #[must_use]
    pub fn type_of(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Returns `true` if this is the `null` value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
    /// Returns `true` if this is a number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns the boolean if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
    /// Returns the number if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
    /// Returns the string if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }
    /// Returns the nested array if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&DynArray<Value>> {
        match self {
            Value::Array(a) => Some(&**a),
            _ => None,
        }
    }
    /// Returns the map if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(&**o),
            _ => None,
        }
    }

    /// Converts a number to an i64 if it can be represented exactly.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.to_i64())
    }
    /// Converts a number to an f64 if it can be represented exactly.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.as_number().and_then(|n| n.to_f64())
    }
    /// Converts a number to an f64, potentially losing precision in the process.
    #[must_use]
    pub fn to_f64_lossy(&self) -> Option<f64> {
        self.as_number().map(|n| n.to_f64_lossy())
    }

    fn mismatch(&self, expected: ValueType) -> ArrayError {
        ArrayError::TypeMismatch {
            expected,
            found: self.type_of(),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => Debug::fmt(b, f),
            Value::Number(n) => Debug::fmt(n, f),
            Value::String(s) => Debug::fmt(s, f),
            Value::Array(a) => Debug::fmt(a, f),
            Value::Object(o) => f.debug_map().entries(o.iter()).finish(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => Display::fmt(b, f),
            Value::Number(n) => Display::fmt(n, f),
            Value::String(s) => f.write_str(s),
            Value::Array(a) => Display::fmt(a, f),
            Value::Object(o) => {
                // Sorted so the rendering does not depend on hash order
                let mut entries: Vec<_> = o.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                f.write_str("{")?;
                for (i, (k, v)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! from_number_impl {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Number(v.into())
            }
        }
        impl PartialEq<$ty> for Value {
            fn eq(&self, other: &$ty) -> bool {
                matches!(self, Value::Number(n) if *n == Number::from(*other))
            }
        })*
    };
}

from_number_impl!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    /// Non-finite floats become `null`.
    fn from(v: f64) -> Self {
        Number::try_from(v).map_or(Value::Null, Value::Number)
    }
}
impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::from(f64::from(v))
    }
}
impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match (self, Number::try_from(*other)) {
            (Value::Number(a), Ok(b)) => *a == b,
            _ => false,
        }
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v.into())
    }
}
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}
impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
impl From<DynArray<Value>> for Value {
    fn from(v: DynArray<Value>) -> Self {
        Value::Array(Rc::new(v))
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().map(Into::into).collect::<DynArray<Value>>().into()
    }
}
impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Object(Rc::new(v))
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ArrayError;
    /// Succeeds for numbers holding an exact integer.
    fn try_from(v: &Value) -> Result<Self, ArrayError> {
        v.to_i64().ok_or_else(|| v.mismatch(ValueType::Number))
    }
}
impl TryFrom<&Value> for f64 {
    type Error = ArrayError;
    fn try_from(v: &Value) -> Result<Self, ArrayError> {
        v.to_f64_lossy().ok_or_else(|| v.mismatch(ValueType::Number))
    }
}
impl TryFrom<&Value> for bool {
    type Error = ArrayError;
    fn try_from(v: &Value) -> Result<Self, ArrayError> {
        v.as_bool().ok_or_else(|| v.mismatch(ValueType::Bool))
    }
}
impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ArrayError;
    fn try_from(v: &'a Value) -> Result<Self, ArrayError> {
        v.as_str().ok_or_else(|| v.mismatch(ValueType::String))
    }
}
impl TryFrom<&Value> for String {
    type Error = ArrayError;
    fn try_from(v: &Value) -> Result<Self, ArrayError> {
        <&str>::try_from(v).map(ToOwned::to_owned)
    }
}
