//! The JSON value model.
//!
//! [`Value`] is a closed sum over the six JSON types. Numbers are always
//! 64-bit floats regardless of the source syntax; arrays preserve insertion
//! order; objects are hash-ordered. Each per-variant accessor returns an
//! [`OptRef`]/[`OptMut`] that is present iff the value currently holds that
//! variant — a mismatched accessor is absent, never an error, matching the
//! container lookup policy.
//!
//! Assigning a value a new variant is atomic: the new payload is fully
//! constructed before the old one is dropped (ordinary Rust assignment), so
//! a value is never observable between variants.

use std::cmp::Ordering;

use crate::array::Array;
use crate::map::Map;
use crate::opt_ref::{OptMut, OptRef};

/// The variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Number,
    Boolean,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON document node. Always in exactly one variant; the variant only
/// changes through reassignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Number(f64),
    Boolean(bool),
    String(String),
    Array(Array<Value>),
    Object(Map<Value>),
}

static UNIT: () = ();

impl Value {
    /// An empty array-variant value.
    pub fn new_array() -> Self {
        Value::Array(Array::new())
    }

    /// An empty object-variant value.
    pub fn new_object() -> Self {
        Value::Object(Map::new())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Number(_) => Kind::Number,
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Present iff this is the Null variant. The referent is the unit value;
    /// the accessor exists so that exactly one of the six accessors is
    /// present for any value.
    pub fn null(&self) -> OptRef<'_, ()> {
        match self {
            Value::Null => OptRef::some(&UNIT),
            _ => OptRef::none(),
        }
    }

    pub fn number(&self) -> OptRef<'_, f64> {
        match self {
            Value::Number(number) => OptRef::some(number),
            _ => OptRef::none(),
        }
    }

    pub fn number_mut(&mut self) -> OptMut<'_, f64> {
        match self {
            Value::Number(number) => OptMut::some(number),
            _ => OptMut::none(),
        }
    }

    pub fn boolean(&self) -> OptRef<'_, bool> {
        match self {
            Value::Boolean(boolean) => OptRef::some(boolean),
            _ => OptRef::none(),
        }
    }

    pub fn boolean_mut(&mut self) -> OptMut<'_, bool> {
        match self {
            Value::Boolean(boolean) => OptMut::some(boolean),
            _ => OptMut::none(),
        }
    }

    pub fn string(&self) -> OptRef<'_, String> {
        match self {
            Value::String(string) => OptRef::some(string),
            _ => OptRef::none(),
        }
    }

    pub fn string_mut(&mut self) -> OptMut<'_, String> {
        match self {
            Value::String(string) => OptMut::some(string),
            _ => OptMut::none(),
        }
    }

    pub fn array(&self) -> OptRef<'_, Array<Value>> {
        match self {
            Value::Array(array) => OptRef::some(array),
            _ => OptRef::none(),
        }
    }

    pub fn array_mut(&mut self) -> OptMut<'_, Array<Value>> {
        match self {
            Value::Array(array) => OptMut::some(array),
            _ => OptMut::none(),
        }
    }

    pub fn object(&self) -> OptRef<'_, Map<Value>> {
        match self {
            Value::Object(object) => OptRef::some(object),
            _ => OptRef::none(),
        }
    }

    pub fn object_mut(&mut self) -> OptMut<'_, Map<Value>> {
        match self {
            Value::Object(object) => OptMut::some(object),
            _ => OptMut::none(),
        }
    }

    /// Typed extraction; absent on variant mismatch. Numeric targets narrow
    /// or widen from the stored f64.
    pub fn get<T: FromValue>(&self) -> Option<T> {
        T::from_value(self)
    }

    /// Take the value out, leaving Null behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

/// Conversion out of a [`Value`] for [`Value::get`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! numeric_from_value {
    ($($t:ty)*) => {$(
        impl FromValue for $t {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(number) => Some(*number as $t),
                    _ => None,
                }
            }
        }
    )*};
}

numeric_from_value!(f64 f32 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(string) => Some(string.clone()),
            _ => None,
        }
    }
}

macro_rules! numeric_into_value {
    ($($t:ty)*) => {$(
        impl From<$t> for Value {
            fn from(number: $t) -> Self {
                Value::Number(number as f64)
            }
        }

        impl PartialEq<$t> for Value {
            fn eq(&self, other: &$t) -> bool {
                matches!(self, Value::Number(number) if *number == *other as f64)
            }
        }

        impl PartialEq<Value> for $t {
            fn eq(&self, other: &Value) -> bool {
                other == self
            }
        }

        /// Ordered only when the value is the Number variant; every ordering
        /// operator is `false` on a variant mismatch.
        impl PartialOrd<$t> for Value {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                match self {
                    Value::Number(number) => number.partial_cmp(&(*other as f64)),
                    _ => None,
                }
            }
        }
    )*};
}

numeric_into_value!(f64 f32 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Value::Boolean(boolean)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Value::String(string.to_owned())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Value::String(string)
    }
}

impl From<Array<Value>> for Value {
    fn from(array: Array<Value>) -> Self {
        Value::Array(array)
    }
}

impl From<Map<Value>> for Value {
    fn from(object: Map<Value>) -> Self {
        Value::Object(object)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Boolean(boolean) if boolean == other)
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(string) if string == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(string) if string == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Array<Value>> for Value {
    fn eq(&self, other: &Array<Value>) -> bool {
        matches!(self, Value::Array(array) if array == other)
    }
}

impl PartialOrd<str> for Value {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        match self {
            Value::String(string) => string.as_str().partial_cmp(other),
            _ => None,
        }
    }
}

impl PartialOrd<&str> for Value {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        self.partial_cmp(*other)
    }
}
