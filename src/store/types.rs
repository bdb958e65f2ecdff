//! Data types for the store module.

/// A primitive slot value.
///
/// One entry in the backend holds exactly one of these at a time. A write
/// with a different variant silently replaces the slot (last-writer-wins);
/// no type tag is tracked by the store beyond what the backend keeps for
/// its own slots.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 32-bit integer slot.
    Int(i32),
    /// Signed 64-bit integer slot.
    Long(i64),
    /// 32-bit float slot.
    Float(f32),
    /// UTF-8 string slot.
    Str(String),
    /// Boolean slot.
    Bool(bool),
}

impl Value {
    /// Returns the i32 if this is an `Int` slot.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i64 if this is a `Long` slot.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f32 if this is a `Float` slot.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string if this is a `Str` slot.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the bool if this is a `Bool` slot.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Human-readable name of the slot type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Long(7).as_long(), Some(7));
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Str("x".to_string()).as_str(), Some("x"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        assert_eq!(Value::Str("7".to_string()).as_int(), None);
        assert_eq!(Value::Int(1).as_bool(), None);
        assert_eq!(Value::Bool(false).as_str(), None);
        assert_eq!(Value::Int(1).as_long(), None);
        assert_eq!(Value::Long(1).as_float(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3i32), Value::Int(3));
        assert_eq!(Value::from(3i64), Value::Long(3));
        assert_eq!(Value::from(3.0f32), Value::Float(3.0));
        assert_eq!(Value::from("abc"), Value::Str("abc".to_string()));
        assert_eq!(Value::from(true), Value::Bool(true));
    }
}
