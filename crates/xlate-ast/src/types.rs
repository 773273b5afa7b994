//! Type references and compile-time constant values.

use crate::ids::TypeId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveType::Boolean | PrimitiveType::Void)
    }

    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            PrimitiveType::Byte
                | PrimitiveType::Char
                | PrimitiveType::Short
                | PrimitiveType::Int
                | PrimitiveType::Long
        )
    }
}

/// A named class, interface, enum or annotation type as written in source,
/// with its resolved descriptor when the resolver has seen it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
    #[serde(default)]
    pub binding: Option<TypeId>,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        TypeName {
            name: name.into(),
            binding: None,
        }
    }

    pub fn resolved(name: impl Into<String>, binding: TypeId) -> Self {
        TypeName {
            name: name.into(),
            binding: Some(binding),
        }
    }

    /// Last segment of a qualified name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Declared(TypeName),
    Array(Box<TypeRef>),
    /// Type of the `null` literal.
    Null,
}

impl TypeRef {
    pub const VOID: TypeRef = TypeRef::Primitive(PrimitiveType::Void);

    pub fn declared(name: impl Into<String>) -> Self {
        TypeRef::Declared(TypeName::new(name))
    }

    pub const fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            TypeRef::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub const fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(p) if !matches!(p, PrimitiveType::Void))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, TypeRef::Declared(name)
            if name.name == "String" || name.name == xlate_common::names::STRING_TYPE_NAME)
    }

    /// Source spelling, e.g. `int`, `String`, `int[]`.
    pub fn display_name(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Declared(name) => name.simple_name().to_string(),
            TypeRef::Array(elem) => format!("{}[]", elem.display_name()),
            TypeRef::Null => "null".to_string(),
        }
    }
}

/// Value of a compile-time constant expression.
///
/// `Char` holds a UTF-16 code unit, matching the source language's `char`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ConstantValue {
    Boolean(bool),
    Char(u16),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl ConstantValue {
    /// Primitive type of the value; `None` for strings.
    pub const fn primitive_type(&self) -> Option<PrimitiveType> {
        Some(match self {
            ConstantValue::Boolean(_) => PrimitiveType::Boolean,
            ConstantValue::Char(_) => PrimitiveType::Char,
            ConstantValue::Byte(_) => PrimitiveType::Byte,
            ConstantValue::Short(_) => PrimitiveType::Short,
            ConstantValue::Int(_) => PrimitiveType::Int,
            ConstantValue::Long(_) => PrimitiveType::Long,
            ConstantValue::Float(_) => PrimitiveType::Float,
            ConstantValue::Double(_) => PrimitiveType::Double,
            ConstantValue::String(_) => return None,
        })
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, ConstantValue::String(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            ConstantValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        Some(match *self {
            ConstantValue::Char(c) => i32::from(c),
            ConstantValue::Byte(b) => i32::from(b),
            ConstantValue::Short(s) => i32::from(s),
            ConstantValue::Int(i) => i,
            ConstantValue::Long(l) => l as i32,
            ConstantValue::Float(f) => f as i32,
            ConstantValue::Double(d) => d as i32,
            ConstantValue::Boolean(_) | ConstantValue::String(_) => return None,
        })
    }

    pub fn as_i64(&self) -> Option<i64> {
        Some(match *self {
            ConstantValue::Long(l) => l,
            ConstantValue::Float(f) => f as i64,
            ConstantValue::Double(d) => d as i64,
            _ => i64::from(self.as_i32()?),
        })
    }

    pub fn as_f32(&self) -> Option<f32> {
        Some(match *self {
            ConstantValue::Long(l) => l as f32,
            ConstantValue::Float(f) => f,
            ConstantValue::Double(d) => d as f32,
            _ => self.as_i32()? as f32,
        })
    }

    pub fn as_f64(&self) -> Option<f64> {
        Some(match *self {
            ConstantValue::Long(l) => l as f64,
            ConstantValue::Float(f) => f64::from(f),
            ConstantValue::Double(d) => d,
            _ => f64::from(self.as_i32()?),
        })
    }

    /// Primitive conversion with cast semantics: integral narrowing wraps,
    /// floating-point to integral saturates and maps NaN to zero.
    ///
    /// Strings never convert; booleans only convert to `boolean`.
    pub fn convert_to(&self, target: PrimitiveType) -> Option<ConstantValue> {
        match (self, target) {
            (ConstantValue::String(_), _) | (_, PrimitiveType::Void) => None,
            (ConstantValue::Boolean(b), PrimitiveType::Boolean) => Some(ConstantValue::Boolean(*b)),
            (ConstantValue::Boolean(_), _) | (_, PrimitiveType::Boolean) => None,
            (_, PrimitiveType::Double) => self.as_f64().map(ConstantValue::Double),
            (_, PrimitiveType::Float) => self.as_f32().map(ConstantValue::Float),
            (_, PrimitiveType::Long) => self.as_i64().map(ConstantValue::Long),
            (_, PrimitiveType::Int) => self.as_i32().map(ConstantValue::Int),
            (_, PrimitiveType::Short) => self.as_i32().map(|v| ConstantValue::Short(v as i16)),
            (_, PrimitiveType::Char) => self.as_i32().map(|v| ConstantValue::Char(v as u16)),
            (_, PrimitiveType::Byte) => self.as_i32().map(|v| ConstantValue::Byte(v as i8)),
        }
    }

    /// Rendering used by string concatenation (`String.valueOf`).
    pub fn to_java_string(&self) -> String {
        match self {
            ConstantValue::Boolean(b) => b.to_string(),
            ConstantValue::Char(c) => String::from_utf16_lossy(&[*c]),
            ConstantValue::Byte(b) => b.to_string(),
            ConstantValue::Short(s) => s.to_string(),
            ConstantValue::Int(i) => i.to_string(),
            ConstantValue::Long(l) => l.to_string(),
            ConstantValue::Float(f) => java_float_to_string(f64::from(*f), format!("{f:?}"), || {
                format!("{f:E}")
            }),
            ConstantValue::Double(d) => {
                java_float_to_string(*d, format!("{d:?}"), || format!("{d:E}"))
            }
            ConstantValue::String(s) => s.clone(),
        }
    }
}

/// `Double.toString` / `Float.toString` layout: plain decimal for
/// magnitudes in `[1e-3, 1e7)`, otherwise `d.dddE±n`.
fn java_float_to_string(value: f64, plain: String, scientific: impl FnOnce() -> String) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return plain;
    }
    let sci = scientific();
    match sci.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0E{exponent}")
        }
        _ => sci,
    }
}

#[cfg(test)]
#[path = "../tests/types.rs"]
mod tests;
