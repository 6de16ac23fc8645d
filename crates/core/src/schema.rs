// Declarative argument shapes shared by tool discovery and argument validation

use crate::error::ValidationError;
use serde_json::{Map, Value};

/// The JSON type (and constraints) a field accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A JSON string. With `non_empty`, blank strings are rejected.
    String { non_empty: bool },
    /// A JSON integer within inclusive bounds.
    Integer { min: i64, max: i64 },
}

/// One named field of a tool's arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Value substituted when an optional field is absent.
    pub default: Option<Value>,
}

impl FieldSpec {
    /// An optional string field that accepts any string, including `""`.
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: FieldKind::String { non_empty: false },
            required: false,
            default: None,
        }
    }

    /// An optional integer field bounded to `[min, max]`.
    pub fn integer(name: &'static str, description: &'static str, min: i64, max: i64) -> Self {
        Self {
            name,
            description,
            kind: FieldKind::Integer { min, max },
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Reject blank strings. No effect on integer fields.
    pub fn non_empty(mut self) -> Self {
        if let FieldKind::String { non_empty } = &mut self.kind {
            *non_empty = true;
        }
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn check(&self, value: &Value) -> Result<Value, ValidationError> {
        match self.kind {
            FieldKind::String { non_empty } => {
                let s = value.as_str().ok_or_else(|| ValidationError::WrongType {
                    field: self.name.to_string(),
                    expected: "string",
                })?;
                if non_empty && s.trim().is_empty() {
                    return Err(ValidationError::EmptyString {
                        field: self.name.to_string(),
                    });
                }
                Ok(Value::String(s.to_string()))
            }
            FieldKind::Integer { min, max } => {
                let number = match value {
                    Value::Number(n) if n.is_i64() || n.is_u64() => n,
                    _ => {
                        return Err(ValidationError::WrongType {
                            field: self.name.to_string(),
                            expected: "integer",
                        })
                    }
                };
                match number.as_i64() {
                    Some(n) if (min..=max).contains(&n) => Ok(Value::from(n)),
                    // Beyond i64 is still an integer, just out of range
                    _ => Err(ValidationError::OutOfRange {
                        field: self.name.to_string(),
                        min,
                        max,
                        value: number.clone(),
                    }),
                }
            }
        }
    }

    fn to_json_schema(&self) -> Value {
        let mut schema = match self.kind {
            FieldKind::String { non_empty } => {
                let mut s = json_schema_string(self.description);
                if non_empty {
                    s["minLength"] = Value::from(1);
                }
                s
            }
            FieldKind::Integer { min, max } => json_schema_integer(self.description, min, max),
        };
        if let Some(default) = &self.default {
            schema["default"] = default.clone();
        }
        schema
    }
}

/// The full argument contract of one tool.
///
/// The same shape renders the advertised JSON schema and performs
/// validation, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentShape {
    pub fields: Vec<FieldSpec>,
}

impl ArgumentShape {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Validate raw arguments and return them normalized.
    ///
    /// `null` is treated as an empty object. Declared fields are checked in
    /// declaration order, so the first offending field is reported. Defaults
    /// are filled in for absent optional fields; undeclared fields are
    /// dropped.
    pub fn validate(&self, raw: &Value) -> Result<Map<String, Value>, ValidationError> {
        let empty = Map::new();
        let args = match raw {
            Value::Null => &empty,
            Value::Object(map) => map,
            _ => return Err(ValidationError::NotAnObject),
        };

        let mut normalized = Map::new();
        for field in &self.fields {
            match args.get(field.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    normalized.insert(field.name.to_string(), field.check(value)?);
                }
                None if field.required => {
                    return Err(ValidationError::MissingField {
                        field: field.name.to_string(),
                    });
                }
                None => {
                    if let Some(default) = &field.default {
                        normalized.insert(field.name.to_string(), default.clone());
                    }
                }
            }
        }
        Ok(normalized)
    }

    /// Render the shape as a JSON Schema `object`.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.to_json_schema()))
            .collect();
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        json_schema_object(Value::Object(properties), required)
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str, minimum: i64, maximum: i64) -> Value {
    serde_json::json!({
        "type": "integer",
        "description": description,
        "minimum": minimum,
        "maximum": maximum
    })
}
