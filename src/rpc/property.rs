//! Tool parameter schemas and argument extraction.
//!
//! A tool declares its parameters as a [`PropertyList`].  When a call comes
//! in, [`PropertyList::bind`] checks the JSON arguments against that schema
//! and hands the handler a list with every value filled in, so handlers
//! never see a missing or wrongly typed argument.

use serde_json::{Map, Value, json};

use super::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Boolean,
    Integer,
    String,
}

impl PropertyType {
    /// JSON-Schema type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
        }
    }
}

impl core::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl PropertyValue {
    pub const fn ty(&self) -> PropertyType {
        match self {
            Self::Boolean(_) => PropertyType::Boolean,
            Self::Integer(_) => PropertyType::Integer,
            Self::String(_) => PropertyType::String,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Boolean(b) => Value::Bool(*b),
            Self::Integer(i) => Value::from(*i),
            Self::String(s) => Value::String(s.clone()),
        }
    }

    fn from_json(ty: PropertyType, v: &Value) -> Option<Self> {
        match ty {
            PropertyType::Boolean => v.as_bool().map(Self::Boolean),
            PropertyType::Integer => v.as_i64().map(Self::Integer),
            PropertyType::String => v.as_str().map(|s| Self::String(s.into())),
        }
    }
}

/// One named, typed tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: &'static str,
    ty: PropertyType,
    default: Option<PropertyValue>,
    range: Option<(i64, i64)>,
    value: Option<PropertyValue>,
}

impl Property {
    /// A required parameter.
    pub const fn new(name: &'static str, ty: PropertyType) -> Self {
        Self {
            name,
            ty,
            default: None,
            range: None,
            value: None,
        }
    }

    /// An optional parameter; the type follows the default.
    pub fn with_default(name: &'static str, default: PropertyValue) -> Self {
        Self {
            name,
            ty: default.ty(),
            default: Some(default),
            range: None,
            value: None,
        }
    }

    /// An optional integer parameter constrained to `min..=max`.
    pub fn integer_range(name: &'static str, default: i64, min: i64, max: i64) -> Self {
        Self {
            name,
            ty: PropertyType::Integer,
            default: Some(PropertyValue::Integer(default)),
            range: Some((min, max)),
            value: None,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn ty(&self) -> PropertyType {
        self.ty
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Bound value, falling back to the default.
    pub fn value(&self) -> Option<&PropertyValue> {
        self.value.as_ref().or(self.default.as_ref())
    }

    fn schema_json(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".into(), self.ty.as_str().into());
        if let Some(default) = &self.default {
            schema.insert("default".into(), default.to_json());
        }
        if let Some((min, max)) = self.range {
            schema.insert("minimum".into(), min.into());
            schema.insert("maximum".into(), max.into());
        }
        Value::Object(schema)
    }

    fn bind(&self, args: &Map<String, Value>) -> Result<Self, ToolError> {
        let Some(raw) = args.get(self.name) else {
            return match self.default {
                Some(_) => Ok(self.clone()),
                None => Err(ToolError::MissingArgument(self.name)),
            };
        };
        let value = PropertyValue::from_json(self.ty, raw).ok_or(ToolError::InvalidArgument {
            name: self.name,
            expected: self.ty,
        })?;
        if let (Some((min, max)), PropertyValue::Integer(i)) = (self.range, &value) {
            if !(min..=max).contains(i) {
                return Err(ToolError::OutOfRange(self.name));
            }
        }
        Ok(Self {
            value: Some(value),
            ..self.clone()
        })
    }
}

/// Ordered parameter list for one tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyList {
    properties: Vec<Property>,
}

impl PropertyList {
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, ToolError> {
        match self.value_of(name)? {
            PropertyValue::Boolean(b) => Ok(*b),
            _ => Err(ToolError::UnknownProperty),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i64, ToolError> {
        match self.value_of(name)? {
            PropertyValue::Integer(i) => Ok(*i),
            _ => Err(ToolError::UnknownProperty),
        }
    }

    pub fn get_str(&self, name: &str) -> Result<&str, ToolError> {
        match self.value_of(name)? {
            PropertyValue::String(s) => Ok(s),
            _ => Err(ToolError::UnknownProperty),
        }
    }

    fn value_of(&self, name: &str) -> Result<&PropertyValue, ToolError> {
        self.get(name)
            .and_then(Property::value)
            .ok_or(ToolError::UnknownProperty)
    }

    /// Check `args` against the schema and return a list with values bound.
    ///
    /// `args` must be a JSON object; `null` is accepted as "no arguments".
    /// Arguments the schema does not declare are ignored.
    pub fn bind(&self, args: &Value) -> Result<Self, ToolError> {
        let empty = Map::new();
        let args = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => return Err(ToolError::InvalidArguments),
        };
        let properties = self
            .properties
            .iter()
            .map(|p| p.bind(args))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { properties })
    }

    /// JSON-Schema `inputSchema` advertised by `tools/list`.
    pub fn schema_json(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for p in &self.properties {
            properties.insert(p.name.into(), p.schema_json());
            if p.is_required() {
                required.push(Value::from(p.name));
            }
        }
        let mut schema = json!({ "type": "object", "properties": properties });
        if !required.is_empty() {
            schema["required"] = Value::Array(required);
        }
        schema
    }
}

impl From<Vec<Property>> for PropertyList {
    fn from(properties: Vec<Property>) -> Self {
        Self { properties }
    }
}

impl<const N: usize> From<[Property; N]> for PropertyList {
    fn from(properties: [Property; N]) -> Self {
        Self {
            properties: properties.into(),
        }
    }
}
