use crate::{prelude::*, registry::SchemaRef};
use derive_more::{Deref, IntoIterator};
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

///
/// FieldType
///
/// API-facing type assigned to an output field.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldType {
    Boolean,
    Date,
    DateTime,
    Float,
    Integer,
    List(Box<FieldType>),
    Nested(SchemaRef),
    Raw,
    String,
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "boolean"),
            Self::Date => write!(f, "date"),
            Self::DateTime => write!(f, "datetime"),
            Self::Float => write!(f, "float"),
            Self::Integer => write!(f, "integer"),
            Self::List(item) => write!(f, "list<{item}>"),
            Self::Nested(schema) => write!(f, "nested<{}>", schema.name()),
            Self::Raw => write!(f, "raw"),
            Self::String => write!(f, "string"),
        }
    }
}

///
/// FieldDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Attribute the marshaller reads from; kept even when the output name
    /// is converted.
    pub attribute: String,

    pub ty: FieldType,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(attribute: impl Into<String>, ty: FieldType) -> Self {
        Self {
            attribute: attribute.into(),
            ty,
        }
    }
}

///
/// ApiModel
///
/// Output mapping from field name to descriptor. Later inserts win on name
/// collision.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ApiModel {
    #[deref]
    #[into_iterator(owned, ref)]
    fields: BTreeMap<String, FieldDescriptor>,
}

impl ApiModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, descriptor: FieldDescriptor) {
        self.fields.insert(name.into(), descriptor);
    }
}

///
/// TESTS
///
