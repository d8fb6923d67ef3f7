use crate::{field::ApiModel, prelude::*};
use std::collections::BTreeMap;

///
/// SchemaRef
///
/// Opaque handle to a schema held by a registry.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaRef {
    name: String,
}

impl SchemaRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

///
/// SchemaRegistry
///
/// Catalog the engine registers nested schemas with. Registration is assumed
/// idempotent per distinct name; re-registering a name replaces the previous
/// schema.
///

pub trait SchemaRegistry {
    fn register(&mut self, name: &str, model: ApiModel) -> SchemaRef;
}

///
/// MemoryRegistry
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct MemoryRegistry {
    models: BTreeMap<String, ApiModel>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ApiModel> {
        self.models.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl SchemaRegistry for MemoryRegistry {
    fn register(&mut self, name: &str, model: ApiModel) -> SchemaRef {
        self.models.insert(name.to_string(), model);
        SchemaRef::new(name)
    }
}

///
/// TESTS
///
