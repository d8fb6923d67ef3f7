pub mod derive;
pub mod field;
pub mod naming;
pub mod node;
pub mod registry;
pub mod trace;
pub mod types;

/// Declared-attribute name reserved for field-allowlist configuration.
pub const META_ATTRIBUTE: &str = "Meta";

/// Prefix for schema names synthesized when registering nested models.
pub const NESTED_SCHEMA_PREFIX: &str = "Nested";

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        derive::{Deriver, DeriveOptions, api_model, api_model_with},
        field::{ApiModel, FieldDescriptor, FieldType},
        node::*,
        registry::{MemoryRegistry, SchemaRef, SchemaRegistry},
        trace::{DeriveTraceEvent, DeriveTraceSink},
        types::{ColumnType, FieldKind},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum Error {
    /// An attribute selected for marshalling has no backing column to read.
    #[error("model '{model}' attribute '{attribute}' has no backing column")]
    UnknownAttribute {
        model: &'static str,
        attribute: String,
    },

    /// A storage type class name has no entry in the type map.
    #[error("model '{model}' attribute '{attribute}' storage type '{type_name}' is not recognized")]
    UnrecognizedType {
        model: &'static str,
        attribute: String,
        type_name: String,
    },
}
