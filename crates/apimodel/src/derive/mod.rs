mod classify;
mod resolve;

use crate::{
    Error, NESTED_SCHEMA_PREFIX,
    field::{ApiModel, FieldDescriptor, FieldType},
    naming,
    node::Model,
    registry::SchemaRegistry,
    trace::{DeriveTraceEvent, DeriveTraceSink},
};
use std::{collections::BTreeSet, ptr};

///
/// DeriveOptions
///

#[derive(Clone, Debug)]
pub struct DeriveOptions {
    /// Convert separator-delimited output names to camelCase.
    pub camel_case: bool,

    /// Attribute names excluded from both passes.
    pub ignore_attributes: BTreeSet<String>,
}

impl DeriveOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep output names exactly as declared.
    #[must_use]
    pub fn keep_attribute_names(mut self) -> Self {
        self.camel_case = false;
        self
    }

    #[must_use]
    pub fn ignore(mut self, attribute: impl Into<String>) -> Self {
        self.ignore_attributes.insert(attribute.into());
        self
    }

    fn output_name(&self, attribute: &str) -> String {
        if self.camel_case {
            naming::camel_case(attribute)
        } else {
            attribute.to_string()
        }
    }
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            camel_case: true,
            ignore_attributes: BTreeSet::new(),
        }
    }
}

///
/// Ancestors
///
/// Chain of models currently being expanded in one derivation call tree.
/// Extended immutably per recursion step; every public derivation starts from
/// an empty chain, so ancestor state cannot leak between top-level calls.
///

#[derive(Clone, Debug, Default)]
pub struct Ancestors {
    models: Vec<&'static Model>,
}

impl Ancestors {
    #[must_use]
    pub fn contains(&self, model: &'static Model) -> bool {
        self.models.iter().any(|m| ptr::eq(*m, model))
    }

    #[must_use]
    fn with(&self, model: &'static Model) -> Self {
        let mut child = self.clone();
        child.models.push(model);
        child
    }
}

///
/// Deriver
///
/// Walks one record model and produces its marshalling schema, registering a
/// nested schema with the registry for every expanded relationship.
///

pub struct Deriver<'r, R: SchemaRegistry> {
    registry: &'r mut R,
    options: DeriveOptions,
    trace: Option<&'r dyn DeriveTraceSink>,
}

impl<'r, R: SchemaRegistry> Deriver<'r, R> {
    pub fn new(registry: &'r mut R) -> Self {
        Self {
            registry,
            options: DeriveOptions::default(),
            trace: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DeriveOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: &'r dyn DeriveTraceSink) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Derive the marshalling schema for `model`.
    ///
    /// Scalar attributes map through the type map; relationship attributes
    /// recurse into the target model, register the nested schema, and
    /// marshal as a list of that schema. Errors abort the derivation with no
    /// partial result.
    pub fn derive(&mut self, model: &'static Model) -> Result<ApiModel, Error> {
        self.derive_nested(model, &Ancestors::default())
    }

    fn derive_nested(
        &mut self,
        model: &'static Model,
        ancestors: &Ancestors,
    ) -> Result<ApiModel, Error> {
        let scope = ancestors.with(model);
        let classified = classify::classify(model, &self.options, &scope);

        for &(attribute, target) in &classified.pruned {
            self.emit(DeriveTraceEvent::CyclePruned {
                model: model.ident,
                attribute,
                target,
            });
        }

        let mut out = ApiModel::new();

        for &attribute in &classified.scalars {
            let column = model
                .column(attribute)
                .ok_or_else(|| Error::UnknownAttribute {
                    model: model.ident,
                    attribute: attribute.to_string(),
                })?;
            let ty = resolve::resolve_column(model, attribute, column)?;

            out.insert(
                self.options.output_name(attribute),
                FieldDescriptor::new(attribute, ty),
            );
        }

        for &(attribute, target) in &classified.relations {
            let nested = self.derive_nested(target, &scope)?;
            let schema_name = format!("{NESTED_SCHEMA_PREFIX}{}", naming::capitalize(attribute));
            let schema = self.registry.register(&schema_name, nested);

            self.emit(DeriveTraceEvent::NestedRegistered {
                model: model.ident,
                attribute,
                schema: schema.name(),
            });
            out.insert(
                self.options.output_name(attribute),
                FieldDescriptor::new(
                    attribute,
                    FieldType::List(Box::new(FieldType::Nested(schema))),
                ),
            );
        }

        Ok(out)
    }

    fn emit(&self, event: DeriveTraceEvent<'_>) {
        if let Some(trace) = self.trace {
            trace.on_event(event);
        }
    }
}

/// Derive a marshalling schema with default options.
pub fn api_model<R: SchemaRegistry>(
    registry: &mut R,
    model: &'static Model,
) -> Result<ApiModel, Error> {
    Deriver::new(registry).derive(model)
}

/// Derive a marshalling schema with explicit options.
pub fn api_model_with<R: SchemaRegistry>(
    registry: &mut R,
    model: &'static Model,
    options: DeriveOptions,
) -> Result<ApiModel, Error> {
    Deriver::new(registry).with_options(options).derive(model)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_camel_case() {
        let options = DeriveOptions::default();

        assert!(options.camel_case);
        assert!(options.ignore_attributes.is_empty());
        assert_eq!(options.output_name("user_name"), "userName");
    }

    #[test]
    fn options_can_keep_attribute_names() {
        let options = DeriveOptions::new().keep_attribute_names();
        assert_eq!(options.output_name("user_name"), "user_name");
    }

    #[test]
    fn ancestors_compare_by_model_identity() {
        static A: Model = Model {
            ident: "A",
            field_selection: None,
            columns: &[],
            attributes: &[],
        };
        static B: Model = Model {
            ident: "A",
            field_selection: None,
            columns: &[],
            attributes: &[],
        };

        let chain = Ancestors::default().with(&A);

        assert!(chain.contains(&A));
        assert!(!chain.contains(&B));
    }
}
