use crate::node::{Attribute, AttributeKind, Column};

///
/// Model
///
/// Introspection metadata for one database-backed record class. Instances are
/// owned by the mapping layer; the engine only reads them. Relationship
/// attributes may reference other models, including cyclically.
///

#[derive(Clone, Debug)]
pub struct Model {
    pub ident: &'static str,

    /// Optional field allowlist declared on the model.
    pub field_selection: Option<FieldSelection>,

    /// Ordered backing-storage columns.
    pub columns: &'static [Column],

    /// Ordered declared attributes.
    pub attributes: &'static [Attribute],
}

impl Model {
    #[must_use]
    pub fn column(&self, ident: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.ident == ident)
    }

    #[must_use]
    pub fn attribute(&self, ident: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.ident == ident)
    }

    /// Relation target for an attribute, if it carries one.
    #[must_use]
    pub fn relation_target(&self, ident: &str) -> Option<&'static Model> {
        match self.attribute(ident)?.kind {
            AttributeKind::Relation(target) => Some(target),
            AttributeKind::Column | AttributeKind::Method => None,
        }
    }

    /// Candidate names for the scalar pass: the explicit field list when one
    /// is declared, otherwise the backing-storage column idents.
    #[must_use]
    pub fn scalar_candidates(&self) -> Vec<&'static str> {
        match self.field_selection {
            Some(FieldSelection::Explicit(fields)) => fields.to_vec(),
            Some(FieldSelection::All) | None => self.columns.iter().map(|c| c.ident).collect(),
        }
    }

    /// Candidate names for the relational pass: the explicit field list when
    /// one is declared, otherwise the declared attribute idents. Relations
    /// are not column-backed, so this pass reads declared attributes.
    #[must_use]
    pub fn relational_candidates(&self) -> Vec<&'static str> {
        match self.field_selection {
            Some(FieldSelection::Explicit(fields)) => fields.to_vec(),
            Some(FieldSelection::All) | None => {
                self.attributes.iter().map(|a| a.ident).collect()
            }
        }
    }
}

///
/// FieldSelection
///
/// The optional field allowlist a model may declare.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldSelection {
    /// Marshal every attribute.
    All,

    /// Marshal exactly these attributes, in this order.
    Explicit(&'static [&'static str]),
}

///
/// TESTS
///
