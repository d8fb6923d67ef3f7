use crate::node::Model;

///
/// Attribute
///
/// One declared attribute on a record model.
///

#[derive(Clone, Debug)]
pub struct Attribute {
    pub ident: &'static str,
    pub kind: AttributeKind,
}

impl Attribute {
    #[must_use]
    pub const fn column(ident: &'static str) -> Self {
        Self {
            ident,
            kind: AttributeKind::Column,
        }
    }

    #[must_use]
    pub const fn relation(ident: &'static str, target: &'static Model) -> Self {
        Self {
            ident,
            kind: AttributeKind::Relation(target),
        }
    }

    #[must_use]
    pub const fn method(ident: &'static str) -> Self {
        Self {
            ident,
            kind: AttributeKind::Method,
        }
    }
}

///
/// AttributeKind
///

#[derive(Clone, Copy, Debug)]
pub enum AttributeKind {
    /// Scalar attribute backed by the same-named storage column.
    Column,

    /// Relationship attribute; the mapper points at the target model.
    Relation(&'static Model),

    /// Callable; never marshalled.
    Method,
}
