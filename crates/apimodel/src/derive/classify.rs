use crate::{
    META_ATTRIBUTE,
    derive::{Ancestors, DeriveOptions},
    node::{AttributeKind, Model},
};

///
/// Classified
///
/// Attribute names split by the scalar and relational passes, in declared
/// order, plus the relationship attributes pruned by the ancestor guard.
///

pub(crate) struct Classified {
    pub scalars: Vec<&'static str>,
    pub relations: Vec<(&'static str, &'static Model)>,
    pub pruned: Vec<(&'static str, &'static str)>,
}

pub(crate) fn classify(
    model: &'static Model,
    options: &DeriveOptions,
    ancestors: &Ancestors,
) -> Classified {
    let mut classified = Classified {
        scalars: Vec::new(),
        relations: Vec::new(),
        pruned: Vec::new(),
    };

    for ident in model.scalar_candidates() {
        if base_permits(model, ident, options) && model.relation_target(ident).is_none() {
            classified.scalars.push(ident);
        }
    }

    for ident in model.relational_candidates() {
        if !base_permits(model, ident, options) {
            continue;
        }
        let Some(target) = model.relation_target(ident) else {
            continue;
        };
        if ancestors.contains(target) {
            classified.pruned.push((ident, target.ident));
        } else {
            classified.relations.push((ident, target));
        }
    }

    classified
}

// Shared base filter for both passes.
fn base_permits(model: &Model, ident: &str, options: &DeriveOptions) -> bool {
    !ident.starts_with('_')
        && !ident.ends_with('_')
        && !options.ignore_attributes.contains(ident)
        && ident != META_ATTRIBUTE
        && !matches!(
            model.attribute(ident).map(|a| &a.kind),
            Some(AttributeKind::Method)
        )
}

///
/// TESTS
///
