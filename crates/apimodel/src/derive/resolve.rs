use crate::{
    Error,
    field::FieldType,
    node::{Column, Model},
    types::{ColumnType, FieldKind},
};

/// Storage type assumed for composite items when the column declares none.
const DEFAULT_ITEM_TYPE: &str = "String";

/// Resolve a scalar attribute's backing column to its API field type.
///
/// Composite columns resolve a second tier: the declared item type (string
/// when absent) becomes the element of a list field.
pub(crate) fn resolve_column(
    model: &Model,
    attribute: &str,
    column: &Column,
) -> Result<FieldType, Error> {
    let ty = lookup(model, attribute, column.ty)?;

    match ty.field_kind() {
        FieldKind::List => {
            let item_name = column.item_ty.unwrap_or(DEFAULT_ITEM_TYPE);
            let item = lookup(model, attribute, item_name)?;

            Ok(FieldType::List(Box::new(field_for(item.field_kind()))))
        }
        kind => Ok(field_for(kind)),
    }
}

fn lookup(model: &Model, attribute: &str, type_name: &str) -> Result<ColumnType, Error> {
    ColumnType::from_type_name(type_name).ok_or_else(|| Error::UnrecognizedType {
        model: model.ident,
        attribute: attribute.to_string(),
        type_name: type_name.to_string(),
    })
}

// Composite items nest one more level with untyped elements.
fn field_for(kind: FieldKind) -> FieldType {
    match kind {
        FieldKind::Boolean => FieldType::Boolean,
        FieldKind::Date => FieldType::Date,
        FieldKind::DateTime => FieldType::DateTime,
        FieldKind::Float => FieldType::Float,
        FieldKind::Integer => FieldType::Integer,
        FieldKind::List => FieldType::List(Box::new(FieldType::Raw)),
        FieldKind::Raw => FieldType::Raw,
        FieldKind::String => FieldType::String,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attribute;

    static SAMPLE: Model = Model {
        ident: "Sample",
        field_selection: None,
        columns: &[],
        attributes: &[Attribute::column("id")],
    };

    #[test]
    fn scalars_resolve_directly() {
        let column = Column::new("id", "Integer");
        assert_eq!(
            resolve_column(&SAMPLE, "id", &column),
            Ok(FieldType::Integer)
        );
    }

    #[test]
    fn composites_resolve_their_item_type() {
        let column = Column::with_item("tags", "ARRAY", "Integer");
        assert_eq!(
            resolve_column(&SAMPLE, "tags", &column),
            Ok(FieldType::List(Box::new(FieldType::Integer)))
        );
    }

    #[test]
    fn composites_default_to_string_items() {
        let column = Column::new("tags", "ARRAY");
        assert_eq!(
            resolve_column(&SAMPLE, "tags", &column),
            Ok(FieldType::List(Box::new(FieldType::String)))
        );
    }

    #[test]
    fn unknown_types_fail() {
        let column = Column::new("blob", "BLOB");
        let err = resolve_column(&SAMPLE, "blob", &column).unwrap_err();

        assert_eq!(
            err,
            Error::UnrecognizedType {
                model: "Sample",
                attribute: "blob".to_string(),
                type_name: "BLOB".to_string(),
            }
        );
    }

    #[test]
    fn unknown_item_types_fail() {
        let column = Column::with_item("tags", "ARRAY", "BLOB");
        assert!(resolve_column(&SAMPLE, "tags", &column).is_err());
    }
}
