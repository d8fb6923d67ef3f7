///
/// Column
///
/// One backing-storage column as reported by the mapping layer.
///

#[derive(Clone, Debug)]
pub struct Column {
    pub ident: &'static str,

    /// Storage type class name, matched against the type map.
    pub ty: &'static str,

    /// Declared element type for composite columns.
    pub item_ty: Option<&'static str>,
}

impl Column {
    #[must_use]
    pub const fn new(ident: &'static str, ty: &'static str) -> Self {
        Self {
            ident,
            ty,
            item_ty: None,
        }
    }

    #[must_use]
    pub const fn with_item(ident: &'static str, ty: &'static str, item_ty: &'static str) -> Self {
        Self {
            ident,
            ty,
            item_ty: Some(item_ty),
        }
    }
}
