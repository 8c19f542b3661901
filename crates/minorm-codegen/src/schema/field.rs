use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr {
            key: None,
            column: None,
        };

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(attr, "#[key] takes no arguments"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            id,
            attrs,
            ident: ident.clone(),
            ty: field.ty.clone(),
        })
    }

    pub(crate) fn is_key(&self) -> bool {
        self.attrs.key.is_some()
    }
}
