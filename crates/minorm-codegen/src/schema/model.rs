use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Index of the `#[key]` field
    pub(crate) primary_key: usize,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let mut keys = fields.iter().filter(|field| field.is_key());

        let Some(primary_key) = keys.next().map(|field| field.id) else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model must have exactly one field marked #[key]",
            ));
        };

        let mut errs = ErrorSet::new();
        for extra in keys {
            errs.push(syn::Error::new_spanned(
                &extra.attrs.key,
                "model must have exactly one field marked #[key]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            primary_key,
            table: model_attr.table,
        })
    }

    /// Position of a field in a loaded row: the key comes first, then the
    /// remaining fields in declaration order.
    pub(crate) fn row_position(&self, field: usize) -> usize {
        match field {
            field if field == self.primary_key => 0,
            field if field < self.primary_key => field + 1,
            field => field,
        }
    }
}
