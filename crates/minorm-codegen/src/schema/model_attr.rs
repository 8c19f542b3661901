use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("key") {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[key] belongs on the identifier field, not the struct",
                ));
            } else if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                match table_name(attr) {
                    Ok(lit) => self.table = Some(lit),
                    Err(err) => errs.push(err),
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let expected = || syn::Error::new_spanned(attr, "expected `table = \"table_name\"`");

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(expected());
    };

    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &meta.value
    else {
        return Err(expected());
    };

    Ok(lit.clone())
}
