use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let minorm = &self.minorm;
        let name = self.model.ident.to_string();
        let fields = self.expand_model_fields();
        let table = match &self.model.table {
            Some(table) => quote!(Some(#table.to_string())),
            None => quote!(None),
        };

        quote! {
            fn schema() -> #minorm::schema::Model {
                use #minorm::{schema::{Field, Model}, stmt::Primitive};

                Model {
                    name: #name.to_string(),
                    table: #table,
                    fields: vec![ #( #fields, )* ],
                }
            }
        }
    }

    fn expand_model_fields(&self) -> Vec<TokenStream> {
        self.model
            .fields
            .iter()
            .map(|field| {
                let name = field.ident.to_string();
                let ty = &field.ty;
                let primary_key = field.is_key();
                let column = match &field.attrs.column {
                    Some(column) => {
                        let lit = &column.name;
                        quote!(Some(#lit.to_string()))
                    }
                    None => quote!(None),
                };

                quote! {
                    Field {
                        name: #name.to_string(),
                        column: #column,
                        ty: <#ty as Primitive>::TYPE,
                        nullable: <#ty as Primitive>::NULLABLE,
                        primary_key: #primary_key,
                    }
                }
            })
            .collect()
    }
}
