use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let minorm = &self.minorm;
        let model_ident = &self.model.ident;
        let model_name = model_ident.to_string();
        let width = util::int(self.model.fields.len());
        let model_schema = self.expand_model_schema();
        let struct_load_fields = self.expand_struct_load_fields();
        let record_values = self.expand_record_values();
        let assign_arms = self.expand_assign_arms();

        quote! {
            impl #minorm::Model for #model_ident {
                const NAME: &'static str = #model_name;

                #model_schema

                fn load(mut record: #minorm::ValueRecord) -> #minorm::Result<Self> {
                    use #minorm::stmt::Primitive;

                    if record.len() != #width {
                        return Err(#minorm::Error::invalid_record(#model_name, #width, record.len()));
                    }

                    Ok(Self {
                        #struct_load_fields
                    })
                }

                fn record(&self) -> #minorm::ValueRecord {
                    use #minorm::stmt::Primitive;

                    #minorm::ValueRecord::from_vec(vec![ #( #record_values, )* ])
                }

                fn assign(&mut self, field: usize, value: #minorm::Value) -> #minorm::Result<()> {
                    use #minorm::stmt::Primitive;

                    match field {
                        #assign_arms
                        _ => return Err(#minorm::Error::field_not_found(#model_name, field)),
                    }

                    Ok(())
                }
            }
        }
    }

    /// Rows list the key first, then the other fields in declaration order.
    fn expand_struct_load_fields(&self) -> TokenStream {
        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                let position = util::int(self.model.row_position(field.id));

                quote!(#ident: <#ty as Primitive>::load(record.take(#position))?,)
            })
            .collect()
    }

    fn expand_record_values(&self) -> Vec<TokenStream> {
        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                quote!(<#ty as Primitive>::to_value(&self.#ident))
            })
            .collect()
    }

    fn expand_assign_arms(&self) -> TokenStream {
        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                let id = util::int(field.id);

                quote!(#id => self.#ident = <#ty as Primitive>::load(value)?,)
            })
            .collect()
    }
}
