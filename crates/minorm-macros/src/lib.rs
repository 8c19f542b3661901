extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `minorm::Model` for a struct with named fields.
///
/// Attributes:
///
/// * `#[table = "name"]` on the struct overrides the table name, which
///   otherwise is the struct's name.
/// * `#[key]` marks the identifier field. Exactly one field must carry it.
/// * `#[column("name")]` on a field overrides its column name, which
///   otherwise is the field's name.
#[proc_macro_derive(Model, attributes(key, table, column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match minorm_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
