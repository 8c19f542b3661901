/// `#[column("name")]`: maps a field to a differently named column.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let name: syn::LitStr = input.parse()?;

        if name.value().trim().is_empty() {
            return Err(syn::Error::new_spanned(&name, "column name must not be empty"));
        }

        if !input.is_empty() {
            return Err(input.error("expected `#[column(\"name\")]`"));
        }

        Ok(Self { name })
    }
}
