#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub flag_name: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveRecord {
    pub struct_name: syn::Ident,
    pub fields: Vec<DeriveField>,
}
