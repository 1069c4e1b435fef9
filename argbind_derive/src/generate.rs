use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveRecord;

impl TryFrom<DeriveRecord> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveRecord) -> Result<Self, Self::Error> {
        let DeriveRecord {
            struct_name,
            fields,
        } = value;
        let field_names: Vec<&syn::Ident> = fields.iter().map(|f| &f.field_name).collect();
        let flag_names: Vec<&String> = fields.iter().map(|f| &f.flag_name).collect();

        Ok(quote! {
            impl ::argbind::Record for #struct_name {
                fn destination(&mut self) -> ::argbind::Destination<'_> {
                    ::argbind::Destination::new()
                        #( .add(::argbind::Binding::field(&mut self.#field_names, #flag_names)) )*
                }

                fn canonical_tokens(&self) -> ::std::vec::Vec<::std::string::String> {
                    ::std::vec![
                        #( ::argbind::canonical_token(#flag_names, &self.#field_names) ),*
                    ]
                }
            }
        })
    }
}
