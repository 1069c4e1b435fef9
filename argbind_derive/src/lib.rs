extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveRecord;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `argbind::Record` for a struct with named fields.
///
/// Each field binds to the flag of the same name; use `#[argbind(rename = "..")]` to bind a field to a different flag name.
/// Fields must be one of `String`, `bool`, `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`, `u64`, `usize`, `f32` or `f64`.
#[proc_macro_derive(Record, attributes(argbind))]
pub fn record(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveRecord::try_from(ast)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
