#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod emit;
mod parse;

/// Derives `Shaped` and `Reflect` for a struct or enum.
///
/// See the `querybind` crate for the attribute grammar.
#[proc_macro_derive(Reflect, attributes(tag, reflect))]
pub fn derive_reflect(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    expand(input).into()
}

fn expand(input: syn::DeriveInput) -> proc_macro2::TokenStream {
    match parse::PType::parse(&input) {
        Ok(parsed) => emit::emit(&parsed),
        Err(err) => err.into_compile_error(),
    }
}
