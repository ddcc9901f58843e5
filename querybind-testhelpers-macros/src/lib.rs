use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemFn;

/// Test attribute that sets up tracing before running the test.
///
/// ```ignore
/// #[querybind_testhelpers::test]
/// fn binds_strings() {
///     // the subscriber is installed
/// }
/// ```
///
/// An argument replaces the underlying test attribute:
///
/// ```ignore
/// #[querybind_testhelpers::test(tokio::test)]
/// async fn binds_from_a_request() {}
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    expand(attr.into(), item.into()).into()
}

fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = match syn::parse2::<ItemFn>(item) {
        Ok(f) => f,
        Err(err) => return err.into_compile_error(),
    };

    let test_attr = if attr.is_empty() {
        quote! { #[::core::prelude::rust_2024::test] }
    } else {
        quote! { #[#attr] }
    };
    let stmts = &block.stmts;

    quote! {
        #test_attr
        #(#attrs)*
        #vis #sig {
            ::querybind_testhelpers::setup();

            #(#stmts)*
        }
    }
}
