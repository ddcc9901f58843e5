use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::parse::{PField, PKind, PStructKind, PType};

pub(crate) fn emit(ty: &PType) -> TokenStream {
    let krate = &ty.krate;
    let name = &ty.name;
    let name_str = Literal::string(&name.to_string());

    let mut generics = ty.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|tp| tp.ident.clone()).collect();
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for ident in type_params {
            where_clause
                .predicates
                .push(syn::parse_quote! { #ident: #krate::Shaped + #krate::Reflect });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (shape_ty, field_mut) = match &ty.kind {
        PKind::Struct { kind, fields } => {
            let kind = match kind {
                PStructKind::Struct => quote! { #krate::StructKind::Struct },
                PStructKind::TupleStruct => quote! { #krate::StructKind::TupleStruct },
                PStructKind::Unit => quote! { #krate::StructKind::Unit },
            };
            let field_defs: Vec<_> = fields.iter().map(|f| emit_field(krate, f)).collect();
            let field_table = const_slice(&field_defs);
            let shape_ty = quote! {
                #krate::Type::Struct(#krate::StructType::new(#kind, #field_table))
            };
            (shape_ty, emit_field_mut(krate, fields))
        }
        PKind::Enum => (quote! { #krate::Type::Enum }, TokenStream::new()),
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Shaped for #name #ty_generics #where_clause {
            const SHAPE: &'static #krate::Shape = &const {
                #krate::Shape::new(#name_str, #shape_ty)
            };
        }

        #[automatically_derived]
        impl #impl_generics #krate::Reflect for #name #ty_generics #where_clause {
            fn shape(&self) -> &'static #krate::Shape {
                <Self as #krate::Shaped>::SHAPE
            }

            #field_mut
        }
    }
}

fn emit_field(krate: &TokenStream, field: &PField) -> TokenStream {
    let name = Literal::string(&field.name);
    let ty = &field.ty;
    let tags: Vec<_> = field
        .tags
        .iter()
        .map(|t| {
            let ns = Literal::string(&t.ns);
            let value = Literal::string(&t.value);
            quote! { #krate::Tag::new(#ns, #value) }
        })
        .collect();
    let tags = const_slice(&tags);
    let readonly = field.readonly;
    let shape = if field.opaque {
        opaque_shape(krate, ty)
    } else {
        quote! { #krate::shape_of::<#ty> }
    };

    quote! {
        #krate::Field::new(
            #name,
            #shape,
            #tags,
        )
        .readonly(#readonly)
    }
}

/// A shape function for a field whose type does not implement `Shaped`.
/// Only the spelling of the type is kept.
fn opaque_shape(krate: &TokenStream, ty: &syn::Type) -> TokenStream {
    let ident = Literal::string(&quote!(#ty).to_string().replace(' ', ""));
    quote! {
        {
            fn opaque_shape() -> &'static #krate::Shape {
                static SHAPE: #krate::Shape = #krate::Shape::new(#ident, #krate::Type::Opaque);
                &SHAPE
            }
            opaque_shape
        }
    }
}

/// A `&'static` slice of const-fn built items. Empty slices are written
/// plainly so their element type is inferred from the call site.
fn const_slice(items: &[TokenStream]) -> TokenStream {
    if items.is_empty() {
        quote! { &[] }
    } else {
        quote! { &const { [#(#items),*] } }
    }
}

fn emit_field_mut(krate: &TokenStream, fields: &[PField]) -> TokenStream {
    if fields.is_empty() {
        return TokenStream::new();
    }
    let arms = fields.iter().enumerate().filter(|(_, f)| !f.opaque).map(|(index, f)| {
        let index = Literal::usize_unsuffixed(index);
        let member = &f.member;
        quote! { #index => ::core::option::Option::Some(&mut self.#member), }
    });
    quote! {
        fn field_mut(
            &mut self,
            index: usize,
        ) -> ::core::option::Option<&mut dyn #krate::Reflect> {
            match index {
                #(#arms)*
                _ => ::core::option::Option::None,
            }
        }
    }
}
