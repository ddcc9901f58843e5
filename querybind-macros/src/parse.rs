//! Parses `DeriveInput` into the small model the emitter works from.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, LitStr, Member};

/// A parsed annotation: `url = "symbol,omitempty"`.
#[derive(Clone)]
pub(crate) struct PTag {
    pub ns: String,
    pub value: String,
}

/// A parsed struct field
#[derive(Clone)]
pub(crate) struct PField {
    /// How generated code reaches the field (`self.name` or `self.0`)
    pub member: Member,
    /// The name recorded in the field table, raw prefix stripped
    pub name: String,
    pub ty: syn::Type,
    pub tags: Vec<PTag>,
    pub readonly: bool,
    /// Recorded with an opaque shape and never handed out for writing
    pub opaque: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PStructKind {
    Struct,
    TupleStruct,
    Unit,
}

#[derive(Clone)]
pub(crate) enum PKind {
    Struct {
        kind: PStructKind,
        fields: Vec<PField>,
    },
    Enum,
}

/// A parsed container (struct or enum)
#[derive(Clone)]
pub(crate) struct PType {
    pub name: Ident,
    pub generics: Generics,
    /// Path to the `querybind` facade, `::querybind` unless overridden
    pub krate: TokenStream,
    pub kind: PKind,
}

impl PType {
    pub fn parse(input: &DeriveInput) -> syn::Result<Self> {
        if let Some(lt) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lt,
                "Reflect cannot be derived for types with lifetime parameters",
            ));
        }

        let krate = parse_container_attrs(&input.attrs)?.unwrap_or_else(|| quote! { ::querybind });

        let kind = match &input.data {
            Data::Struct(data) => {
                let kind = match &data.fields {
                    Fields::Named(_) => PStructKind::Struct,
                    Fields::Unnamed(_) => PStructKind::TupleStruct,
                    Fields::Unit => PStructKind::Unit,
                };
                let fields = data
                    .fields
                    .iter()
                    .enumerate()
                    .map(|(index, field)| PField::parse(index, field))
                    .collect::<syn::Result<Vec<_>>>()?;
                PKind::Struct { kind, fields }
            }
            Data::Enum(_) => PKind::Enum,
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "Reflect cannot be derived for unions",
                ));
            }
        };

        Ok(PType {
            name: input.ident.clone(),
            generics: input.generics.clone(),
            krate,
            kind,
        })
    }
}

impl PField {
    fn parse(index: usize, field: &syn::Field) -> syn::Result<Self> {
        let (member, name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(index.into()), index.to_string()),
        };

        let mut tags: Vec<PTag> = Vec::new();
        let mut readonly = false;
        let mut opaque = false;

        for attr in &field.attrs {
            if attr.path().is_ident("tag") {
                attr.parse_nested_meta(|meta| {
                    let Some(ns) = meta.path.get_ident() else {
                        return Err(meta.error("tag namespace must be a single identifier"));
                    };
                    let ns = ns.unraw().to_string();
                    if tags.iter().any(|t| t.ns == ns) {
                        return Err(meta.error(format!("duplicate tag namespace `{ns}`")));
                    }
                    let value: LitStr = meta.value()?.parse()?;
                    tags.push(PTag {
                        ns,
                        value: value.value(),
                    });
                    Ok(())
                })?;
            } else if attr.path().is_ident("reflect") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("readonly") {
                        readonly = true;
                        Ok(())
                    } else if meta.path.is_ident("opaque") {
                        opaque = true;
                        Ok(())
                    } else {
                        Err(meta.error(
                            "unsupported field attribute, expected `readonly` or `opaque`",
                        ))
                    }
                })?;
            }
        }

        Ok(PField {
            member,
            name,
            ty: field.ty.clone(),
            tags,
            readonly,
            opaque,
        })
    }
}

/// Returns the crate path override from `#[reflect(crate = "...")]`, if any.
fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<Option<TokenStream>> {
    let mut krate = None;
    for attr in attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                let path: syn::Path = lit.parse()?;
                krate = Some(quote! { #path });
                Ok(())
            } else {
                Err(meta.error("unsupported container attribute, expected `crate`"))
            }
        })?;
    }
    Ok(krate)
}
