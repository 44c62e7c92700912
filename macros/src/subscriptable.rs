//! Implementation of the `#[subscriptable]` attribute macro
//!
//! Validates the attribute arguments against the annotated struct and generates
//! the `Subscriptable` implementation, plus a unit delegate struct when the
//! subscripts are routed to a field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Fields, Ident, Item, ItemStruct, Member, Path, Type, WhereClause, parse_quote};

use crate::common::{Args, parse_args};

/// Entry point for the `#[subscriptable]` attribute macro.
pub fn subscriptable_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = TokenStream2::from(item);
    match expand(attr.into(), item.clone()) {
        Ok(output) => output.into(),
        Err(err) => {
            // Keep the item so the error is not followed by unresolved-name noise.
            let mut output = err.to_compile_error();
            output.extend(item);
            output.into()
        }
    }
}

pub(crate) fn expand(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let args = parse_args(attr)?;
    let item = match syn::parse2::<Item>(item)? {
        Item::Struct(item) => item,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "[subscriptable] can only be applied to structs",
            ));
        }
    };

    let Args {
        field,
        delegate,
        krate,
    } = args;
    let krate = krate.unwrap_or_else(|| parse_quote!(::subscriptable));

    match field {
        Some(member) => {
            let field_ty = find_field(&item, &member)?;
            let delegate = delegate.unwrap_or_else(|| format_ident!("{}Subscript", item.ident));
            Ok(generate_field_output(
                &item, &krate, &member, field_ty, &delegate,
            ))
        }
        None => {
            if let Some(delegate) = delegate {
                return Err(syn::Error::new_spanned(
                    delegate,
                    "[subscriptable] `delegate` names the struct generated for `field`, add a `field` argument",
                ));
            }
            Ok(generate_accessor_output(&item, &krate))
        }
    }
}

/// Look up the type of the field subscripts are routed to.
fn find_field<'a>(item: &'a ItemStruct, member: &Member) -> syn::Result<&'a Type> {
    let found = match (&item.fields, member) {
        (Fields::Named(fields), Member::Named(name)) => fields
            .named
            .iter()
            .find(|field| field.ident.as_ref() == Some(name)),
        (Fields::Unnamed(fields), Member::Unnamed(index)) => {
            fields.unnamed.iter().nth(index.index as usize)
        }
        _ => None,
    };

    found.map(|field| &field.ty).ok_or_else(|| {
        syn::Error::new_spanned(
            member,
            format!(
                "[subscriptable] `{}` has no field `{}`",
                item.ident,
                quote!(#member)
            ),
        )
    })
}

/// The struct's where clause, extended with one more predicate.
fn where_clause_with(item: &ItemStruct, predicate: syn::WherePredicate) -> WhereClause {
    let mut where_clause = item
        .generics
        .where_clause
        .clone()
        .unwrap_or_else(|| parse_quote!(where));
    where_clause.predicates.push(predicate);
    where_clause
}

// ============================================================================
// Code Generation
// ============================================================================

/// Generate the output: original struct + delegate struct + trait impls.
fn generate_field_output(
    item: &ItemStruct,
    krate: &Path,
    member: &Member,
    field_ty: &Type,
    delegate: &Ident,
) -> TokenStream2 {
    let ident = &item.ident;
    let vis = &item.vis;
    let (impl_generics, ty_generics, _) = item.generics.split_for_impl();
    // Spanned on the field type, so a non-sequence field is reported there.
    let predicate = quote_spanned!(field_ty.span()=> #field_ty: #krate::Sequence);
    let where_clause = where_clause_with(item, parse_quote!(#predicate));

    let doc = format!(
        "Routes integer subscripts on [`{}`] to its `{}` field.",
        ident,
        quote!(#member)
    );

    quote! {
        #item

        #[doc = #doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #vis struct #delegate;

        impl #impl_generics #krate::Delegate<#ident #ty_generics> for #delegate #where_clause {
            type Element = <#field_ty as #krate::Sequence>::Element;

            #[inline]
            fn element<'__s>(
                &self,
                target: &'__s #ident #ty_generics,
                index: i64,
            ) -> ::core::option::Option<&'__s Self::Element> {
                #krate::Sequence::element(&target.#member, index)
            }
        }

        impl #impl_generics #krate::Subscriptable for #ident #ty_generics #where_clause {
            type Delegate = #delegate;
        }
    }
}

/// Generate the output: original struct + `Subscriptable` impl using `Accessor`.
fn generate_accessor_output(item: &ItemStruct, krate: &Path) -> TokenStream2 {
    let ident = &item.ident;
    let (impl_generics, ty_generics, _) = item.generics.split_for_impl();
    let predicate = quote_spanned!(ident.span()=> #ident #ty_generics: #krate::At);
    let where_clause = where_clause_with(item, parse_quote!(#predicate));

    quote! {
        #item

        impl #impl_generics #krate::Subscriptable for #ident #ty_generics #where_clause {
            type Delegate = #krate::Accessor;
        }
    }
}
