//! Attribute argument parsing.

use proc_macro2::TokenStream as TokenStream2;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, Ident, Index, Lit, Member, Meta, MetaNameValue, Path, Token};

/// Arguments of `#[subscriptable(...)]`.
#[derive(Default)]
pub(crate) struct Args {
    /// `field = name` or `field = 0`.
    pub field: Option<Member>,
    /// `delegate = Name`.
    pub delegate: Option<Ident>,
    /// `crate = path`.
    pub krate: Option<Path>,
}

/// Parse a comma-separated list of `key = value` arguments.
///
/// # Returns
/// - `Ok(Args::default())` if the tokens are empty.
/// - `Err(...)` if an argument is malformed, unknown, or given twice.
pub(crate) fn parse_args(tokens: TokenStream2) -> syn::Result<Args> {
    let mut args = Args::default();
    if tokens.is_empty() {
        return Ok(args);
    }

    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(tokens)?;
    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "[subscriptable] expected `key = value` arguments",
            ));
        };

        if nv.path.is_ident("field") {
            let member = parse_member(&nv)?;
            set_once(&mut args.field, member, &nv)?;
        } else if nv.path.is_ident("delegate") {
            let ident = parse_ident(&nv)?;
            set_once(&mut args.delegate, ident, &nv)?;
        } else if nv.path.is_ident("crate") {
            let path = parse_path(&nv)?;
            set_once(&mut args.krate, path, &nv)?;
        } else {
            return Err(syn::Error::new_spanned(
                &nv.path,
                "[subscriptable] unknown argument, expected `field`, `delegate` or `crate`",
            ));
        }
    }
    Ok(args)
}

fn set_once<T>(slot: &mut Option<T>, value: T, nv: &MetaNameValue) -> syn::Result<()> {
    if slot.is_some() {
        let key = nv.path.get_ident().map(Ident::to_string).unwrap_or_default();
        return Err(syn::Error::new_spanned(
            &nv.path,
            format!("[subscriptable] duplicate `{}` argument", key),
        ));
    }
    *slot = Some(value);
    Ok(())
}

// Handle `field = name` and `field = 0`
fn parse_member(nv: &MetaNameValue) -> syn::Result<Member> {
    match &nv.value {
        Expr::Path(expr_path) if expr_path.qself.is_none() => {
            if let Some(ident) = expr_path.path.get_ident() {
                return Ok(Member::Named(ident.clone()));
            }
        }
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) if lit.suffix().is_empty() => {
            return Ok(Member::Unnamed(Index {
                index: lit.base10_parse()?,
                span: lit.span(),
            }));
        }
        _ => {}
    }
    Err(syn::Error::new_spanned(
        &nv.value,
        "[subscriptable] field must be a field name or a tuple index",
    ))
}

fn parse_ident(nv: &MetaNameValue) -> syn::Result<Ident> {
    if let Expr::Path(expr_path) = &nv.value {
        if let Some(ident) = expr_path.path.get_ident() {
            return Ok(ident.clone());
        }
    }
    Err(syn::Error::new_spanned(
        &nv.value,
        "[subscriptable] delegate must be an identifier",
    ))
}

fn parse_path(nv: &MetaNameValue) -> syn::Result<Path> {
    match &nv.value {
        Expr::Path(expr_path) if expr_path.qself.is_none() => Ok(expr_path.path.clone()),
        _ => Err(syn::Error::new_spanned(
            &nv.value,
            "[subscriptable] crate must be a path",
        )),
    }
}
