//! Paths into `pw_reflect` used by generated code.
//!
//! Keeping them in one place limits the changes needed when the layout of
//! `pw_reflect` moves. Only the crate root itself needs a lookup, see
//! [`pw_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `pw_reflect` crate for the invoking crate.
///
/// 1. For crates that depend on `pw_reflect`, returns `::pw_reflect`.
/// 2. For crates that depend on `pathway`, returns `::pathway::reflect`.
/// 3. Otherwise returns `::pw_reflect`, which may not resolve.
///
/// This reads the caller's `Cargo.toml`, so it is called once per derive
/// and the result is passed around.
pub(crate) fn pw_reflect() -> syn::Path {
    pw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("pw_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_utils_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn concat_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::impls::concat
    }
}
