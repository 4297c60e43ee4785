use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Lit, spanned::Spanned};

use crate::path::fp::OptionFP;

/// The documentation of a type or member, if any.
///
/// This corresponds to `pw_reflect::info::StructInfo::docs` and
/// `pw_reflect::info::MemberInfo::docs`.
///
/// By default the content of `#[doc = "..."]` is used, which includes
/// `/// ...` comments. `#[reflect(doc = "...")]` replaces it with custom
/// lines, `#[reflect(doc = false)]` drops it.
///
/// Nothing is collected unless the `reflect_docs` feature is enabled.
#[derive(Debug)]
pub(crate) struct ReflectDocs {
    enabled: bool,
    is_custom: bool,
    docs: Vec<String>,
}

impl Default for ReflectDocs {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ReflectDocs {
    #[inline]
    pub const fn new() -> Self {
        Self {
            enabled: cfg!(feature = "reflect_docs"),
            is_custom: false,
            docs: Vec::new(),
        }
    }

    /// Parse `#[doc = "..."]`.
    ///
    /// The caller checks that the attribute is a doc attribute.
    pub fn parse_default_docs(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        if !self.enabled || self.is_custom {
            return Ok(());
        }

        let pair = attr.meta.require_name_value()?;
        if let Expr::Lit(syn::ExprLit {
            lit: Lit::Str(lit_str),
            ..
        }) = &pair.value
        {
            self.docs.push(lit_str.value());
            Ok(())
        } else {
            Err(syn::Error::new(
                pair.value.span(),
                "`#[doc = ...]` expected a string literal value",
            ))
        }
    }

    /// Parse the value of `#[reflect(doc = ...)]`.
    ///
    /// Examples:
    /// - `#[reflect(doc = "...")]`
    /// - `#[reflect(doc = false)]`
    pub fn parse_custom_docs(&mut self, value: &Lit) -> syn::Result<()> {
        match value {
            Lit::Str(lit_str) => {
                if !self.is_custom {
                    self.docs.clear();
                    self.is_custom = true;
                }
                self.docs.push(lit_str.value());
            }
            Lit::Bool(lit_bool) if !lit_bool.value() => {
                self.enabled = false;
                self.docs.clear();
            }
            Lit::Bool(lit_bool) => {
                return Err(syn::Error::new(
                    lit_bool.span(),
                    "explicit `true` is invalid, docs are collected by default",
                ));
            }
            _ => {
                return Err(syn::Error::new(
                    value.span(),
                    "expected a string or `false` literal",
                ));
            }
        }
        Ok(())
    }

    fn doc_string(&self) -> Option<String> {
        if !self.enabled || self.docs.iter().all(|line| line.trim().is_empty()) {
            return None;
        }

        // `///` comments keep the space after the slashes.
        let lines: Vec<&str> = self
            .docs
            .iter()
            .map(|line| line.strip_prefix(' ').unwrap_or(line))
            .collect();
        Some(lines.join("\n"))
    }

    /// Returns an empty token stream if there are no docs, or
    /// `reflect_docs` is disabled.
    ///
    /// Otherwise, it will return content similar to this:
    ///
    /// ```ignore
    /// .with_docs(::core::option::Option::Some("......"))
    /// ```
    pub fn get_expression_with(&self) -> TokenStream {
        match self.doc_string() {
            Some(doc) => quote! {
                .with_docs(#OptionFP::Some(#doc))
            },
            None => crate::utils::empty(),
        }
    }
}
