//! Parsers for `#[reflect(..)]` and `#[doc = ".."]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod reflect_docs;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use reflect_docs::ReflectDocs;

pub(crate) use field_attributes::{FieldAccess, FieldAttributes};
pub(crate) use type_attributes::TypeAttributes;

/// Returns `true` for `#[doc = ".."]`, including `/// ..` comments.
#[inline]
fn is_doc_attribute(attr: &syn::Attribute) -> bool {
    attr.path().is_ident("doc")
}

/// Returns `true` for `#[reflect(..)]`.
#[inline]
fn is_reflect_attribute(attr: &syn::Attribute) -> bool {
    attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME)
}
