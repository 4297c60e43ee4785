//! Derive macro for `pw_reflect`, see [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` on a struct with named fields implements:
///
/// - `TypePath`
/// - `Typed`, whose `TypeInfo` is a `StructInfo` listing the members
/// - `Struct`
/// - `Reflect`
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Player {
///     name: String,
///     #[reflect(rename = "hitPoints")]
///     hit_points: u32,
/// }
/// ```
///
/// Generic type parameters must implement `Reflect + Typed`.
///
/// ## Member Attributes
///
/// Members are exposed under their field names, in declaration order.
///
/// - `#[reflect(rename = "name")]`: expose the field under another name.
/// - `#[reflect(skip)]`: do not expose the field at all.
/// - `#[reflect(readonly)]`: the member can be read but not assigned by path.
/// - `#[reflect(writeonly)]`: the member can be assigned but not read by path.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(readonly)]
///     id: u64,
///     #[reflect(writeonly)]
///     password: String,
///     #[reflect(skip)]
///     session: Option<u64>,
/// }
/// ```
///
/// Member names must be unique after renaming.
///
/// ## Custom Type Path
///
/// The type path defaults to `module_path!()` followed by the type name.
/// It can be overridden, generics are appended automatically:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "game::Wrapper")]
/// struct Wrapper<T> { inner: T }
/// // type_path: "game::Wrapper<u32>" for `Wrapper<u32>`
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Documentation Reflection
///
/// With the `reflect_docs` feature, `#[doc = "..."]` attributes (including
/// `/// ...` comments) of the type and its fields are kept in `StructInfo`
/// and `MemberInfo`.
///
/// `#[reflect(doc = "...")]` replaces the collected docs, one line per
/// attribute, and `#[reflect(doc = false)]` drops them. Both are no-ops
/// without the feature.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
