//! Static type information.
//!
//! - [`TypePath`]: stable type names, [`DynamicTypePath`] for `dyn` dispatch.
//! - [`Type`]: a `TypeId` plus a [`TypePathTable`].
//! - [`Typed`]: access to a type's [`TypeInfo`], [`DynamicTyped`] for `dyn` dispatch.
//! - [`TypeInfo`]: one of
//!     - [`StructInfo`]: named members, see [`MemberInfo`] and [`MemberAccess`].
//!     - [`ListInfo`]: variable length sequences (e.g. `Vec<T>`).
//!     - [`ArrayInfo`]: fixed length sequences (e.g. `[T; N]`).
//!     - [`PointerInfo`]: values referring to one other value (e.g. `Option<T>`).
//!     - [`OpaqueInfo`]: everything else (e.g. `i32`, `String`).
//! - [`ReflectKind`]: the kind tag shared by `TypeInfo` and
//!   [`ReflectRef`](crate::ops::ReflectRef).

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod docs_macro;
mod list_info;
mod member_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use docs_macro::impl_docs_fn;

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use list_info::ListInfo;
pub use member_info::{MemberAccess, MemberInfo};
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
