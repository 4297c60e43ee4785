//! Kind traits for reading and writing reflected data.
//!
//! Each is a subtrait of [`Reflect`](crate::Reflect):
//!
//! - [`Struct`]: named members (e.g. `A { .. }`).
//! - [`List`]: variable length sequences (e.g. `Vec<T>`).
//! - [`Array`]: fixed length sequences (e.g. `[T; N]`).
//! - [`Pointer`]: a value referring to at most one other value (e.g. `Option<T>`, `Box<T>`).
//!
//! [`ReflectRef`] and [`ReflectMut`] are the result of casting a
//! `dyn Reflect` to its kind.

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod array_ops;
mod kind;
mod list_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;

pub use kind::{ReflectMut, ReflectRef};

pub use array_ops::{Array, ArrayItemIter};
pub use list_ops::{List, ListItemIter};
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructMemberIter};
