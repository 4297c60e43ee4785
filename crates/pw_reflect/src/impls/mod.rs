//! Utilities for implementing reflection traits, and the built-in impls.
//!
//! - [`concat`]: joins string pieces, used to build generic type paths.
//! - [`NonGenericTypeInfoCell`]: storage for [`Typed`] on non-generic types.
//! - [`GenericTypePathCell`], [`GenericTypeInfoCell`]: the same for generic types.
//! - `xxx_partial_eq`, `xxx_debug`: default behaviour of [`Reflect`]
//!   methods for each kind (e.g. [`struct_partial_eq`]).
//!
//! ## Implemented
//!
//! - opaque: `bool`, `char`, `i8`-`i128`, `isize`, `u8`-`u128`, `usize`,
//!   `f32`, `f64`, `&'static str`, `String`
//! - list: `Vec<T>`, `VecDeque<T>`
//! - array: `[T; N]`
//! - pointer: `Option<T>` (nullable), `Box<T>`
//!
//! [`Typed`]: crate::info::Typed
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;

mod array;
mod list;
mod opaque;
mod pointer;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use common::{array_debug, array_partial_eq};
pub use common::{list_debug, list_partial_eq};
pub use common::{pointer_debug, pointer_partial_eq};
pub use common::{struct_debug, struct_partial_eq};

/// Concatenates string pieces into one allocation.
///
/// ```
/// assert_eq!(pw_reflect::impls::concat(&["Vec<", "u8", ">"]), "Vec<u8>");
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len: usize = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

// -----------------------------------------------------------------------------
// Internal macro

/// Implements `TypePath` for a std container with one type parameter.
macro_rules! impl_generic_type_path {
    ($ty:ident, $module:literal) => {
        impl<T: $crate::info::TypePath> $crate::info::TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::impls::concat(&[
                        $module,
                        "::",
                        stringify!($ty),
                        "<",
                        T::type_path(),
                        ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::impls::concat(&[stringify!($ty), "<", T::type_name(), ">"])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }
    };
}

use impl_generic_type_path;
