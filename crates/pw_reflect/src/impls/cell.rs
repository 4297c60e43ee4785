//! Containers for static storage of type information.
//!
//! Usually used to implement [`Typed`](crate::info::Typed) and
//! [`TypePath`](crate::info::TypePath).
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] holding one [`TypeInfo`].
//! - [`GenericTypeInfoCell`], [`GenericTypePathCell`]: a `static` inside a
//!   generic function is shared by every instantiation, so these keep one
//!   value per [`TypeId`] in a [`TypeIdMap`] behind a [`RwLock`].

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use pw_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Static storage for a value that is built once.
///
/// See [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Static storage of [`TypeInfo`] for a non-generic type.
///
/// ```
/// # use pw_reflect::impls::NonGenericTypeInfoCell;
/// # use pw_reflect::info::{OpaqueInfo, TypeInfo};
/// static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///
/// let a = CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<u8>()));
/// let b = CELL.get_or_init(|| unreachable!());
/// assert!(core::ptr::eq(a, b));
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Static storage for a value per generic instantiation.
///
/// Values are leaked, so references handed out stay valid for `'static`.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Static storage of [`TypeInfo`] for a generic type.
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Static storage of type path strings for a generic type.
///
/// ```
/// # use pw_reflect::impls::{GenericTypePathCell, concat};
/// # use pw_reflect::info::TypePath;
/// struct Wrapper<T>(T);
///
/// fn wrapper_path<T: TypePath>() -> &'static str {
///     static CELL: GenericTypePathCell = GenericTypePathCell::new();
///     CELL.get_or_insert::<Wrapper<T>>(|| concat(&["Wrapper<", T::type_path(), ">"]))
/// }
///
/// assert_eq!(wrapper_path::<u8>(), "Wrapper<u8>");
/// assert_eq!(wrapper_path::<bool>(), "Wrapper<bool>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, building it with `f` on first use.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Another thread may have inserted in the meantime, the first value wins.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
