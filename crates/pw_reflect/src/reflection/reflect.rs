use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`pw_reflect`].
///
/// A `dyn Reflect` can be inspected and modified without knowing its
/// concrete type: its members, elements and pointer targets are reached
/// through [`reflect_ref`] and [`reflect_mut`], and its static description
/// through [`reflect_type_info`].
///
/// It's strongly recommended to use [the derive macro for `Reflect`] rather
/// than implementing this trait by hand. The derive macro also implements
/// [`Struct`], [`TypePath`] and [`Typed`].
///
/// # Type Identification
///
/// `Any::type_id` on a `Box<dyn Reflect>` returns the id of the box itself,
/// use [`Reflect::ty_id`] to get the id of the value inside:
///
/// ```rust
/// # use pw_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Type Casting
///
/// [`reflect_ref`] and [`reflect_mut`] cast to one of the kind traits.
/// `downcast_ref`, `downcast_mut`, `downcast` and `take` recover the
/// concrete type:
///
/// ```rust
/// # use pw_reflect::Reflect;
/// let list = vec![1_u8, 2, 3];
/// let list = list.as_reflect().reflect_ref().as_list().unwrap();
/// assert_eq!(list.len(), 3);
///
/// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
/// assert_eq!(x.take::<i32>().unwrap(), 10);
/// ```
///
/// # Manual Implementation
///
/// Kind-specific methods usually look like this:
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Struct
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Struct(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Struct(self)
/// }
/// ```
///
/// For non-opaque types, [`reflect_partial_eq`] can be written with the
/// helpers in [`impls`](crate::impls), such as
/// [`list_partial_eq`](crate::impls::list_partial_eq).
///
/// [`pw_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`reflect_partial_eq`]: Reflect::reflect_partial_eq
/// [`reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`TypePath`]: crate::info::TypePath
/// [`Typed`]: crate::info::Typed
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// ```
    /// use pw_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts a boxed value to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Moves this value into a new `Box<dyn Reflect>`.
    ///
    /// ```
    /// use pw_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = 5_u8.into_boxed_reflect();
    /// assert!(x.is::<u8>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces this value with `value`.
    ///
    /// Returns `value` back if it is not of an acceptable type.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [`ReflectKind`] of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of this value, cast to its kind.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of this value, cast to its kind.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Compares with another reflected value.
    ///
    /// Returns `None` if the comparison is not supported.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter used by `impl Debug for dyn Reflect`.
    fn reflect_debug(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Array(data) => impls::array_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to `Box<T>`, or returns the original box.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked before downcasting"),
        }
    }

    /// Downcasts the value to `T`, or returns the original box.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl core::fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn downcast_keeps_box_on_mismatch() {
        let value: Box<dyn Reflect> = Box::new(String::from("text"));

        let value = value.downcast::<u32>().unwrap_err();
        assert!(value.is::<String>());
        assert_eq!(value.take::<String>().unwrap(), "text");
    }

    #[test]
    fn set_rejects_other_types() {
        let mut x = 1_i64;
        let rejected = x.set(Box::new(2_i32)).unwrap_err();
        assert!(rejected.is::<i32>());
        assert_eq!(x, 1);

        x.set(Box::new(7_i64)).unwrap();
        assert_eq!(x, 7);
    }

    #[test]
    fn debug_dispatches_by_kind() {
        let list = vec![1_u8, 2];
        assert_eq!(list.reflect_kind(), ReflectKind::List);
        assert_eq!(alloc::format!("{:?}", list.as_reflect()), "[1, 2]");
    }
}
