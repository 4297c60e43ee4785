use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Array, List, Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable reference to a reflected value, cast to its kind.
///
/// Obtained by [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable reference to a reflected value, cast to its kind.
///
/// Obtained by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $($ref:tt)+) => {
        #[inline]
        pub fn $name(self) -> Result<$($ref)+ dyn $kind, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_struct: Struct => &'a);
    impl_cast_method!(as_list: List => &'a);
    impl_cast_method!(as_array: Array => &'a);
    impl_cast_method!(as_pointer: Pointer => &'a);

    /// Returns the value as a plain `dyn Reflect` with the original lifetime.
    #[inline]
    pub fn as_reflect(self) -> &'a dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::List(value) => value,
            Self::Array(value) => value,
            Self::Pointer(value) => value,
            Self::Opaque(value) => value,
        }
    }
}

impl<'a> ReflectMut<'a> {
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_struct: Struct => &'a mut);
    impl_cast_method!(as_list: List => &'a mut);
    impl_cast_method!(as_array: Array => &'a mut);
    impl_cast_method!(as_pointer: Pointer => &'a mut);

    /// Returns the value as a plain `dyn Reflect` with the original lifetime.
    #[inline]
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::List(value) => value,
            Self::Array(value) => value,
            Self::Pointer(value) => value,
            Self::Opaque(value) => value,
        }
    }
}
