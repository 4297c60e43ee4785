use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::{self, GenericTypeInfoCell};
use crate::info::{PointerInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::{Pointer, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Option

impls::impl_generic_type_path!(Option, "core::option");

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>().nullable()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    /// Only an `Option<T>` is accepted, a bare `T` is rejected.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        impls::pointer_partial_eq(self, value)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f
                .debug_tuple("Some")
                .field(&value.as_reflect() as &dyn fmt::Debug)
                .finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }
}

// -----------------------------------------------------------------------------
// Box

impls::impl_generic_type_path!(Box, "alloc::boxed");

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    /// Only a `Box<T>` is accepted, a bare `T` is rejected.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        impls::pointer_partial_eq(self, value)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        impls::pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some(T::as_reflect(self))
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(T::as_reflect_mut(self))
    }

    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Pointer;

    #[test]
    fn option_accepts_only_itself() {
        let mut x: Option<u32> = None;
        x.set(Box::new(Some(4_u32))).unwrap();
        assert_eq!(x, Some(4));

        x.set(Box::new(None::<u32>)).unwrap();
        assert_eq!(x, None);

        let rejected = x.set(Box::new(4_u32)).unwrap_err();
        assert!(rejected.is::<u32>());
        assert!(x.set(Box::new(Some(4_i32))).is_err());
        assert_eq!(x, None);
    }

    #[test]
    fn box_accepts_only_itself() {
        let mut x: Box<String> = Box::new(String::new());
        x.set(Box::new(Box::new(String::from("b")))).unwrap();
        assert_eq!(*x, "b");

        assert!(x.set(Box::new(String::from("a"))).is_err());
        assert_eq!(*x, "b");

        assert!(Pointer::target(&x).unwrap().is::<String>());
    }

    #[test]
    fn pointer_names_and_debug() {
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
        assert_eq!(<Box<u8>>::type_name(), "Box<u8>");
        assert!(<Option<u8>>::type_info().as_pointer().unwrap().is_nullable());

        assert_eq!(format!("{:?}", Some(3_u8).as_reflect()), "Some(3)");
        assert_eq!(format!("{:?}", None::<u8>.as_reflect()), "None");
        assert_eq!(format!("{:?}", Box::new(3_u8).as_reflect()), "3");
    }

    #[test]
    fn partial_eq_compares_targets() {
        let x = Some(3_i32);
        assert_eq!(x.reflect_partial_eq(&Some(3_i32)), Some(true));
        assert_eq!(x.reflect_partial_eq(&None::<i32>), Some(false));
        assert_eq!(x.reflect_partial_eq(&3_i32), Some(false));
        assert_eq!(None::<i32>.reflect_partial_eq(&None::<i32>), Some(true));
    }
}
