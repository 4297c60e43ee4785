use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

/// Implements `TypePath`, `Typed` and `Reflect` for a `PartialEq + Debug`
/// type without inner structure.
macro_rules! impl_opaque {
    ($ty:ty, $name:literal) => {
        impl_opaque!($ty, $name, $name, None);
    };
    ($ty:ty, $path:literal, $name:literal, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
                Some(value.downcast_ref::<Self>().is_some_and(|value| self == value))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_opaque!(bool, "bool");
impl_opaque!(char, "char");
impl_opaque!(i8, "i8");
impl_opaque!(i16, "i16");
impl_opaque!(i32, "i32");
impl_opaque!(i64, "i64");
impl_opaque!(i128, "i128");
impl_opaque!(isize, "isize");
impl_opaque!(u8, "u8");
impl_opaque!(u16, "u16");
impl_opaque!(u32, "u32");
impl_opaque!(u64, "u64");
impl_opaque!(u128, "u128");
impl_opaque!(usize, "usize");
impl_opaque!(f32, "f32");
impl_opaque!(f64, "f64");
impl_opaque!(&'static str, "&str");
impl_opaque!(
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string")
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    
    #[test]
    fn string_type_path() {
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::module_path(), Some("alloc::string"));
        assert_eq!(<&str as TypePath>::type_path(), "&str");
        assert_eq!(u16::type_info().kind(), ReflectKind::Opaque);
    }

    #[test]
    fn set_same_type_only() {
        let mut text = String::from("old");
        text.set(Box::new(String::from("new"))).unwrap();
        assert_eq!(text, "new");

        let rejected = text.set(Box::new(5_u8)).unwrap_err();
        assert!(rejected.is::<u8>());
        assert_eq!(text, "new");
    }

    #[test]
    fn partial_eq_across_types() {
        assert_eq!(1_i32.reflect_partial_eq(&1_i32), Some(true));
        assert_eq!(1_i32.reflect_partial_eq(&1_i64), Some(false));
    }
}
