use crate::Reflect;
use crate::info::{Type, TypePath};
use crate::info::{impl_docs_fn, impl_type_fn};

/// A container for compile-time info of types without inner structure,
/// such as primitives and `String`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl OpaqueInfo {
    impl_docs_fn!(docs);
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }
}
