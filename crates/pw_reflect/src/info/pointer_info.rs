use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_docs_fn, impl_type_fn};
use crate::ops::Pointer;

/// A container for compile-time pointer info (e.g. `Option<T>`, `Box<T>`).
///
/// ```
/// use pw_reflect::info::Typed;
///
/// let info = <Option<u8> as Typed>::type_info().as_pointer().unwrap();
/// assert!(info.target_is::<u8>());
/// assert!(info.is_nullable());
///
/// let info = <Box<u8> as Typed>::type_info().as_pointer().unwrap();
/// assert!(!info.is_nullable());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    target_id: TypeId,
    target_info: fn() -> &'static TypeInfo,
    nullable: bool,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl PointerInfo {
    impl_docs_fn!(docs);
    impl_type_fn!(ty);

    /// Creates info for a pointer that always has a target.
    #[inline]
    pub const fn new<TPointer: Pointer + TypePath, TTarget: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            target_id: TypeId::of::<TTarget>(),
            target_info: TTarget::type_info,
            nullable: false,
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Marks the pointer as one that may have no target.
    #[inline]
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    pub const fn target_id(&self) -> TypeId {
        self.target_id
    }

    #[inline]
    pub fn target_is<T: Any>(&self) -> bool {
        self.target_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn target_info(&self) -> &'static TypeInfo {
        (self.target_info)()
    }
}
