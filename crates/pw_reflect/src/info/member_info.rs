use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{TypeInfo, Typed, impl_docs_fn};

// -----------------------------------------------------------------------------
// MemberAccess

/// Which directions of access a struct member allows.
///
/// Set with `#[reflect(readonly)]` or `#[reflect(writeonly)]` on a field,
/// the default is [`MemberAccess::ReadWrite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberAccess {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl MemberAccess {
    #[inline]
    pub const fn is_readable(self) -> bool {
        !matches!(self, Self::WriteOnly)
    }

    #[inline]
    pub const fn is_writable(self) -> bool {
        !matches!(self, Self::ReadOnly)
    }
}

impl fmt::Display for MemberAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadWrite => f.pad("read-write"),
            Self::ReadOnly => f.pad("read-only"),
            Self::WriteOnly => f.pad("write-only"),
        }
    }
}

// -----------------------------------------------------------------------------
// MemberInfo

/// Information for a named struct member.
///
/// A `MemberInfo` is the handle the path resolver works with: `index` is
/// the member's slot in [`Struct::member_at`](crate::ops::Struct::member_at).
///
/// # Examples
///
/// ```
/// use pw_reflect::{derive::Reflect, info::{MemberAccess, Typed}};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(readonly)]
///     count: u32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let member = info.member("count").unwrap();
///
/// assert!(member.type_is::<u32>());
/// assert_eq!(member.index(), 0);
/// assert_eq!(member.access(), MemberAccess::ReadOnly);
/// ```
#[derive(Clone, Debug)]
pub struct MemberInfo {
    ty_id: TypeId,
    name: &'static str,
    index: usize,
    access: MemberAccess,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl MemberInfo {
    impl_docs_fn!(docs);

    /// Creates a read-write member of type `T`.
    ///
    /// The index is assigned by [`StructInfo::new`](crate::info::StructInfo::new)
    /// from the member's position.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            index: 0,
            access: MemberAccess::ReadWrite,
            type_info: T::type_info,
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    #[inline]
    pub const fn with_access(self, access: MemberAccess) -> Self {
        Self { access, ..self }
    }

    #[inline]
    pub(crate) const fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn access(&self) -> MemberAccess {
        self.access
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.access.is_readable()
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.access.is_writable()
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
