use alloc::boxed::Box;

use pw_utils::hash::HashMap;

use crate::info::{MemberInfo, Type, TypePath};
use crate::info::{impl_docs_fn, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Members are stored in declaration order, skipped fields are absent.
///
/// # Examples
///
/// ```rust
/// use pw_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     #[reflect(writeonly)]
///     secret: u64,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.member_len(), 2);
/// assert_eq!(info.index_of("secret"), Some(1));
/// assert!(info.readable_member("secret").is_none());
/// assert!(info.writable_member("secret").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    members: Box<[MemberInfo]>,
    indices: HashMap<&'static str, usize>,
    #[cfg(feature = "reflect_docs")]
    docs: Option<&'static str>,
}

impl StructInfo {
    impl_docs_fn!(docs);
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// Member indices follow the input order, which must match the order
    /// of [`Struct::member_at`] for `T`.
    pub fn new<T: Struct + TypePath>(members: &[MemberInfo]) -> Self {
        let members: Box<[MemberInfo]> = members
            .iter()
            .enumerate()
            .map(|(index, member)| member.clone().with_index(index))
            .collect();

        let mut indices = HashMap::with_capacity_and_hasher(members.len(), Default::default());
        for member in &members {
            indices.insert(member.name(), member.index());
        }

        Self {
            ty: Type::of::<T>(),
            members,
            indices,
            #[cfg(feature = "reflect_docs")]
            docs: None,
        }
    }

    /// Returns the member called `name`, regardless of its access.
    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.members.get(*self.indices.get(name)?)
    }

    #[inline]
    pub fn member_at(&self, index: usize) -> Option<&MemberInfo> {
        self.members.get(index)
    }

    /// Returns the member called `name` if it can be read.
    pub fn readable_member(&self, name: &str) -> Option<&MemberInfo> {
        self.member(name).filter(|member| member.is_readable())
    }

    /// Returns the member called `name` if it can be written.
    pub fn writable_member(&self, name: &str) -> Option<&MemberInfo> {
        self.member(name).filter(|member| member.is_writable())
    }

    /// Returns an iterator over the members in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, MemberInfo> {
        self.members.iter()
    }

    pub fn member_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.members.iter().map(MemberInfo::name)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    #[inline]
    pub fn member_len(&self) -> usize {
        self.members.len()
    }
}
