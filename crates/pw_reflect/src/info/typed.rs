use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Manual Implementation
///
/// The cells in [`impls`](crate::impls) keep the info in static storage.
/// For non-generic types:
///
/// ```
/// use pw_reflect::impls::NonGenericTypeInfoCell;
/// use pw_reflect::info::{MemberInfo, StructInfo, TypeInfo, TypePath, Typed};
/// use pw_reflect::ops::Struct;
/// # use pw_reflect::Reflect;
///
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[
///                 MemberInfo::new::<f32>("x"),
///                 MemberInfo::new::<f32>("y"),
///             ]))
///         })
///     }
/// }
/// # impl TypePath for Point {
/// #     fn type_path() -> &'static str { "doc::Point" }
/// #     fn type_name() -> &'static str { "Point" }
/// #     fn type_ident() -> &'static str { "Point" }
/// # }
/// # impl Struct for Point {
/// #     fn member(&self, name: &str) -> Option<&dyn Reflect> { None }
/// #     fn member_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> { None }
/// #     fn member_at(&self, index: usize) -> Option<&dyn Reflect> { None }
/// #     fn member_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> { None }
/// #     fn name_at(&self, index: usize) -> Option<&str> { None }
/// #     fn member_len(&self) -> usize { 2 }
/// #     fn iter_members(&self) -> pw_reflect::ops::StructMemberIter<'_> {
/// #         pw_reflect::ops::StructMemberIter::new(self)
/// #     }
/// # }
/// # impl Reflect for Point {
/// #     fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
/// #         *self = value.take::<Self>()?;
/// #         Ok(())
/// #     }
/// #     fn reflect_kind(&self) -> pw_reflect::info::ReflectKind { pw_reflect::info::ReflectKind::Struct }
/// #     fn reflect_ref(&self) -> pw_reflect::ops::ReflectRef<'_> { pw_reflect::ops::ReflectRef::Struct(self) }
/// #     fn reflect_mut(&mut self) -> pw_reflect::ops::ReflectMut<'_> { pw_reflect::ops::ReflectMut::Struct(self) }
/// # }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.member("y").unwrap().index(), 1);
/// ```
///
/// Generic types use [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell)
/// with `CELL.get_or_insert::<Self>(..)` instead.
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `T: Typed`.
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
