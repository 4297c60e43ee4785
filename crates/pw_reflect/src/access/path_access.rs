use alloc::boxed::Box;

use crate::Reflect;
use crate::access::{AccessPath, PathAccessError};
use crate::info::TypePath;
use crate::ops::{Array, List, Pointer, ReflectMut, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// ReflectPathAccess

/// Path access as methods on every reflected value.
///
/// Methods parse `path` on each call; a `&str` path is split lazily and
/// does not allocate. Parse a [`Path`](crate::access::Path) once to reuse it.
///
/// # Examples
///
/// ```
/// use pw_reflect::{derive::Reflect, access::ReflectPathAccess};
///
/// #[derive(Reflect)]
/// struct Foo {
///     id: u32,
///     data: Vec<Option<u8>>,
/// }
///
/// let mut foo = Foo { id: 1, data: vec![Some(1), None] };
///
/// // `Option` targets are reached through the pointer.
/// assert_eq!(*foo.access_as::<u8>("data[0]").unwrap(), 1);
///
/// foo.assign_value("data[1]", Some(7_u8)).unwrap();
/// assert_eq!(foo.data[1], Some(7));
///
/// *foo.access_mut_as::<u32>("id").unwrap() += 1;
/// assert_eq!(foo.id, 2);
/// ```
pub trait ReflectPathAccess {
    /// Returns a reference to the value at `path`.
    fn access<'a, 'p>(&'a self, path: impl AccessPath<'p>)
    -> Result<&'a dyn Reflect, PathAccessError>;

    /// Returns a mutable reference to the value at `path`.
    fn access_mut<'a, 'p>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut dyn Reflect, PathAccessError>;

    /// Returns a typed reference to the value at `path`.
    ///
    /// If the value is a pointer, its targets are tried as well.
    fn access_as<'a, 'p, T: Reflect + TypePath>(
        &'a self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a T, PathAccessError>;

    /// Returns a mutable typed reference to the value at `path`.
    ///
    /// If the value is a pointer, its targets are tried as well.
    fn access_mut_as<'a, 'p, T: Reflect + TypePath>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut T, PathAccessError>;

    /// Replaces the value at `path`.
    fn assign<'p>(
        &mut self,
        path: impl AccessPath<'p>,
        value: Box<dyn Reflect>,
    ) -> Result<(), PathAccessError>;

    /// Replaces the value at `path` with a concrete value.
    fn assign_value<'p, T: Reflect>(
        &mut self,
        path: impl AccessPath<'p>,
        value: T,
    ) -> Result<(), PathAccessError>;
}

impl ReflectPathAccess for dyn Reflect {
    #[inline(never)]
    fn access<'a, 'p>(
        &'a self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a dyn Reflect, PathAccessError> {
        crate::access::get(self, path)
    }

    #[inline(never)]
    fn access_mut<'a, 'p>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut dyn Reflect, PathAccessError> {
        crate::access::get_mut(self, path)
    }

    #[inline]
    fn access_as<'a, 'p, T: Reflect + TypePath>(
        &'a self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a T, PathAccessError> {
        // Not Inline `access`: it is compiled once per path type, not per `T`.
        let value = ReflectPathAccess::access(self, path)?;
        downcast_through::<T>(value)
    }

    #[inline]
    fn access_mut_as<'a, 'p, T: Reflect + TypePath>(
        &'a mut self,
        path: impl AccessPath<'p>,
    ) -> Result<&'a mut T, PathAccessError> {
        let value = ReflectPathAccess::access_mut(self, path)?;
        downcast_through_mut::<T>(value)
    }

    #[inline(never)]
    fn assign<'p>(
        &mut self,
        path: impl AccessPath<'p>,
        value: Box<dyn Reflect>,
    ) -> Result<(), PathAccessError> {
        crate::access::set(self, path, value)
    }

    #[inline]
    fn assign_value<'p, T: Reflect>(
        &mut self,
        path: impl AccessPath<'p>,
        value: T,
    ) -> Result<(), PathAccessError> {
        ReflectPathAccess::assign(self, path, Box::new(value))
    }
}

// -----------------------------------------------------------------------------
// Downcast through pointers

fn downcast_through<T: Reflect + TypePath>(value: &dyn Reflect) -> Result<&T, PathAccessError> {
    let actual = value.reflect_type_path();
    let mut current = value;
    loop {
        if let Some(target) = current.downcast_ref::<T>() {
            return Ok(target);
        }
        current = match current.reflect_ref() {
            ReflectRef::Pointer(pointer) => match pointer.target() {
                Some(target) => target,
                None => break,
            },
            _ => break,
        };
    }
    Err(PathAccessError::InvalidDowncast {
        expected: T::type_path(),
        actual,
    })
}

fn downcast_through_mut<T: Reflect + TypePath>(
    value: &mut dyn Reflect,
) -> Result<&mut T, PathAccessError> {
    let error = PathAccessError::InvalidDowncast {
        expected: T::type_path(),
        actual: value.reflect_type_path(),
    };
    let mut current = value;
    while !current.is::<T>() {
        current = match current.reflect_mut() {
            ReflectMut::Pointer(pointer) => pointer.target_mut().ok_or_else(|| error.clone())?,
            _ => return Err(error),
        };
    }
    current.downcast_mut::<T>().ok_or(error)
}

// -----------------------------------------------------------------------------
// Implementation for reflect types

macro_rules! impl_reflect_path_access {
    () => {
        #[inline(always)]
        fn access<'a, 'p>(
            &'a self,
            path: impl AccessPath<'p>,
        ) -> Result<&'a dyn Reflect, PathAccessError> {
            <dyn Reflect as ReflectPathAccess>::access(self, path)
        }

        #[inline(always)]
        fn access_mut<'a, 'p>(
            &'a mut self,
            path: impl AccessPath<'p>,
        ) -> Result<&'a mut dyn Reflect, PathAccessError> {
            <dyn Reflect as ReflectPathAccess>::access_mut(self, path)
        }

        #[inline(always)]
        fn access_as<'a, 'p, T: Reflect + TypePath>(
            &'a self,
            path: impl AccessPath<'p>,
        ) -> Result<&'a T, PathAccessError> {
            <dyn Reflect as ReflectPathAccess>::access_as::<T>(self, path)
        }

        #[inline(always)]
        fn access_mut_as<'a, 'p, T: Reflect + TypePath>(
            &'a mut self,
            path: impl AccessPath<'p>,
        ) -> Result<&'a mut T, PathAccessError> {
            <dyn Reflect as ReflectPathAccess>::access_mut_as::<T>(self, path)
        }

        #[inline(always)]
        fn assign<'p>(
            &mut self,
            path: impl AccessPath<'p>,
            value: Box<dyn Reflect>,
        ) -> Result<(), PathAccessError> {
            <dyn Reflect as ReflectPathAccess>::assign(self, path, value)
        }

        #[inline(always)]
        fn assign_value<'p, T: Reflect>(
            &mut self,
            path: impl AccessPath<'p>,
            value: T,
        ) -> Result<(), PathAccessError> {
            <dyn Reflect as ReflectPathAccess>::assign(self, path, Box::new(value))
        }
    };
    (dyn $name:ident) => {
        impl ReflectPathAccess for dyn $name {
            impl_reflect_path_access!();
        }
    };
    (T: $name:ident) => {
        impl<P: Sized + $name> ReflectPathAccess for P {
            impl_reflect_path_access!();
        }
    };
}

impl_reflect_path_access!(T: Reflect);

impl_reflect_path_access!(dyn Struct);
impl_reflect_path_access!(dyn List);
impl_reflect_path_access!(dyn Array);
impl_reflect_path_access!(dyn Pointer);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::ReflectPathAccess;
    use crate::Reflect;
    use crate::access::PathAccessError;
    use crate::access::fixtures::{A, B, C};
    use crate::info::TypePath;
    use crate::ops::Struct;

    #[test]
    fn typed_access_follows_pointers() {
        let mut a = A::new(0, "");
        a.instance_b = Some(Box::new(B::new("inner")));

        assert!(a.access_as::<Option<Box<B>>>("instanceB").is_ok());
        assert!(a.access_as::<Box<B>>("instanceB").is_ok());
        assert_eq!(a.access_as::<B>("instanceB").unwrap().text, "inner");

        a.access_mut_as::<B>("instanceB").unwrap().text.push('!');
        assert_eq!(a.instance_b.as_ref().unwrap().text, "inner!");
    }

    #[test]
    fn invalid_downcast_names_both_types() {
        let mut a = A::new(0, "");

        let err = a.access_as::<u8>("number").unwrap_err();
        assert_eq!(
            err,
            PathAccessError::InvalidDowncast {
                expected: "u8",
                actual: "i32",
            }
        );

        let err = a.access_mut_as::<B>("instanceB").err().unwrap();
        assert_eq!(
            err,
            PathAccessError::InvalidDowncast {
                expected: <B as TypePath>::type_path(),
                actual: <Option<Box<B>> as TypePath>::type_path(),
            }
        );
    }

    #[test]
    fn assign_value_boxes_the_value() {
        let mut c = C::new();

        c.assign_value("arrayOfA[1].b.text", String::from("nice")).unwrap();
        assert_eq!(c.array_of_a[1].b.text, "nice");

        c.assign("numbers[0]", Box::new(123_i32)).unwrap();
        assert_eq!(*c.access_as::<i32>("numbers[0]").unwrap(), 123);

        assert!(c.assign_value("numbers[0]", 1_u8).unwrap_err().is_assign());
    }

    #[test]
    fn kind_trait_objects_have_access() {
        let mut a = A::new(3, "text");

        let value: &mut dyn Struct = &mut a;
        assert_eq!(*value.access_as::<i32>("number").unwrap(), 3);
        value.assign_value("number", 4_i32).unwrap();

        let value: &dyn Reflect = &a;
        assert_eq!(*value.access_as::<i32>("number").unwrap(), 4);

        let mut list = alloc::vec![1_u8, 2];
        let list_ref: &mut dyn crate::ops::List = &mut list;
        *list_ref.access_mut_as::<u8>("[1]").unwrap() = 5;
        assert_eq!(list, [1, 5]);
    }
}
