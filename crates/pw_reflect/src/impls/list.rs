use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{self, GenericTypeInfoCell};
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_list {
    ($ty:ident, $module:literal {
        get: $get:expr,
        get_mut: $get_mut:expr,
        push: $push:expr,
        pop: $pop:expr,
        insert: $insert:expr,
        remove: $remove:expr,
    }) => {
        impls::impl_generic_type_path!($ty, $module);

        impl<T: Reflect + Typed> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
                impls::list_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                impls::list_debug(self, f)
            }
        }

        impl<T: Reflect + Typed> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                $get(self, index).map(Reflect::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                $get_mut(self, index).map(Reflect::as_reflect_mut)
            }

            fn insert(
                &mut self,
                index: usize,
                element: Box<dyn Reflect>,
            ) -> Result<(), Box<dyn Reflect>> {
                if index > <$ty<T>>::len(self) {
                    return Err(element);
                }
                $insert(self, index, element.take::<T>()?);
                Ok(())
            }

            fn remove(&mut self, index: usize) -> Option<Box<dyn Reflect>> {
                let remove = $remove;
                remove(self, index).map(Reflect::into_boxed_reflect)
            }

            fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                $push(self, value.take::<T>()?);
                Ok(())
            }

            #[inline]
            fn pop(&mut self) -> Option<Box<dyn Reflect>> {
                $pop(self).map(Reflect::into_boxed_reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            #[inline]
            fn iter(&self) -> ListItemIter<'_> {
                ListItemIter::new(self)
            }
        }
    };
}

impl_reflect_list!(Vec, "alloc::vec" {
    get: <[T]>::get,
    get_mut: <[T]>::get_mut,
    push: Vec::push,
    pop: Vec::pop,
    insert: Vec::insert,
    remove: |list: &mut Vec<T>, index: usize| (index < list.len()).then(|| list.remove(index)),
});

impl_reflect_list!(VecDeque, "alloc::collections" {
    get: VecDeque::get,
    get_mut: VecDeque::get_mut,
    push: VecDeque::push_back,
    pop: VecDeque::pop_back,
    insert: VecDeque::insert,
    remove: VecDeque::remove,
});

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::List;

    #[test]
    fn vec_type_info() {
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<VecDeque<u8>>::type_name(), "VecDeque<u8>");

        let info = <Vec<String>>::type_info().as_list().unwrap();
        assert!(info.item_is::<String>());
    }

    #[test]
    fn insert_and_remove_checks_bounds() {
        let mut list: VecDeque<i32> = VecDeque::from([1, 2]);

        assert!(List::insert(&mut list, 3, Box::new(9_i32)).is_err());
        List::insert(&mut list, 2, Box::new(3_i32)).unwrap();
        assert_eq!(list, [1, 2, 3]);

        assert!(List::remove(&mut list, 3).is_none());
        let removed = List::remove(&mut list, 0).unwrap();
        assert_eq!(removed.take::<i32>().unwrap(), 1);
    }

    #[test]
    fn push_rejects_other_types() {
        let mut list: Vec<i32> = vec![];
        let rejected = List::push(&mut list, Box::new(1_u32)).unwrap_err();
        assert!(rejected.is::<u32>());
        assert!(list.is_empty());
    }

    #[test]
    fn partial_eq_compares_elements() {
        let list = vec![3_u8, 4];
        assert_eq!(list.as_reflect().reflect_partial_eq(&vec![3_u8, 4]), Some(true));
        assert_eq!(list.as_reflect().reflect_partial_eq(&vec![3_u8]), Some(false));
        assert_eq!(list.as_reflect().reflect_partial_eq(&[3_u8, 4]), Some(false));
    }
}
