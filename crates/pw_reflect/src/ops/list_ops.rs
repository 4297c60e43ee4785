use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A reflected, variable length, ordered sequence (e.g. `Vec<T>`).
///
/// Methods taking a `Box<dyn Reflect>` return it back when the element
/// type does not match.
///
/// ```
/// use pw_reflect::{Reflect, ops::List};
///
/// let mut list: Vec<u8> = vec![1, 2];
///
/// List::push(&mut list, Box::new(3_u8)).unwrap();
/// assert!(List::push(&mut list, Box::new("4")).is_err());
///
/// assert_eq!(List::len(&list), 3);
/// assert!(List::get(&list, 3).is_none());
/// ```
pub trait List: Reflect {
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Inserts at `index`, or returns the value if `index > len` or the
    /// type does not match.
    fn insert(&mut self, index: usize, element: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn remove(&mut self, index: usize) -> Option<Box<dyn Reflect>>;

    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn pop(&mut self) -> Option<Box<dyn Reflect>>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> ListItemIter<'_>;
}

impl dyn List {
    #[inline]
    pub fn get_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn get_mut_as<T: Reflect>(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// List Item Iterator

pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for ListItemIter<'a> {}
