//! Read and write reflected values by path.
//!
//! A path is a string such as `"items[2].name"`, split into
//! [`Segment`]s: named members of structs and positions in lists or arrays.
//! `.`, `[` and `]` are all separators and may be mixed, empty pieces are
//! ignored, and an all-digit piece is an index. `"a.0"` and `"a[0]"` are
//! the same path.
//!
//! - [`get`], [`get_mut`] and [`set`]: one-shot access on a `dyn Reflect`.
//! - [`ReflectPathAccess`]: the same operations as methods, plus typed
//!   variants.
//! - [`Path`]: a parsed, reusable path.
//! - [`MemberCache`]: memoizes member lookups for repeated accesses.
//!
//! # Resolution
//!
//! Starting at the root, each segment is applied to the current value:
//!
//! 1. Pointers (`Option<T>`, `Box<T>`) are followed to their target. A
//!    null pointer fails with [`AccessErrorKind::NullIntermediate`].
//! 2. An index needs a list or array ([`AccessErrorKind::NotIndexable`])
//!    and must be in range ([`AccessErrorKind::IndexOutOfRange`]).
//! 3. A member needs a struct with a readable member of that name
//!    ([`AccessErrorKind::MemberNotFound`]).
//!
//! No pointer is followed after the last segment. [`set`] walks all but
//! the last segment this way, then writes the last one, which needs a
//! writable member or an in-range index.
//!
//! Failures before the target is reached are [`PathAccessError::Lookup`],
//! failures of the final write are [`PathAccessError::Assign`]. A failed
//! call never modifies the value.
//!
//! # Examples
//!
//! ```
//! use pw_reflect::{access, derive::Reflect};
//!
//! #[derive(Reflect)]
//! struct C {
//!     numbers: Vec<i32>,
//! }
//!
//! let mut c = C { numbers: vec![0] };
//!
//! access::set(&mut c, "numbers[0]", Box::new(123_i32)).unwrap();
//!
//! let value = access::get(&c, "numbers[0]").unwrap();
//! assert_eq!(value.downcast_ref::<i32>(), Some(&123));
//!
//! let err = access::get(&c, "numbers[5]").unwrap_err();
//! assert!(err.is_lookup());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod lookup;
mod path;
mod path_access;
mod resolve;
mod segment;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use error::{AccessError, AccessErrorKind, AccessMode, InvalidPathError, PathAccessError};
pub use lookup::{DirectLookup, MemberCache, MemberLookup};
pub use path::{AccessPath, Path};
pub use path_access::ReflectPathAccess;
pub use segment::{Segment, SegmentIter};

use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Functions

/// Parses `path` into a reusable [`Path`].
///
/// Fails only when the path contains no segments.
///
/// ```
/// use pw_reflect::access::{self, Segment};
///
/// let path = access::parse("a.b[2]").unwrap();
/// assert_eq!(path.segments(), [
///     Segment::from("a"),
///     Segment::from("b"),
///     Segment::Index(2),
/// ]);
///
/// assert!(access::parse(".[]").is_err());
/// ```
#[inline]
pub fn parse(path: &str) -> Result<Path, InvalidPathError> {
    Path::parse(path)
}

/// Returns a reference to the value at `path`.
pub fn get<'r, 'p>(
    root: &'r dyn Reflect,
    path: impl AccessPath<'p>,
) -> Result<&'r dyn Reflect, PathAccessError> {
    resolve::get(&DirectLookup, root, path)
}

/// Returns a mutable reference to the value at `path`.
///
/// Resolution is the same as [`get`], the last member must be readable.
pub fn get_mut<'r, 'p>(
    root: &'r mut dyn Reflect,
    path: impl AccessPath<'p>,
) -> Result<&'r mut dyn Reflect, PathAccessError> {
    resolve::get_mut(&DirectLookup, root, path)
}

/// Replaces the value at `path` with `value`.
///
/// `value` must have the exact type of the target, an `Option<u8>` slot
/// takes an `Option<u8>` and rejects a bare `u8`.
///
/// ```
/// use pw_reflect::{access, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Foo {
///     count: Option<u8>,
/// }
///
/// let mut foo = Foo { count: None };
/// access::set(&mut foo, "count", Box::new(Some(3_u8))).unwrap();
/// assert_eq!(foo.count, Some(3));
///
/// let err = access::set(&mut foo, "count", Box::new(4_u8)).unwrap_err();
/// assert!(err.is_assign());
/// assert_eq!(foo.count, Some(3));
/// ```
pub fn set<'p>(
    root: &mut dyn Reflect,
    path: impl AccessPath<'p>,
    value: Box<dyn Reflect>,
) -> Result<(), PathAccessError> {
    resolve::set(&DirectLookup, root, path, value)
}
