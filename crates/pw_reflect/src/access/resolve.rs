//! The segment walk shared by every access entry point.
//!
//! Each step follows pointers on the cursor first, then applies one
//! segment. Reads and the first `n - 1` steps of a write report failures
//! as [`PathAccessError::Lookup`], the terminal write of `set` as
//! [`PathAccessError::Assign`].

use alloc::boxed::Box;

use crate::Reflect;
use crate::access::{AccessError, AccessErrorKind, AccessMode, AccessPath, InvalidPathError};
use crate::access::{MemberLookup, PathAccessError, Segment};
use crate::info::TypeInfo;
use crate::ops::{ApplyError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Entry points

pub(crate) fn get<'r, 'p, L: MemberLookup + ?Sized>(
    lookup: &L,
    root: &'r dyn Reflect,
    path: impl AccessPath<'p>,
) -> Result<&'r dyn Reflect, PathAccessError> {
    let mut cursor = root;
    for (position, segment) in path.into_segments()?.enumerate() {
        cursor = match read(lookup, cursor, &segment) {
            Ok(value) => value,
            Err(kind) => return Err(lookup_failed(kind, segment, position)),
        };
        trace_segment(position, &segment, cursor);
    }
    Ok(cursor)
}

pub(crate) fn get_mut<'r, 'p, L: MemberLookup + ?Sized>(
    lookup: &L,
    root: &'r mut dyn Reflect,
    path: impl AccessPath<'p>,
) -> Result<&'r mut dyn Reflect, PathAccessError> {
    let mut cursor = root;
    for (position, segment) in path.into_segments()?.enumerate() {
        cursor = match read_mut(lookup, cursor, &segment) {
            Ok(value) => value,
            Err(kind) => return Err(lookup_failed(kind, segment, position)),
        };
        trace_segment(position, &segment, cursor);
    }
    Ok(cursor)
}

pub(crate) fn set<'p, L: MemberLookup + ?Sized>(
    lookup: &L,
    root: &mut dyn Reflect,
    path: impl AccessPath<'p>,
    value: Box<dyn Reflect>,
) -> Result<(), PathAccessError> {
    let mut segments = path.into_segments()?.enumerate().peekable();
    let mut parent = root;

    while let Some((position, segment)) = segments.next() {
        if segments.peek().is_some() {
            parent = match read_mut(lookup, parent, &segment) {
                Ok(value) => value,
                Err(kind) => return Err(lookup_failed(kind, segment, position)),
            };
            trace_segment(position, &segment, parent);
            continue;
        }

        let parent = match follow_mut(parent) {
            Ok(value) => value,
            Err(kind) => return Err(lookup_failed(kind, segment, position)),
        };
        return match write(lookup, parent, &segment, value) {
            Ok(()) => Ok(()),
            Err(kind) => Err(assign_failed(kind, segment, position)),
        };
    }

    // Only reachable through an `AccessPath` impl yielding no segments.
    Err(InvalidPathError::new("").into())
}

// -----------------------------------------------------------------------------
// Single steps

fn read<'r, L: MemberLookup + ?Sized>(
    lookup: &L,
    cursor: &'r dyn Reflect,
    segment: &Segment<'_>,
) -> Result<&'r dyn Reflect, AccessErrorKind> {
    let cursor = follow(cursor)?;
    match segment {
        Segment::Index(index) => element(cursor, *index),
        Segment::Member(name) => {
            let index = find_member(lookup, cursor, name, AccessMode::Read)?;
            let member = match cursor.reflect_ref() {
                ReflectRef::Struct(value) => value.member_at(index),
                _ => None,
            };
            member.ok_or_else(|| member_not_found(cursor, name, AccessMode::Read))
        }
    }
}

fn read_mut<'r, L: MemberLookup + ?Sized>(
    lookup: &L,
    cursor: &'r mut dyn Reflect,
    segment: &Segment<'_>,
) -> Result<&'r mut dyn Reflect, AccessErrorKind> {
    let cursor = follow_mut(cursor)?;
    match segment {
        Segment::Index(index) => element_mut(cursor, *index),
        Segment::Member(name) => {
            let index = find_member(lookup, cursor, name, AccessMode::Read)?;
            member_mut(cursor, index, name, AccessMode::Read)
        }
    }
}

fn write<L: MemberLookup + ?Sized>(
    lookup: &L,
    parent: &mut dyn Reflect,
    segment: &Segment<'_>,
    value: Box<dyn Reflect>,
) -> Result<(), AccessErrorKind> {
    let slot = match segment {
        Segment::Index(index) => element_mut(parent, *index)?,
        Segment::Member(name) => {
            let index = find_member(lookup, parent, name, AccessMode::Write)?;
            member_mut(parent, index, name, AccessMode::Write)?
        }
    };

    let to_type = slot.reflect_type_path();
    slot.set(value).map_err(|rejected| {
        AccessErrorKind::Rejected(ApplyError::MismatchedTypes {
            from_type: (*rejected).reflect_type_path().into(),
            to_type: to_type.into(),
        })
    })
}

// -----------------------------------------------------------------------------
// Pointers

fn follow(mut cursor: &dyn Reflect) -> Result<&dyn Reflect, AccessErrorKind> {
    loop {
        match cursor.reflect_ref() {
            ReflectRef::Pointer(pointer) => {
                cursor = pointer.target().ok_or(AccessErrorKind::NullIntermediate)?;
            }
            _ => return Ok(cursor),
        }
    }
}

fn follow_mut(mut cursor: &mut dyn Reflect) -> Result<&mut dyn Reflect, AccessErrorKind> {
    loop {
        match cursor.reflect_mut() {
            ReflectMut::Pointer(pointer) => {
                cursor = pointer.target_mut().ok_or(AccessErrorKind::NullIntermediate)?;
            }
            other => return Ok(other.into_reflect()),
        }
    }
}

// -----------------------------------------------------------------------------
// Indexing

fn element(cursor: &dyn Reflect, index: usize) -> Result<&dyn Reflect, AccessErrorKind> {
    let (element, len) = match cursor.reflect_ref() {
        ReflectRef::List(list) => (list.get(index), list.len()),
        ReflectRef::Array(array) => (array.get(index), array.len()),
        _ => return Err(not_indexable(cursor)),
    };
    element.ok_or_else(|| out_of_range(cursor, index, len))
}

fn element_mut(cursor: &mut dyn Reflect, index: usize) -> Result<&mut dyn Reflect, AccessErrorKind> {
    let type_path = cursor.reflect_type_path();
    let (element, len) = match cursor.reflect_mut() {
        ReflectMut::List(list) => {
            let len = list.len();
            (list.get_mut(index), len)
        }
        ReflectMut::Array(array) => {
            let len = array.len();
            (array.get_mut(index), len)
        }
        other => {
            return Err(AccessErrorKind::NotIndexable {
                kind: other.kind(),
                type_path,
            });
        }
    };
    element.ok_or(AccessErrorKind::IndexOutOfRange {
        index,
        len,
        type_path,
    })
}

#[cold]
fn not_indexable(cursor: &dyn Reflect) -> AccessErrorKind {
    AccessErrorKind::NotIndexable {
        kind: cursor.reflect_kind(),
        type_path: cursor.reflect_type_path(),
    }
}

#[cold]
fn out_of_range(cursor: &dyn Reflect, index: usize, len: usize) -> AccessErrorKind {
    AccessErrorKind::IndexOutOfRange {
        index,
        len,
        type_path: cursor.reflect_type_path(),
    }
}

// -----------------------------------------------------------------------------
// Members

/// Returns the slot index of member `name` usable in `mode`.
fn find_member<L: MemberLookup + ?Sized>(
    lookup: &L,
    cursor: &dyn Reflect,
    name: &str,
    mode: AccessMode,
) -> Result<usize, AccessErrorKind> {
    let found = match cursor.reflect_type_info() {
        TypeInfo::Struct(info) => lookup.find_member(info, name),
        _ => None,
    };
    match found {
        Some(member) if mode.allows(member.access()) => Ok(member.index()),
        _ => Err(member_not_found(cursor, name, mode)),
    }
}

fn member_mut<'r>(
    cursor: &'r mut dyn Reflect,
    index: usize,
    name: &str,
    mode: AccessMode,
) -> Result<&'r mut dyn Reflect, AccessErrorKind> {
    let type_path = cursor.reflect_type_path();
    let member = match cursor.reflect_mut() {
        ReflectMut::Struct(value) => value.member_at_mut(index),
        _ => None,
    };
    member.ok_or_else(|| AccessErrorKind::MemberNotFound {
        name: name.into(),
        type_path,
        mode,
    })
}

#[cold]
fn member_not_found(cursor: &dyn Reflect, name: &str, mode: AccessMode) -> AccessErrorKind {
    AccessErrorKind::MemberNotFound {
        name: name.into(),
        type_path: cursor.reflect_type_path(),
        mode,
    }
}

// -----------------------------------------------------------------------------
// Logging

#[cold]
fn lookup_failed(kind: AccessErrorKind, segment: Segment<'_>, position: usize) -> PathAccessError {
    let error = PathAccessError::Lookup(AccessError::new(kind, segment, position));
    log::debug!("{error}");
    error
}

#[cold]
fn assign_failed(kind: AccessErrorKind, segment: Segment<'_>, position: usize) -> PathAccessError {
    let error = PathAccessError::Assign(AccessError::new(kind, segment, position));
    log::debug!("{error}");
    error
}

#[inline(always)]
fn trace_segment(position: usize, segment: &Segment<'_>, value: &dyn Reflect) {
    #[cfg(all(debug_assertions, feature = "debug"))]
    log::trace!(
        "resolved `{segment}` at position {position} to `{}`",
        value.reflect_type_path()
    );
    #[cfg(not(all(debug_assertions, feature = "debug")))]
    let _ = (position, segment, value);
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::access::fixtures::{A, B, C};
    use crate::access::{AccessErrorKind, AccessMode, PathAccessError, Segment};
    use crate::access::{get, get_mut, set};
    use crate::info::{ReflectKind, TypePath};
    use crate::ops::ApplyError;

    fn lookup_kind(err: PathAccessError) -> (AccessErrorKind, Segment<'static>, usize) {
        match err {
            PathAccessError::Lookup(err) => (err.kind().clone(), err.segment().clone(), err.position()),
            other => panic!("expected a lookup error, got {other:?}"),
        }
    }

    fn assign_kind(err: PathAccessError) -> (AccessErrorKind, Segment<'static>, usize) {
        match err {
            PathAccessError::Assign(err) => (err.kind().clone(), err.segment().clone(), err.position()),
            other => panic!("expected an assign error, got {other:?}"),
        }
    }

    #[test]
    fn set_then_get_nested_member() {
        let mut a = A::new(2, "hello");

        set(&mut a, "b.text", Box::new(String::from("nice"))).unwrap();

        let text = get(&a, "b.text").unwrap();
        assert_eq!(text.downcast_ref::<String>().unwrap(), "nice");
        assert_eq!(a.b.text, "nice");
        assert_eq!(a.number, 2);
    }

    #[test]
    fn set_then_get_list_element() {
        let mut c = C::new();

        set(&mut c, "numbers[0]", Box::new(123_i32)).unwrap();

        assert_eq!(get(&c, "numbers[0]").unwrap().downcast_ref::<i32>(), Some(&123));
        assert_eq!(c.numbers, [123]);
    }

    #[test]
    fn mixed_separators_resolve_alike() {
        let c = C::new();

        let first = get(&c, "arrayOfA[0].number").unwrap();
        assert_eq!(first.downcast_ref::<i32>(), Some(&1));

        let text = get(&c, "arrayOfA.1.b.text").unwrap();
        assert_eq!(text.downcast_ref::<String>().unwrap(), "second");

        let cell = get(&c, "grid[1][0]").unwrap();
        assert_eq!(cell.downcast_ref::<u8>(), Some(&3));
    }

    #[test]
    fn round_trip_for_each_slot_kind() {
        let cases: [(&str, fn() -> Box<dyn Reflect>); 8] = [
            ("arrayOfA[0].number", || Box::new(-4_i32)),
            ("arrayOfA[0].b.text", || Box::new(String::from("text"))),
            ("arrayOfA.1.number", || Box::new(10_i32)),
            ("grid[0][1]", || Box::new(9_u8)),
            ("numbers", || Box::new(Vec::from([5_i32, 6]))),
            ("arrayOfA[0].instanceB", || Box::new(Some(Box::new(B::new("some"))))),
            ("arrayOfA[1].instanceB", || Box::new(None::<Box<B>>)),
            ("arrayOfA[1].b.instanceA", || Box::new(Some(Box::new(A::new(3, "a"))))),
        ];

        for (path, value) in cases {
            let mut c = C::new();

            set(&mut c, path, value()).unwrap();
            let read = get(&c, path).unwrap();
            assert_eq!(read.reflect_partial_eq(&*value()), Some(true), "path `{path}`");
        }
    }

    #[test]
    fn index_out_of_range() {
        let c = C::new();

        let (kind, segment, position) = lookup_kind(get(&c, "numbers[5]").unwrap_err());
        assert_eq!(
            kind,
            AccessErrorKind::IndexOutOfRange {
                index: 5,
                len: 1,
                type_path: <Vec<i32> as TypePath>::type_path(),
            }
        );
        assert_eq!(segment, Segment::Index(5));
        assert_eq!(position, 1);

        let (kind, ..) = lookup_kind(get(&c, "grid[2][0]").unwrap_err());
        assert!(matches!(kind, AccessErrorKind::IndexOutOfRange { index: 2, len: 2, .. }));
    }

    #[test]
    fn null_intermediate_names_the_next_segment() {
        let a = A::new(0, "");

        let (kind, segment, position) = lookup_kind(get(&a, "instanceB.text").unwrap_err());
        assert_eq!(kind, AccessErrorKind::NullIntermediate);
        assert_eq!(segment, Segment::from("text"));
        assert_eq!(position, 1);

        // The pointer itself is a valid target.
        let value = get(&a, "instanceB").unwrap();
        assert!(value.is::<Option<Box<B>>>());
    }

    #[test]
    fn unknown_member() {
        let a = A::new(0, "");

        let (kind, segment, position) = lookup_kind(get(&a, "doesNotExist").unwrap_err());
        assert_eq!(
            kind,
            AccessErrorKind::MemberNotFound {
                name: "doesNotExist".into(),
                type_path: <A as TypePath>::type_path(),
                mode: AccessMode::Read,
            }
        );
        assert_eq!(segment, Segment::from("doesNotExist"));
        assert_eq!(position, 0);

        // Skipped fields are not members.
        assert!(get(&a, "cache").is_err());
        assert_eq!(a.cache, 0);

        // Lists have no named members.
        let c = C::new();
        let (kind, ..) = lookup_kind(get(&c, "numbers.len").unwrap_err());
        assert!(matches!(kind, AccessErrorKind::MemberNotFound { mode: AccessMode::Read, .. }));
    }

    #[test]
    fn index_on_non_indexable() {
        let a = A::new(0, "");

        let (kind, _, position) = lookup_kind(get(&a, "number[0]").unwrap_err());
        assert_eq!(
            kind,
            AccessErrorKind::NotIndexable {
                kind: ReflectKind::Opaque,
                type_path: "i32",
            }
        );
        assert_eq!(position, 1);

        let (kind, ..) = lookup_kind(get(&a, "[0]").unwrap_err());
        assert!(matches!(kind, AccessErrorKind::NotIndexable { kind: ReflectKind::Struct, .. }));
    }

    #[test]
    fn pointers_are_followed() {
        let mut a = A::new(0, "");
        a.instance_b = Some(Box::new(B::new("inner")));

        let text = get(&a, "instanceB.text").unwrap();
        assert_eq!(text.downcast_ref::<String>().unwrap(), "inner");

        set(&mut a, "instanceB.text", Box::new(String::from("changed"))).unwrap();
        assert_eq!(a.instance_b.as_ref().unwrap().text, "changed");

        let mut c = C::new();
        c.array_of_a[0].b.instance_a = Some(Box::new(A::new(42, "deep")));
        let deep = get(&c, "arrayOfA[0].b.instanceA.b.text").unwrap();
        assert_eq!(deep.downcast_ref::<String>().unwrap(), "deep");
    }

    #[test]
    fn pointer_slots_take_their_own_type() {
        let mut a = A::new(0, "");

        set(&mut a, "instanceB", Box::new(Some(Box::new(B::new("boxed"))))).unwrap();
        assert_eq!(a.instance_b.as_ref().unwrap().text, "boxed");

        let read = get(&a, "instanceB").unwrap();
        let read = read.downcast_ref::<Option<Box<B>>>().unwrap();
        assert_eq!(read.as_ref().unwrap().text, "boxed");

        set(&mut a, "instanceB", Box::new(None::<Box<B>>)).unwrap();
        assert!(a.instance_b.is_none());
    }

    #[test]
    fn pointer_slots_reject_their_target() {
        let mut a = A::new(0, "");
        a.instance_b = Some(Box::new(B::new("kept")));

        for value in [
            Box::new(B::new("bare")) as Box<dyn Reflect>,
            Box::new(Box::new(B::new("boxed"))),
        ] {
            let (kind, segment, position) = assign_kind(set(&mut a, "instanceB", value).unwrap_err());
            assert!(matches!(
                kind,
                AccessErrorKind::Rejected(ApplyError::MismatchedTypes { .. })
            ));
            assert_eq!(segment, Segment::from("instanceB"));
            assert_eq!(position, 0);
        }

        let read = get(&a, "instanceB").unwrap();
        assert!(read.downcast_ref::<B>().is_none());
        assert_eq!(a.instance_b.as_ref().unwrap().text, "kept");
    }

    #[test]
    fn set_through_null_is_a_lookup_failure() {
        let mut a = A::new(0, "");

        let (kind, _, position) =
            lookup_kind(set(&mut a, "instanceB.text", Box::new(String::new())).unwrap_err());
        assert_eq!(kind, AccessErrorKind::NullIntermediate);
        assert_eq!(position, 1);
        assert!(a.instance_b.is_none());
    }

    #[test]
    fn read_only_and_write_only_members() {
        let mut a = A::new(0, "");

        assert_eq!(get(&a, "id").unwrap().downcast_ref::<u32>(), Some(&7));
        let (kind, ..) = assign_kind(set(&mut a, "id", Box::new(9_u32)).unwrap_err());
        assert!(matches!(kind, AccessErrorKind::MemberNotFound { mode: AccessMode::Write, .. }));
        assert_eq!(a.id, 7);

        set(&mut a, "secret", Box::new(String::from("new"))).unwrap();
        assert_eq!(a.secret, "new");
        let (kind, ..) = lookup_kind(get(&a, "secret").unwrap_err());
        assert!(matches!(kind, AccessErrorKind::MemberNotFound { mode: AccessMode::Read, .. }));
        assert!(get_mut(&mut a, "secret").is_err());
    }

    #[test]
    fn rejected_value_leaves_target_untouched() {
        let mut a = A::new(5, "");

        let (kind, segment, position) =
            assign_kind(set(&mut a, "number", Box::new(1.5_f32)).unwrap_err());
        assert_eq!(
            kind,
            AccessErrorKind::Rejected(ApplyError::MismatchedTypes {
                from_type: "f32".into(),
                to_type: "i32".into(),
            })
        );
        assert_eq!(segment, Segment::from("number"));
        assert_eq!(position, 0);
        assert_eq!(a.number, 5);
    }

    #[test]
    fn terminal_failures_are_assign_failures() {
        let mut c = C::new();

        let (kind, ..) = assign_kind(set(&mut c, "numbers[3]", Box::new(1_i32)).unwrap_err());
        assert!(matches!(kind, AccessErrorKind::IndexOutOfRange { index: 3, len: 1, .. }));

        let (kind, ..) = assign_kind(set(&mut c, "numbers.first", Box::new(1_i32)).unwrap_err());
        assert!(matches!(kind, AccessErrorKind::MemberNotFound { mode: AccessMode::Write, .. }));

        let (kind, ..) = assign_kind(set(&mut c, "numbers[0][0]", Box::new(1_i32)).unwrap_err());
        assert!(matches!(kind, AccessErrorKind::NotIndexable { kind: ReflectKind::Opaque, .. }));

        let (kind, _, position) =
            lookup_kind(set(&mut c, "missing[0]", Box::new(1_i32)).unwrap_err());
        assert!(matches!(kind, AccessErrorKind::MemberNotFound { .. }));
        assert_eq!(position, 0);

        assert_eq!(c.numbers, [0]);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut c = C::new();

        let value = get_mut(&mut c, "grid[0][0]").unwrap();
        *value.downcast_mut::<u8>().unwrap() = 100;
        assert_eq!(c.grid[0][0], 100);

        // Read-only members can be traversed.
        let mut a = A::new(0, "");
        assert!(get_mut(&mut a, "id").is_ok());
    }

    #[test]
    fn empty_path_is_invalid() {
        let mut a = A::new(0, "");

        assert!(matches!(get(&a, ""), Err(PathAccessError::InvalidPath(_))));
        assert!(matches!(get_mut(&mut a, ".."), Err(PathAccessError::InvalidPath(_))));
        assert!(matches!(
            set(&mut a, "[]", Box::new(0_i32)),
            Err(PathAccessError::InvalidPath(_))
        ));
    }

    #[test]
    fn dyn_root_is_accepted() {
        let boxed: Box<dyn Reflect> = Box::new(C::new());
        let value = get(&*boxed, "numbers[0]").unwrap();
        assert_eq!(value.downcast_ref::<i32>(), Some(&0));
    }
}
