use alloc::boxed::Box;
use core::fmt;

use thiserror::Error;

use crate::access::Segment;
use crate::info::{MemberAccess, ReflectKind};
use crate::ops::ApplyError;

// -----------------------------------------------------------------------------
// InvalidPathError

/// The path string contains no segments, e.g. `""`, `"."` or `"[]"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("access path `{path}` contains no segments")]
pub struct InvalidPathError {
    pub path: Box<str>,
}

impl InvalidPathError {
    #[inline]
    pub fn new(path: &str) -> Self {
        Self { path: path.into() }
    }
}

// -----------------------------------------------------------------------------
// AccessMode

/// Whether a member is looked up to be read or to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Read,
    Write,
}

impl AccessMode {
    /// Returns `true` if a member with `access` can be used in this mode.
    #[inline]
    pub const fn allows(self, access: MemberAccess) -> bool {
        match self {
            Self::Read => access.is_readable(),
            Self::Write => access.is_writable(),
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.pad("readable"),
            Self::Write => f.pad("writable"),
        }
    }
}

// -----------------------------------------------------------------------------
// AccessErrorKind

/// The reason a single segment could not be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessErrorKind {
    /// A pointer without target was reached before the path ended.
    #[error("reached a null value")]
    NullIntermediate,
    /// An index segment was applied to a value that is not a list or array.
    #[error("`{type_path}` is a {kind} and cannot be indexed")]
    NotIndexable {
        kind: ReflectKind,
        type_path: &'static str,
    },
    #[error("index {index} is out of range for `{type_path}` of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        type_path: &'static str,
    },
    /// No member of that name exists, or it cannot be used in `mode`.
    #[error("`{type_path}` has no {mode} member `{name}`")]
    MemberNotFound {
        name: Box<str>,
        type_path: &'static str,
        mode: AccessMode,
    },
    /// The target slot refused the assigned value.
    #[error("value rejected: {0}")]
    Rejected(ApplyError),
}

// -----------------------------------------------------------------------------
// AccessError

/// An [`AccessErrorKind`] with the segment it occurred at.
///
/// `position` is the 0-based index of `segment` in the path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot apply `{segment}` at position {position}: {kind}")]
pub struct AccessError {
    kind: AccessErrorKind,
    segment: Segment<'static>,
    position: usize,
}

impl AccessError {
    #[inline]
    pub fn new(kind: AccessErrorKind, segment: Segment<'_>, position: usize) -> Self {
        Self {
            kind,
            segment: segment.into_owned(),
            position,
        }
    }

    #[inline]
    pub fn kind(&self) -> &AccessErrorKind {
        &self.kind
    }

    #[inline]
    pub fn into_kind(self) -> AccessErrorKind {
        self.kind
    }

    #[inline]
    pub fn segment(&self) -> &Segment<'static> {
        &self.segment
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

// -----------------------------------------------------------------------------
// PathAccessError

/// An error returned from a failed path access.
///
/// `Lookup` and `Assign` tell whether the target was never reached or
/// was reached but could not be written.
///
/// ```
/// use pw_reflect::access::{AccessErrorKind, PathAccessError, ReflectPathAccess};
///
/// let mut list = vec![1_u8];
///
/// let err = list.assign("[4]", Box::new(2_u8)).unwrap_err();
/// assert!(err.is_assign());
/// assert!(matches!(
///     err.access_error().unwrap().kind(),
///     AccessErrorKind::IndexOutOfRange { index: 4, len: 1, .. }
/// ));
///
/// let err = list.access("[4]").unwrap_err();
/// assert!(err.is_lookup());
///
/// let err = list.access("..").unwrap_err();
/// assert!(matches!(err, PathAccessError::InvalidPath(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathAccessError {
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),
    /// Traversal failed before the target position was reached.
    #[error("lookup failed: {0}")]
    Lookup(AccessError),
    /// The target position was reached but could not be written.
    #[error("assignment failed: {0}")]
    Assign(AccessError),
    #[error("cannot downcast `{actual}` to `{expected}`")]
    InvalidDowncast {
        expected: &'static str,
        actual: &'static str,
    },
}

impl PathAccessError {
    /// Returns the segment error of `Lookup` and `Assign`.
    #[inline]
    pub fn access_error(&self) -> Option<&AccessError> {
        match self {
            Self::Lookup(err) | Self::Assign(err) => Some(err),
            _ => None,
        }
    }

    #[inline]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }

    #[inline]
    pub fn is_assign(&self) -> bool {
        matches!(self, Self::Assign(_))
    }
}
