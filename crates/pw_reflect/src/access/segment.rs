use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// Segment

/// One step of an access path.
///
/// # Examples
///
/// ```
/// use pw_reflect::access::{Segment, parse};
///
/// let path = parse("arrayOfA[0].number").unwrap();
///
/// assert_eq!(path.segments(), [
///     Segment::Member("arrayOfA".into()),
///     Segment::Index(0),
///     Segment::Member("number".into()),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment<'a> {
    /// A named member of a struct.
    Member(Cow<'a, str>),
    /// A position in a list or an array.
    Index(usize),
}

impl<'a> Segment<'a> {
    /// Converts this into an "owned" value.
    #[inline]
    pub fn into_owned(self) -> Segment<'static> {
        match self {
            Self::Member(name) => Segment::Member(Cow::Owned(name.into_owned())),
            Self::Index(index) => Segment::Index(index),
        }
    }

    /// Returns a segment borrowing from this one.
    #[inline]
    pub fn borrowed(&self) -> Segment<'_> {
        match self {
            Self::Member(name) => Segment::Member(Cow::Borrowed(name)),
            Self::Index(index) => Segment::Index(*index),
        }
    }

    #[inline]
    pub fn as_member(&self) -> Option<&str> {
        match self {
            Self::Member(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Member(_) => None,
            Self::Index(index) => Some(*index),
        }
    }

    /// Classifies a single piece of a path string.
    ///
    /// All-digit pieces become indices, saturating at `usize::MAX`.
    fn from_piece(piece: &'a str) -> Self {
        if !piece.is_empty() && piece.bytes().all(|byte| byte.is_ascii_digit()) {
            let index = piece.bytes().fold(0_usize, |acc, byte| {
                acc.saturating_mul(10).saturating_add(usize::from(byte - b'0'))
            });
            Self::Index(index)
        } else {
            Self::Member(Cow::Borrowed(piece))
        }
    }
}

impl From<usize> for Segment<'_> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Self::Member(Cow::Borrowed(name))
    }
}

impl From<String> for Segment<'_> {
    #[inline]
    fn from(name: String) -> Self {
        Self::Member(Cow::Owned(name))
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

// -----------------------------------------------------------------------------
// SegmentIter

const SEPARATORS: &[char] = &['.', '[', ']'];

/// Lazily splits a path string into [`Segment`]s.
///
/// `.`, `[` and `]` are all separators and may be mixed freely.
/// Empty pieces are skipped, so `a..b`, `.a` and `a[]b` are fine.
///
/// ```
/// use pw_reflect::access::{Segment, SegmentIter};
///
/// let segments: Vec<_> = SegmentIter::new("a..b[3]").collect();
/// assert_eq!(segments, [
///     Segment::Member("a".into()),
///     Segment::Member("b".into()),
///     Segment::Index(3),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentIter<'a> {
    rest: &'a str,
}

impl<'a> SegmentIter<'a> {
    #[inline]
    pub const fn new(path: &'a str) -> Self {
        Self { rest: path }
    }
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let trimmed = self.rest.trim_start_matches(SEPARATORS);
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed.find(SEPARATORS).unwrap_or(trimmed.len());
        let (piece, rest) = trimmed.split_at(end);
        self.rest = rest;

        Some(Segment::from_piece(piece))
    }
}

impl core::iter::FusedIterator for SegmentIter<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::{Segment, SegmentIter};

    fn split(path: &str) -> Vec<Segment<'_>> {
        SegmentIter::new(path).collect()
    }

    #[test]
    fn mixed_separators() {
        assert_eq!(
            split("arrayOfA[0].number"),
            [Segment::from("arrayOfA"), Segment::Index(0), Segment::from("number")]
        );
        assert_eq!(split("a.b.c"), split("a[b]c"));
    }

    #[test]
    fn empty_pieces_are_dropped() {
        assert_eq!(split("..a..[]b."), [Segment::from("a"), Segment::from("b")]);
        assert!(split("").is_empty());
        assert!(split(".[].").is_empty());
    }

    #[test]
    fn digit_classification() {
        assert_eq!(split("007"), [Segment::Index(7)]);
        assert_eq!(split("1a"), [Segment::from("1a")]);
        assert_eq!(split("-1"), [Segment::from("-1")]);
        assert_eq!(split(" 1"), [Segment::from(" 1")]);
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(split("[99999999999999999999999999]"), [Segment::Index(usize::MAX)]);
    }

    #[test]
    fn display_and_owned() {
        let owned = Segment::from("name").into_owned();
        assert_eq!(owned.as_member(), Some("name"));
        assert_eq!(owned.as_index(), None);
        assert_eq!(format!("{owned}"), "name");
        assert_eq!(format!("{}", Segment::Index(4)), "[4]");
    }
}
