use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use pw_utils::vec::FastVec;
use serde_core::de::{self, Visitor};
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::access::{InvalidPathError, Segment, SegmentIter};

// -----------------------------------------------------------------------------
// AccessPath

/// Something that can be turned into a non-empty sequence of [`Segment`]s.
///
/// Implemented for `&str` and `&String`, which are split lazily without
/// allocating, and for `&Path`, which is already split.
///
/// Implementations must return [`InvalidPathError`] instead of an empty
/// iterator.
pub trait AccessPath<'a> {
    fn into_segments(self) -> Result<impl Iterator<Item = Segment<'a>>, InvalidPathError>;
}

impl<'a> AccessPath<'a> for &'a str {
    #[inline]
    fn into_segments(self) -> Result<impl Iterator<Item = Segment<'a>>, InvalidPathError> {
        let iter = SegmentIter::new(self);
        if iter.clone().next().is_none() {
            return Err(InvalidPathError::new(self));
        }
        Ok(iter)
    }
}

impl<'a> AccessPath<'a> for &'a String {
    #[inline]
    fn into_segments(self) -> Result<impl Iterator<Item = Segment<'a>>, InvalidPathError> {
        self.as_str().into_segments()
    }
}

impl<'a> AccessPath<'a> for &'a Path {
    #[inline]
    fn into_segments(self) -> Result<impl Iterator<Item = Segment<'a>>, InvalidPathError> {
        Ok(self.0.iter().map(Segment::borrowed))
    }
}

// -----------------------------------------------------------------------------
// Path

/// A parsed, reusable access path.
///
/// Parsing happens once, the path can then be used for any number of
/// accesses. `Display` writes the canonical form (members joined by `.`,
/// indices as `[i]`), which parses back to the same path.
///
/// # Examples
///
/// ```
/// use pw_reflect::access::{Path, Segment};
///
/// let path: Path = "list..[2]data".parse().unwrap();
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "list[2].data");
///
/// let built = Path::from_segments([
///     Segment::from("list"),
///     Segment::Index(2),
///     Segment::from("data"),
/// ]).unwrap();
/// assert_eq!(built, path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Box<[Segment<'static>]>);

impl Path {
    /// Parses a path string.
    ///
    /// Fails only when the string contains no segments.
    pub fn parse(path: &str) -> Result<Self, InvalidPathError> {
        let segments = path.into_segments()?;

        let mut vec: FastVec<Segment<'static>, 8> = FastVec::new();
        let data = vec.get();

        for segment in segments {
            data.push(segment.into_owned());
        }

        Ok(Self(vec.into_boxed_slice()))
    }

    /// Creates a path from explicit segments.
    ///
    /// Fails when `segments` is empty.
    pub fn from_segments<'a>(
        segments: impl IntoIterator<Item = Segment<'a>>,
    ) -> Result<Self, InvalidPathError> {
        let mut segments = segments.into_iter().peekable();
        if segments.peek().is_none() {
            return Err(InvalidPathError::new(""));
        }

        let mut vec: FastVec<Segment<'static>, 8> = FastVec::new();
        let data = vec.get();
        data.extend(segments.map(Segment::into_owned));

        Ok(Self(vec.into_boxed_slice()))
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<'static>] {
        &self.0
    }

    /// Returns the number of segments, never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Segment<'static>> {
        self.0.iter()
    }

    /// Appends the segments of `other`.
    ///
    /// ```
    /// # use pw_reflect::access::Path;
    /// let a = Path::parse("a[1]").unwrap();
    /// let b = Path::parse("b").unwrap();
    /// assert_eq!(a.concat(b).to_string(), "a[1].b");
    /// ```
    pub fn concat(self, other: Path) -> Self {
        let mut vec: FastVec<Segment<'static>, 12> = FastVec::new();
        let data = vec.get();
        data.extend(self.0);
        data.extend(other.0);
        Self(vec.into_boxed_slice())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment<'static>;
    type IntoIter = core::slice::Iter<'a, Segment<'static>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 && matches!(segment, Segment::Member(_)) {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = InvalidPathError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// -----------------------------------------------------------------------------
// Serialization

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PathVisitor;

        impl Visitor<'_> for PathVisitor {
            type Value = Path;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-empty access path string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Path, E> {
                Path::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PathVisitor)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::{AccessPath, Path};
    use crate::access::Segment;

    #[test]
    fn parse_equals_explicit_segments() {
        let parsed = Path::parse("a.b.c").unwrap();
        let built = Path::from_segments(["a", "b", "c"].map(Segment::from)).unwrap();
        assert_eq!(parsed, built);
    }

    #[test]
    fn empty_paths_are_invalid() {
        for path in ["", ".", "[]", "..[]."] {
            let err = Path::parse(path).unwrap_err();
            assert_eq!(&*err.path, path);
        }
        assert!(Path::from_segments(Vec::<Segment>::new()).is_err());
        assert!("".into_segments().is_err());
    }

    #[test]
    fn display_round_trip() {
        for text in ["a", "[3]", "x[0][1].y", "arrayOfA[0].number", "a..b[]c", "[1]a"] {
            let path = Path::parse(text).unwrap();
            assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
        }
        assert_eq!(Path::parse("[1]a").unwrap().to_string(), "[1].a");
    }

    #[test]
    fn borrowed_segments_from_path() {
        let path = Path::parse("a[2]").unwrap();
        let segments: Vec<_> = (&path).into_segments().unwrap().collect();
        assert_eq!(segments, path.segments());

        let owned = String::from("a[2]");
        let segments: Vec<_> = (&owned).into_segments().unwrap().collect();
        assert_eq!(segments, path.segments());
    }

    #[test]
    fn serde_as_string() {
        let path = Path::parse("list[1].name").unwrap();

        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"list[1].name\"");
        assert_eq!(serde_json::from_str::<Path>(&json).unwrap(), path);

        let text = ron::to_string(&path).unwrap();
        assert_eq!(ron::from_str::<Path>(&text).unwrap(), path);

        assert!(serde_json::from_str::<Path>("\"..\"").is_err());
    }
}
