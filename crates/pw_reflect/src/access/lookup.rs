use alloc::boxed::Box;
use core::fmt;
use std::sync::{PoisonError, RwLock};

use pw_utils::TypeIdMap;
use pw_utils::hash::HashMap;

use crate::Reflect;
use crate::access::{AccessPath, PathAccessError, resolve};
use crate::info::{MemberInfo, StructInfo};

// -----------------------------------------------------------------------------
// MemberLookup

/// Finds the descriptor of a named member on a struct type.
///
/// The resolver calls this for every member segment. The returned member
/// may have any [`MemberAccess`](crate::info::MemberAccess), the resolver
/// checks it against the access mode itself.
pub trait MemberLookup {
    fn find_member(&self, info: &'static StructInfo, name: &str) -> Option<&'static MemberInfo>;
}

/// Asks the [`StructInfo`] on every lookup.
///
/// Used by [`access::get`](crate::access::get) and friends.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLookup;

impl MemberLookup for DirectLookup {
    #[inline]
    fn find_member(&self, info: &'static StructInfo, name: &str) -> Option<&'static MemberInfo> {
        info.member(name)
    }
}

// -----------------------------------------------------------------------------
// MemberCache

/// Memoizes member lookups by `(type, name)`.
///
/// Members are cached on first lookup. Names a type does not declare are
/// never stored, so the cache holds at most the declared members of the
/// types it has seen, whatever paths callers pass in. Accesses through
/// a cache behave exactly like [`access::get`], [`access::get_mut`] and
/// [`access::set`], errors included.
///
/// A cache is `Send + Sync` and can live in a `static`.
///
/// # Examples
///
/// ```
/// use pw_reflect::{derive::Reflect, access::MemberCache};
///
/// #[derive(Reflect)]
/// struct Foo { id: u32, name: String }
///
/// static CACHE: MemberCache = MemberCache::new();
///
/// let mut foo = Foo { id: 1, name: String::from("foo") };
///
/// CACHE.set(&mut foo, "id", Box::new(5_u32)).unwrap();
/// let id = CACHE.get(&foo, "id").unwrap();
///
/// assert_eq!(id.downcast_ref::<u32>(), Some(&5));
/// assert_eq!(CACHE.len(), 1);
///
/// assert!(CACHE.get(&foo, "missing").is_err());
/// assert_eq!(CACHE.len(), 1);
/// ```
///
/// [`access::get`]: crate::access::get
/// [`access::get_mut`]: crate::access::get_mut
/// [`access::set`]: crate::access::set
pub struct MemberCache {
    members: RwLock<TypeIdMap<HashMap<Box<str>, &'static MemberInfo>>>,
}

impl MemberCache {
    #[inline]
    pub const fn new() -> Self {
        Self {
            members: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Same as [`access::get`](crate::access::get), with cached lookups.
    pub fn get<'r, 'p>(
        &self,
        root: &'r dyn Reflect,
        path: impl AccessPath<'p>,
    ) -> Result<&'r dyn Reflect, PathAccessError> {
        resolve::get(self, root, path)
    }

    /// Same as [`access::get_mut`](crate::access::get_mut), with cached lookups.
    pub fn get_mut<'r, 'p>(
        &self,
        root: &'r mut dyn Reflect,
        path: impl AccessPath<'p>,
    ) -> Result<&'r mut dyn Reflect, PathAccessError> {
        resolve::get_mut(self, root, path)
    }

    /// Same as [`access::set`](crate::access::set), with cached lookups.
    pub fn set<'p>(
        &self,
        root: &mut dyn Reflect,
        path: impl AccessPath<'p>,
        value: Box<dyn Reflect>,
    ) -> Result<(), PathAccessError> {
        resolve::set(self, root, path, value)
    }

    /// Returns the number of cached members.
    pub fn len(&self) -> usize {
        let members = self.members.read().unwrap_or_else(PoisonError::into_inner);
        members.values().map(HashMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.members
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl MemberLookup for MemberCache {
    fn find_member(&self, info: &'static StructInfo, name: &str) -> Option<&'static MemberInfo> {
        let ty_id = info.ty_id();

        let cached = self
            .members
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ty_id)
            .and_then(|members| members.get(name).copied());
        if cached.is_some() {
            return cached;
        }

        // Misses stay uncached, `name` may be arbitrary caller input.
        let found = info.member(name)?;
        log::trace!("cache member `{name}` of `{}`", info.type_path());

        self.members
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(ty_id, HashMap::default)
            .insert(name.into(), found);

        Some(found)
    }
}

impl Default for MemberCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemberCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberCache")
            .field("len", &self.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::MemberCache;
    use crate::access::fixtures::{A, B, C};
    use crate::access::{self, Path};

    const PATHS: &[&str] = &[
        "arrayOfA[0].number",
        "arrayOfA[1].b.text",
        "arrayOfA[0].instanceB.text",
        "arrayOfA[0].secret",
        "arrayOfA[0].id",
        "arrayOfA[9]",
        "numbers[5]",
        "numbers.len",
        "grid[1][1]",
        "doesNotExist",
        "..",
    ];

    #[test]
    fn cached_reads_match_direct_reads() {
        let cache = MemberCache::new();
        let mut c = C::new();
        c.array_of_a[1].instance_b = Some(Box::new(B::new("pointer")));

        // Twice, so the second round is served from the cache.
        for _ in 0..2 {
            for path in PATHS {
                let direct = access::get(&c, *path);
                let cached = cache.get(&c, *path);
                match (direct, cached) {
                    (Ok(direct), Ok(cached)) => assert!(core::ptr::addr_eq(direct, cached)),
                    (Err(direct), Err(cached)) => assert_eq!(direct, cached),
                    _ => panic!("results differ for `{path}`"),
                }
            }
        }
        assert!(!cache.is_empty());
    }

    #[test]
    fn cached_writes_match_direct_writes() {
        let cache = MemberCache::new();
        let mut direct = A::new(1, "one");
        let mut cached = A::new(1, "one");

        for path in ["number", "id", "secret", "b.text", "missing", "b.missing"] {
            let value = || -> Box<dyn crate::Reflect> {
                if path.ends_with("text") || path == "secret" {
                    Box::new(String::from("value"))
                } else {
                    Box::new(3_i32)
                }
            };
            let left = access::set(&mut direct, path, value());
            let right = cache.set(&mut cached, path, value());
            assert_eq!(left, right, "path `{path}`");
        }

        assert_eq!(direct.number, cached.number);
        assert_eq!(direct.secret, cached.secret);
        assert_eq!(direct.b.text, cached.b.text);
    }

    #[test]
    fn misses_are_not_cached_and_clear_empties() {
        let cache = MemberCache::new();
        let a = A::new(0, "");

        for index in 0..32 {
            let name = alloc::format!("unknown{index}");
            assert!(cache.get(&a, name.as_str()).is_err());
        }
        assert!(cache.is_empty());

        cache.get(&a, "b.text").unwrap();
        cache.get(&a, "b.text").unwrap();
        assert_eq!(cache.len(), 2);

        // A miss on a known type leaves its cached members alone.
        assert!(cache.get(&a, "b.nothing").is_err());
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn parsed_path_through_cache() {
        let cache = MemberCache::default();
        let mut a = A::new(0, "");
        let path = Path::parse("b.text").unwrap();

        cache.set(&mut a, &path, Box::new(String::from("nice"))).unwrap();
        let text = cache.get_mut(&mut a, &path).unwrap();
        assert_eq!(text.downcast_ref::<String>().unwrap(), "nice");
    }
}
