use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a `pathway` crate as seen from the
/// caller's Cargo.toml.
///
/// Derive macros emit absolute paths such as `::pw_reflect::Reflect`. The
/// caller may depend on `pw_reflect` directly, or only on the `pathway`
/// facade, so the path has to be picked per invoking crate.
///
/// # Example
///
/// ```rust
/// # use pw_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("pw_reflect"));
/// ```
///
/// Reading and parsing the manifest is not free, callers should resolve
/// a path once per macro invocation and pass it around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `pw_` and the caller depends on
///    `pathway`, return `::pathway::short_name` (e.g. `pw_reflect` -> `::pathway::reflect`).
/// 3. Same as 2 for the alias `pw`.
/// 4. Repeat steps 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A crate that uses its own derive macros should declare
/// `extern crate self as crate_name;` in its root so the fallback path
/// resolves inside the crate as well as in its doc tests.
#[derive(Debug)]
pub struct Manifest {
    // `None` when the manifest could not be read, every lookup then falls back.
    manifest: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const FULL_PROJECT_NAME: &str = "pathway";
const SHORT_PROJECT_NAME: &str = "pw";
const PROJECT_PREFIX: &str = "pw_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let manifest = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(manifest).ok()
    }

    // Names come from this module's constants and the caller's request.
    fn absolute_path(segments: &[&str]) -> syn::Path {
        let text = format!("::{}", segments.join("::"));
        syn::parse_str(&text).unwrap_or_else(|_| panic!("`{text}` is not a valid crate path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute_path(&[name]));
        }

        let module = name.strip_prefix(PROJECT_PREFIX)?;
        [FULL_PROJECT_NAME, SHORT_PROJECT_NAME]
            .into_iter()
            .find(|project| deps.contains_key(project))
            .map(|project| Self::absolute_path(&[project, module]))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(manifest) = &self.manifest {
            for table in ["dependencies", "dev-dependencies"] {
                if let Some(Item::Table(deps)) = manifest.get(table)
                    && let Some(path) = Self::find_in_deps(deps, name)
                {
                    return path;
                }
            }
        }

        Self::absolute_path(&[name])
    }

    /// Obtain the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::get_manifest_modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time.is_some()
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Some(toml_edit::Document::parse(text.into()).unwrap()),
            modified_time: None,
        }
    }

    fn render(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\npw_reflect = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("pw_reflect")), "::pw_reflect");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\npathway = \"0.0.1\"\n");
        assert_eq!(render(&m.get_crate_path("pw_reflect")), "::pathway::reflect");

        let m = manifest("[dev-dependencies]\npw = { package = \"pathway\" }\n");
        assert_eq!(render(&m.get_crate_path("pw_reflect")), "::pw::reflect");
    }

    #[test]
    fn fallback_path() {
        let m = manifest("[dependencies]\nserde = \"1\"\n");
        assert_eq!(render(&m.get_crate_path("pw_reflect")), "::pw_reflect");

        let m = Manifest {
            manifest: None,
            modified_time: None,
        };
        assert_eq!(render(&m.get_crate_path("pw_reflect")), "::pw_reflect");
    }
}
