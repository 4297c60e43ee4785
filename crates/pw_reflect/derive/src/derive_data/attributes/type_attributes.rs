use syn::meta::ParseNestedMeta;
use syn::{Attribute, Lit, LitStr, PathArguments};

use super::{ReflectDocs, is_doc_attribute, is_reflect_attribute};

/// A user supplied type path, from `#[reflect(type_path = "a::b::Foo")]`.
///
/// Generic parameters are appended by the macro and must not be written.
#[derive(Debug, Clone)]
pub(crate) struct CustomTypePath {
    /// `a::b::Foo`
    pub path: String,
    /// `Foo`
    pub ident: String,
    /// `a::b`, `None` for a single segment.
    pub module: Option<String>,
}

impl CustomTypePath {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        let path: syn::Path = lit.parse()?;

        if path.leading_colon.is_some() {
            return Err(syn::Error::new(
                lit.span(),
                "did not expect a leading double colon (`::`)",
            ));
        }
        if path
            .segments
            .iter()
            .any(|segment| !matches!(segment.arguments, PathArguments::None))
        {
            return Err(syn::Error::new(
                lit.span(),
                "type path must not contain generics, they are appended automatically",
            ));
        }

        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();

        let Some((ident, module)) = segments.split_last() else {
            return Err(syn::Error::new(lit.span(), "expected a type path"));
        };

        Ok(Self {
            path: segments.join("::"),
            ident: ident.clone(),
            module: (!module.is_empty()).then(|| module.join("::")),
        })
    }
}

/// Attributes on the type itself.
///
/// - `#[reflect(type_path = "my_crate::Foo")]`
/// - `#[reflect(doc = "...")]`, `#[reflect(doc = false)]`
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<CustomTypePath>,
    pub docs: ReflectDocs,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if is_doc_attribute(attr) {
                this.docs.parse_default_docs(attr)?;
            } else if is_reflect_attribute(attr) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("type_path") {
            let lit: LitStr = meta.value()?.parse()?;
            if self.type_path.is_some() {
                return Err(syn::Error::new(lit.span(), "duplicate `type_path`"));
            }
            self.type_path = Some(CustomTypePath::parse(&lit)?);
            Ok(())
        } else if meta.path.is_ident("doc") {
            let lit: Lit = meta.value()?.parse()?;
            self.docs.parse_custom_docs(&lit)
        } else if ["skip", "readonly", "writeonly", "rename"]
            .iter()
            .any(|name| meta.path.is_ident(name))
        {
            Err(meta.error("this attribute can only be used on fields"))
        } else {
            Err(meta.error("unknown reflect attribute, expected `type_path` or `doc`"))
        }
    }
}
