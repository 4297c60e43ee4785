use syn::meta::ParseNestedMeta;
use syn::{Attribute, Lit, LitStr};

use super::{ReflectDocs, is_doc_attribute, is_reflect_attribute};

/// How a field may be accessed through reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FieldAccess {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

/// Attributes on a single field.
///
/// - `#[reflect(skip)]`: the field is not reflected at all.
/// - `#[reflect(readonly)]`, `#[reflect(writeonly)]`
/// - `#[reflect(rename = "otherName")]`: the member name seen by paths.
/// - `#[reflect(doc = "...")]`, `#[reflect(doc = false)]`
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub access: FieldAccess,
    pub rename: Option<LitStr>,
    pub docs: ReflectDocs,
}

impl FieldAttributes {
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
        if meta.path.is_ident("skip") {
            self.skip = true;
            Ok(())
        } else if meta.path.is_ident("readonly") {
            self.set_access(&meta, FieldAccess::ReadOnly)
        } else if meta.path.is_ident("writeonly") {
            self.set_access(&meta, FieldAccess::WriteOnly)
        } else if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            check_member_name(&lit)?;
            if self.rename.is_some() {
                return Err(syn::Error::new(lit.span(), "duplicate `rename`"));
            }
            self.rename = Some(lit);
            Ok(())
        } else if meta.path.is_ident("doc") {
            let lit: Lit = meta.value()?.parse()?;
            self.docs.parse_custom_docs(&lit)
        } else if meta.path.is_ident("type_path") {
            Err(meta.error("`type_path` can only be used on the type"))
        } else {
            Err(meta.error(
                "unknown reflect attribute, expected `skip`, `readonly`, `writeonly`, `rename` or `doc`",
            ))
        }
    }

    fn set_access(&mut self, meta: &ParseNestedMeta, access: FieldAccess) -> syn::Result<()> {
        if self.access != FieldAccess::ReadWrite && self.access != access {
            return Err(meta.error("`readonly` and `writeonly` cannot be combined"));
        }
        self.access = access;
        Ok(())
    }
}

/// A member name must be a single path segment.
fn check_member_name(lit: &LitStr) -> syn::Result<()> {
    let name = lit.value();
    if name.is_empty() {
        return Err(syn::Error::new(lit.span(), "member name must not be empty"));
    }
    if name.contains(['.', '[', ']']) {
        return Err(syn::Error::new(
            lit.span(),
            "member name must not contain `.`, `[` or `]`",
        ));
    }
    if name.bytes().all(|b| b.is_ascii_digit()) {
        return Err(syn::Error::new(
            lit.span(),
            "member name must not consist of digits only, it would parse as an index",
        ));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use syn::{Attribute, parse_quote};

    use super::{FieldAccess, FieldAttributes};

    fn parse(attr: Attribute) -> syn::Result<FieldAttributes> {
        FieldAttributes::parse_attrs(&[attr])
    }

    #[test]
    fn rename_must_be_one_segment() {
        let attrs = parse(parse_quote!(#[reflect(rename = "numberProp")])).unwrap();
        assert_eq!(attrs.rename.unwrap().value(), "numberProp");

        let attrs = parse(parse_quote!(#[reflect(rename = "item2")])).unwrap();
        assert_eq!(attrs.rename.unwrap().value(), "item2");

        for name in ["", "a.b", "list[0]", "]", "42"] {
            let attr: Attribute = parse_quote!(#[reflect(rename = #name)]);
            assert!(parse(attr).is_err(), "`{name}` was accepted");
        }
    }

    #[test]
    fn access_flags() {
        let attrs = parse(parse_quote!(#[reflect(readonly)])).unwrap();
        assert_eq!(attrs.access, FieldAccess::ReadOnly);

        let attrs = parse(parse_quote!(#[reflect(skip)])).unwrap();
        assert!(attrs.skip);

        assert!(parse(parse_quote!(#[reflect(readonly, writeonly)])).is_err());
        assert!(parse(parse_quote!(#[reflect(type_path = "a::B")])).is_err());
    }
}
