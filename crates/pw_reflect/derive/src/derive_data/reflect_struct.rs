use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, FieldsNamed, Ident};

use super::attributes::FieldAccess;
use super::{FieldAttributes, ReflectMeta};

/// A named field and its reflection attributes.
#[derive(Debug)]
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub ident: &'a Ident,
    pub attrs: FieldAttributes,
    /// The member name seen by paths, the field name unless renamed.
    pub name: String,
    /// Position among the reflected fields, `None` if skipped.
    pub reflection_index: Option<usize>,
}

impl StructField<'_> {
    /// Tokens of the `MemberInfo` for this field.
    fn to_info_tokens(&self, pw_reflect_path: &syn::Path) -> TokenStream {
        let member_info_ = crate::path::member_info_(pw_reflect_path);
        let member_access_ = crate::path::member_access_(pw_reflect_path);

        let ty = &self.data.ty;
        let name = &self.name;

        let with_access = match self.attrs.access {
            FieldAccess::ReadWrite => crate::utils::empty(),
            FieldAccess::ReadOnly => quote!(.with_access(#member_access_::ReadOnly)),
            FieldAccess::WriteOnly => quote!(.with_access(#member_access_::WriteOnly)),
        };
        let with_docs = self.attrs.docs.get_expression_with();

        quote! {
            #member_info_::new::<#ty>(#name)
                #with_access
                #with_docs
        }
    }
}

/// A struct with named fields.
#[derive(Debug)]
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a FieldsNamed) -> syn::Result<Self> {
        let mut parsed: Vec<StructField<'a>> = Vec::with_capacity(fields.named.len());
        let mut reflection_index = 0;

        for data in &fields.named {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;

            let Some(ident) = &data.ident else {
                return Err(syn::Error::new_spanned(data, "expected a named field"));
            };
            let name = match &attrs.rename {
                Some(rename) => rename.value(),
                None => ident.to_string(),
            };

            let index = if attrs.skip {
                None
            } else {
                reflection_index += 1;
                Some(reflection_index - 1)
            };

            if index.is_some()
                && parsed
                    .iter()
                    .any(|other| other.reflection_index.is_some() && other.name == name)
            {
                let span = attrs
                    .rename
                    .as_ref()
                    .map_or_else(|| syn::spanned::Spanned::span(data), |rename| rename.span());
                return Err(syn::Error::new(
                    span,
                    format!("duplicate member name `{name}`"),
                ));
            }

            parsed.push(StructField {
                data,
                ident,
                attrs,
                name,
                reflection_index: index,
            });
        }

        meta.set_active_types(
            parsed
                .iter()
                .filter(|field| field.reflection_index.is_some())
                .map(|field| &field.data.ty),
        );

        Ok(Self {
            meta,
            fields: parsed,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields that are not skipped, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.reflection_index.is_some())
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(
    ///     _path_::StructInfo::new::<Self>(&[
    ///         _path_::MemberInfo::new::<u32>("id").with_access(..),
    ///         ...
    ///     ])
    ///     .with_docs(..)
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let pw_reflect_path = self.meta.pw_reflect_path();
        let type_info_ = crate::path::type_info_(pw_reflect_path);
        let struct_info_ = crate::path::struct_info_(pw_reflect_path);

        let members = self
            .active_fields()
            .map(|field| field.to_info_tokens(pw_reflect_path));
        let with_docs = self.meta.with_docs_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#members),*
                ])
                #with_docs
            )
        }
    }
}

/// Per-member expressions used by the `Struct` impl.
pub(crate) struct FieldAccessors {
    /// `&self.field as &dyn Reflect`
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.field as &mut dyn Reflect`
    pub fields_mut: Vec<TokenStream>,
    /// Exposed member names.
    pub member_names: Vec<String>,
    /// `0usize, 1usize, ...`
    pub member_indices: Vec<usize>,
    pub member_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let reflect_ = crate::path::reflect_(info.meta().pw_reflect_path());

        let mut this = Self {
            fields_ref: Vec::new(),
            fields_mut: Vec::new(),
            member_names: Vec::new(),
            member_indices: Vec::new(),
            member_count: 0,
        };

        for field in info.active_fields() {
            let ident = field.ident;
            this.fields_ref.push(quote!(&self.#ident as &dyn #reflect_));
            this.fields_mut.push(quote!(&mut self.#ident as &mut dyn #reflect_));
            this.member_names.push(field.name.clone());
            this.member_indices.push(this.member_count);
            this.member_count += 1;
        }

        this
    }
}
