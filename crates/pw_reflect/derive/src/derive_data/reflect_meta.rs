use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;
use crate::path::fp::OptionFP;

/// Everything about the deriving type that is not specific to its shape.
pub(crate) struct ReflectMeta<'a> {
    pw_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Field types that mention a type parameter, they need bounds of their own.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("pw_reflect_path", &self.pw_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            pw_reflect_path: crate::path::pw_reflect(),
            attrs,
            ident,
            generics,
            active_types: Vec::new(),
        }
    }

    /// Records the reflected field types, keeping those that use a type parameter.
    pub(super) fn set_active_types<'t>(&mut self, types: impl Iterator<Item = &'t Type>) {
        let params: Vec<&Ident> = self.generics.type_params().map(|p| &p.ident).collect();
        if params.is_empty() {
            return;
        }

        for ty in types {
            if mentions_any(ty.to_token_stream(), &params)
                && !self.active_types.iter().any(|known| known == ty)
            {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn pw_reflect_path(&self) -> &Path {
        &self.pw_reflect_path
    }

    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    /// Whether generic cells are needed, lifetimes alone do not count.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Generate docs codes, see [`ReflectDocs`](super::attributes).
    #[inline]
    pub fn with_docs_expression(&self) -> TokenStream {
        self.attrs.docs.get_expression_with()
    }

    /// The type's name without generics, as a string literal.
    pub fn type_ident(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(custom) => custom.ident.to_token_stream(),
            None => self.ident.to_string().to_token_stream(),
        }
    }

    /// `Option<&'static str>` of the module path.
    pub fn module_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(custom) => match &custom.module {
                Some(module) => quote!(#OptionFP::Some(#module)),
                None => quote!(#OptionFP::None),
            },
            None => quote!(#OptionFP::Some(::core::module_path!())),
        }
    }

    /// The full path without generics, as a `&'static str` constant expression.
    fn base_type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(custom) => custom.path.to_token_stream(),
            None => {
                let ident = self.ident.to_string();
                quote!(::core::concat!(::core::module_path!(), "::", #ident))
            }
        }
    }

    /// Expression of `TypePath::type_path`.
    ///
    /// A constant for non-generic types, an owned `String` otherwise.
    pub fn type_path(&self) -> TokenStream {
        let base = self.base_type_path();
        self.with_generic_names(base, quote!(type_path))
    }

    /// Expression of `TypePath::type_name`, see [`ReflectMeta::type_path`].
    pub fn type_name(&self) -> TokenStream {
        let base = self.type_ident();
        self.with_generic_names(base, quote!(type_name))
    }

    fn with_generic_names(&self, base: TokenStream, method: TokenStream) -> TokenStream {
        if !self.impl_with_generic() {
            return base;
        }

        let type_path_ = crate::path::type_path_(&self.pw_reflect_path);
        let concat_ = crate::path::concat_(&self.pw_reflect_path);

        let mut pieces = vec![base, quote!("<")];
        for (index, param) in self.generics.type_params().enumerate() {
            if index > 0 {
                pieces.push(quote!(", "));
            }
            let ident = &param.ident;
            pieces.push(quote!(<#ident as #type_path_>::#method()));
        }
        pieces.push(quote!(">"));

        quote! {
            #concat_(&[#(#pieces),*])
        }
    }

    /// Return the generics split for an `impl` block, with the bounds
    /// each generated impl needs.
    ///
    /// - The type itself: `Any + Send + Sync` with type parameters,
    ///   `'static` with lifetimes only.
    /// - Type parameters: `TypePath` for the `TypePath` impl, otherwise
    ///   `Reflect + Typed`.
    /// - Field types that mention a type parameter: `Reflect + Typed`,
    ///   except for the `TypePath` impl.
    pub fn split_generics(
        &self,
        add_reflect_typed: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        if self.impl_with_generic() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
        } else if self.generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let type_path_ = crate::path::type_path_(&self.pw_reflect_path);
        let reflect_ = crate::path::reflect_(&self.pw_reflect_path);
        let typed_ = crate::path::typed_(&self.pw_reflect_path);

        for param in self.generics.type_params() {
            let ident = &param.ident;
            if add_reflect_typed {
                generic_where_clause.extend(quote! { #ident: #reflect_ + #typed_, });
            } else {
                generic_where_clause.extend(quote! { #ident: #type_path_, });
            }
        }

        if add_reflect_typed {
            for ty in &self.active_types {
                generic_where_clause.extend(quote! { #ty: #reflect_ + #typed_, });
            }
        }

        (impl_generics, ty_generics, generic_where_clause)
    }
}

/// Do any of the identifiers in `idents` appear in `tokens`?
fn mentions_any(tokens: TokenStream, idents: &[&Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => idents.iter().any(|param| **param == ident),
        TokenTree::Group(group) => mentions_any(group.stream(), idents),
        _ => false,
    })
}
