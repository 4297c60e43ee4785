use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::ResultFP;

/// Generate implementation code for `Reflect` trait.
///
/// `reflect_kind_token` names the `ReflectKind`, `ReflectRef` and
/// `ReflectMut` variant, `reflect_eq_tokens` is the kind-specific
/// `reflect_partial_eq`.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    reflect_eq_tokens: TokenStream,
) -> TokenStream {
    let pw_reflect_path = meta.pw_reflect_path();

    let reflect_ = crate::path::reflect_(pw_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(pw_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(pw_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(pw_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(pw_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }

            #reflect_eq_tokens
        }
    }
}
