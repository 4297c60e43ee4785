use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn reflect_ref_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn struct_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_member_iter_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::ops::StructMemberIter
    }
}

#[inline(always)]
pub(crate) fn struct_partial_eq_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::impls::struct_partial_eq
    }
}
