use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_path_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn struct_info_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn member_info_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::info::MemberInfo
    }
}

#[inline(always)]
pub(crate) fn member_access_(pw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #pw_reflect_path::info::MemberAccess
    }
}
