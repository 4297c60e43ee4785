use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{FieldAccessors, ReflectMeta, ReflectStruct};
use crate::path::fp::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Struct),
        get_struct_partial_eq_impl(meta),
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let pw_reflect_path = meta.pw_reflect_path();
    let struct_ = crate::path::struct_(pw_reflect_path);
    let reflect_ = crate::path::reflect_(pw_reflect_path);
    let struct_member_iter_ = crate::path::struct_member_iter_(pw_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let FieldAccessors {
        fields_ref,
        fields_mut,
        member_names,
        member_indices,
        member_count,
    } = FieldAccessors::new(info);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn member(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#member_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn member_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#member_names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn member_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#member_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn member_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#member_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#member_indices => #option_::Some(#member_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn member_len(&self) -> usize {
                #member_count
            }

            #[inline]
            fn iter_members(&self) -> #struct_member_iter_<'_> {
                #struct_member_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
fn get_struct_partial_eq_impl(meta: &ReflectMeta) -> TokenStream {
    let pw_reflect_path = meta.pw_reflect_path();
    let reflect_ = crate::path::reflect_(pw_reflect_path);
    let struct_partial_eq_ = crate::path::struct_partial_eq_(pw_reflect_path);

    quote! {
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
            #struct_partial_eq_(self, other)
        }
    }
}
