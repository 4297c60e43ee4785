use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, spanned::Spanned};

use crate::derive_data::{ReflectMeta, ReflectStruct, TypeAttributes};

/// Dispatch on the shape of the input, only structs with named fields are reflected.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> proc_macro::TokenStream {
    match try_reflect_impls(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn try_reflect_impls(ast: &DeriveInput) -> syn::Result<TokenStream> {
    if let Some(param) = ast
        .generics
        .params
        .iter()
        .find(|param| matches!(param, GenericParam::Const(_)))
    {
        return Err(syn::Error::new(
            param.span(),
            "`Reflect` cannot be derived for types with const generic parameters",
        ));
    }

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields,
            Fields::Unnamed(_) => return Err(unsupported(ast, "tuple structs")),
            Fields::Unit => return Err(unsupported(ast, "unit structs")),
        },
        Data::Enum(_) => return Err(unsupported(ast, "enums")),
        Data::Union(_) => return Err(unsupported(ast, "unions")),
    };

    let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
    let meta = ReflectMeta::new(attrs, &ast.ident, &ast.generics);
    let info = ReflectStruct::new(meta, fields)?;

    let reflect_impls = super::impl_struct(&info);

    Ok(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}

fn unsupported(ast: &DeriveInput, shape: &str) -> syn::Error {
    syn::Error::new(
        ast.ident.span(),
        format!("`Reflect` cannot be derived for {shape}, only for structs with named fields"),
    )
}
