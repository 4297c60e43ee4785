//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on the caller's prelude or imports.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($name:ident => $($path:tt)*) => {
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($($path)*));
            }
        }
    };
}

define_fp!(OptionFP => ::core::option::Option);
define_fp!(ResultFP => ::core::result::Result);
define_fp!(AnyFP => ::core::any::Any);
define_fp!(SendFP => ::core::marker::Send);
define_fp!(SyncFP => ::core::marker::Sync);
