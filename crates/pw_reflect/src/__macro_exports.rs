//! Items used by code generated from `pw_reflect_derive`.
//!
//! The invoking crate may be `no_std` and may not import `alloc`,
//! generated code reaches these through `::pw_reflect` instead.

pub mod macro_utils {
    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::string::String;
}
