#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names this crate as `::pw_reflect`, in doc tests as well as in
// the crate's own tests, so the crate must be reachable under that name.
extern crate self as pw_reflect;

// -----------------------------------------------------------------------------
// Extern crates

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use pw_reflect_derive as derive;
pub use reflection::Reflect;
