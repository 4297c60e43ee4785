#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pw_reflect as reflect;
pub use pw_utils as utils;
