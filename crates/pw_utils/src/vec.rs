//! Small-vector re-exports from [`fastvec`].
//!
//! Parsed paths are usually a handful of segments long, so they are
//! collected in a [`FastVec`] that keeps the first few items inline and
//! is then frozen into a boxed slice.

pub use fastvec::{FastVec, fast_vec};
pub use fastvec::{StackVec, stack_vec};
