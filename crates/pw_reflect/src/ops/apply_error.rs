use alloc::borrow::Cow;

use thiserror::Error;

/// The reason a reflected value refused a replacement through
/// [`Reflect::set`](crate::Reflect::set).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("attempted to set `{from_type}` into `{to_type}`")]
    MismatchedTypes {
        from_type: Cow<'static, str>,
        to_type: Cow<'static, str>,
    },
}
