/// Implements `docs` and `with_docs` for an info struct with a `docs` field.
macro_rules! impl_docs_fn {
    ($field:ident) => {
        /// Returns the documentation collected for this item.
        ///
        /// Always `None` unless the `reflect_docs` feature is enabled,
        /// so callers need not gate on it.
        #[inline(always)]
        pub const fn docs(&self) -> Option<&'static str> {
            #[cfg(not(feature = "reflect_docs"))]
            return None;
            #[cfg(feature = "reflect_docs")]
            return self.$field;
        }

        /// Replaces docs. Used by the derive macro.
        #[cfg(feature = "reflect_docs")]
        #[inline]
        pub fn with_docs(self, $field: Option<&'static str>) -> Self {
            Self { $field, ..self }
        }
    };
}

pub(super) use impl_docs_fn;
