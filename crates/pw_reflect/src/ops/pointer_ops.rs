use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// A reflected value that refers to at most one other value.
///
/// Path resolution passes through pointers transparently. A pointer
/// without a target (e.g. `Option::None`) is *null* and stops resolution.
///
/// ```
/// use pw_reflect::ops::Pointer;
///
/// let mut x: Option<u8> = None;
/// assert!(Pointer::is_null(&x));
///
/// x = Some(3);
/// let target = Pointer::target(&x).unwrap();
/// assert_eq!(target.downcast_ref::<u8>(), Some(&3));
/// ```
pub trait Pointer: Reflect {
    fn target(&self) -> Option<&dyn Reflect>;

    fn target_mut(&mut self) -> Option<&mut dyn Reflect>;

    #[inline]
    fn is_null(&self) -> bool {
        self.target().is_none()
    }
}
