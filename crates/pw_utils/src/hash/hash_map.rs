//! Provide [`HashMap`] with [`FixedHashState`] as the default hasher.

use crate::hash::FixedHashState;

pub use hashbrown::hash_map::{Entry, Iter, IterMut, Keys, Values};

/// A [`hashbrown::HashMap`] that defaults to [`FixedHashState`].
///
/// `HashMap::new` is only available for hashbrown's own default hasher,
/// use [`Default::default`] or `with_hasher(FixedHashState)` instead.
///
/// # Examples
///
/// ```
/// use pw_utils::hash::HashMap;
///
/// let mut members: HashMap<&str, usize> = HashMap::default();
/// members.insert("number", 0);
/// members.insert("text", 1);
///
/// assert_eq!(members.get("text"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::HashMap;
    use crate::hash::FixedHashState;

    #[test]
    fn boxed_str_keys_lookup_by_str() {
        let mut map: HashMap<Box<str>, u8> = HashMap::with_hasher(FixedHashState);
        map.insert("instanceB".into(), 7);

        assert_eq!(map.get("instanceB"), Some(&7));
        assert_eq!(map.get("instanceA"), None);
    }
}
