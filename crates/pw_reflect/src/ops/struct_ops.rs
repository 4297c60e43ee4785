use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// A reflected struct with named members.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). Member
/// indices follow declaration order and match the
/// [`MemberInfo::index`](crate::info::MemberInfo::index) of the type's
/// [`StructInfo`](crate::info::StructInfo).
///
/// ```
/// use pw_reflect::{Reflect, derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: u32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 1, b: true };
///
/// assert_eq!(foo.member_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert!(foo.member("c").is_none());
///
/// let names: Vec<&str> = foo.iter_members().map(|(name, _)| name).collect();
/// assert_eq!(names, ["a", "b"]);
/// ```
pub trait Struct: Reflect {
    fn member(&self, name: &str) -> Option<&dyn Reflect>;

    fn member_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    fn member_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn member_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn member_len(&self) -> usize;

    fn iter_members(&self) -> StructMemberIter<'_>;
}

impl dyn Struct {
    #[inline]
    pub fn member_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.member(name).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn member_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.member_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct Member Iterator

/// Iterator over `(name, value)` pairs of a [`Struct`] in declaration order.
pub struct StructMemberIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructMemberIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructMemberIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructMemberIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.member_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.member_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructMemberIter<'a> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Struct;
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{DynamicTypePath, MemberAccess, ReflectKind, TypePath, Typed};

    #[derive(Reflect, Debug, PartialEq)]
    struct Player {
        name: String,
        #[reflect(rename = "hitPoints")]
        hit_points: u32,
        #[reflect(skip)]
        session: u64,
        #[reflect(readonly)]
        level: u8,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "game::Slot")]
    struct Slot<T> {
        items: Vec<T>,
        first: Option<T>,
    }

    #[derive(Reflect)]
    struct Empty {}

    fn player() -> Player {
        Player {
            name: String::from("ann"),
            hit_points: 10,
            session: 99,
            level: 3,
        }
    }

    #[test]
    fn members_follow_declaration_order() {
        let player = player();

        assert_eq!(player.member_len(), 3);
        assert_eq!(player.name_at(0), Some("name"));
        assert_eq!(player.name_at(1), Some("hitPoints"));
        assert_eq!(player.name_at(2), Some("level"));
        assert_eq!(player.name_at(3), None);

        let hit_points = player.member_at(1).unwrap();
        assert_eq!(hit_points.downcast_ref::<u32>(), Some(&10));

        assert!(player.member("session").is_none());
        assert!(player.member("hit_points").is_none());

        let names: Vec<&str> = player.iter_members().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "hitPoints", "level"]);
    }

    #[test]
    fn members_are_writable_through_struct() {
        let mut player = player();

        let value: &mut dyn Struct = &mut player;
        *value.member_mut_as::<u32>("hitPoints").unwrap() = 20;
        player.member_at_mut(0).unwrap().set(Box::new(String::from("bob"))).unwrap();

        assert_eq!(player.hit_points, 20);
        assert_eq!(player.name, "bob");
        assert_eq!(player.session, 99);
    }

    #[test]
    fn type_info_matches_members() {
        let info = Player::type_info().as_struct().unwrap();

        assert_eq!(info.member_len(), 3);
        assert_eq!(info.index_of("hitPoints"), Some(1));
        assert_eq!(info.member("level").unwrap().access(), MemberAccess::ReadOnly);
        assert!(info.member("name").unwrap().type_is::<String>());
        assert!(info.member("session").is_none());

        assert_eq!(
            <Player as TypePath>::type_path(),
            concat!(module_path!(), "::Player"),
        );
        assert_eq!(<Player as TypePath>::type_name(), "Player");
        assert_eq!(<Player as TypePath>::module_path(), Some(module_path!()));

        assert_eq!(Empty::type_info().as_struct().unwrap().member_len(), 0);
    }

    #[test]
    fn generic_type_path_is_appended() {
        assert_eq!(<Slot<u32> as TypePath>::type_path(), "game::Slot<u32>");
        assert_eq!(<Slot<u32> as TypePath>::type_name(), "Slot<u32>");
        assert_eq!(<Slot<u32> as TypePath>::type_ident(), "Slot");
        assert_eq!(<Slot<u32> as TypePath>::module_path(), Some("game"));
        assert_eq!(<Slot<bool> as TypePath>::type_path(), "game::Slot<bool>");

        let info = <Slot<u8> as Typed>::type_info().as_struct().unwrap();
        assert!(info.member("first").unwrap().type_is::<Option<u8>>());

        let slot = Slot {
            items: vec![1_u8],
            first: None,
        };
        assert_eq!(slot.reflect_kind(), ReflectKind::Struct);
        assert_eq!(slot.reflect_type_path(), "game::Slot<u8>");
    }

    #[test]
    fn set_and_compare() {
        let mut player = player();

        let other = Player {
            name: String::from("cat"),
            hit_points: 1,
            session: 0,
            level: 9,
        };
        assert_eq!(player.reflect_partial_eq(&other), Some(false));

        assert_eq!(player.reflect_partial_eq(&5_u32), Some(false));

        // Skipped fields take no part in the comparison.
        let mut same = self::player();
        same.session = 0;
        assert_eq!(player.reflect_partial_eq(&same), Some(true));

        let rejected = player.set(Box::new(1_u8)).unwrap_err();
        assert!(rejected.is::<u8>());
        assert_eq!(player.name, "ann");

        player.set(Box::new(other)).unwrap();
        assert_eq!(player.name, "cat");
        assert_eq!(player.level, 9);
        assert_eq!(player.session, 0);
    }

    #[cfg(feature = "reflect_docs")]
    #[test]
    fn docs_are_collected() {
        /// A documented type.
        #[derive(Reflect)]
        struct Documented {
            /// First line.
            /// Second line.
            value: u8,
            #[reflect(doc = "Custom.")]
            other: u8,
            #[reflect(doc = false)]
            /// Hidden.
            hidden: u8,
        }

        let info = Documented::type_info().as_struct().unwrap();
        assert_eq!(info.docs(), Some("A documented type."));
        assert_eq!(info.member("value").unwrap().docs(), Some("First line.\nSecond line."));
        assert_eq!(info.member("other").unwrap().docs(), Some("Custom."));
        assert_eq!(info.member("hidden").unwrap().docs(), None);
    }
}
