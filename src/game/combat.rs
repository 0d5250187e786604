//! Combat Resolution
//!
//! Decides who wins when two knights meet.
//!
//! ```text
//! A can defeat B  <=>  A.weapon_class > B.armour_class
//!
//!   A can | B can | result
//!  -------+-------+------------------------------------------
//!   yes   |  no   | Greater (A wins)
//!   no    |  yes  | Less    (B wins)
//!   no    |  no   | Equal   (draw)
//!   yes   |  yes  | armour, then weapon; Equal if both match
//! ```
//!
//! The relation is not transitive (three knights can beat each other in a
//! circle), so it is exposed as methods rather than through `Ord`.

use std::cmp::Ordering;

use crate::game::knight::Knight;

impl Knight {
    /// Whether this knight's weapon gets through `other`'s armour.
    #[inline]
    pub const fn can_defeat(&self, other: &Knight) -> bool {
        self.weapon_class() > other.armour_class()
    }

    /// Outcome of a fight, from this knight's point of view.
    ///
    /// `Greater` means `self` wins, `Less` means `other` wins.
    pub fn duel(&self, other: &Knight) -> Ordering {
        match (self.can_defeat(other), other.can_defeat(self)) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => Ordering::Equal,
            (true, true) => self
                .armour_class()
                .cmp(&other.armour_class())
                .then(self.weapon_class().cmp(&other.weapon_class())),
        }
    }

    /// `self` wins against `other`.
    #[inline]
    pub fn defeats(&self, other: &Knight) -> bool {
        self.duel(other) == Ordering::Greater
    }

    /// Neither knight wins.
    #[inline]
    pub fn ties(&self, other: &Knight) -> bool {
        self.duel(other) == Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::core::gold::MAX_GOLD;

    #[test]
    fn test_neither_can_defeat_is_draw() {
        let a = Knight::new(100, 10, 1);
        let b = Knight::new(50, 1, 20);

        assert!(!a.can_defeat(&b));
        assert!(!b.can_defeat(&a));
        assert_eq!(a.duel(&b), Ordering::Equal);
        assert!(a.ties(&b));
    }

    #[test]
    fn test_clear_winner() {
        let a = Knight::new(100, 20, 1);
        let b = Knight::new(50, 1, 5);

        assert!(a.can_defeat(&b));
        assert!(!b.can_defeat(&a));
        assert_eq!(a.duel(&b), Ordering::Greater);
        assert_eq!(b.duel(&a), Ordering::Less);
        assert!(a.defeats(&b));
        assert!(!b.defeats(&a));
    }

    #[test]
    fn test_mutual_defeat_breaks_on_armour_then_weapon() {
        // Both get through; lower armour is the weaker side
        let light = Knight::new(0, 10, 2);
        let heavy = Knight::new(0, 10, 5);
        assert_eq!(light.duel(&heavy), Ordering::Less);
        assert_eq!(heavy.duel(&light), Ordering::Greater);

        // Same armour; weapon decides
        let dagger = Knight::new(0, 6, 5);
        let sword = Knight::new(0, 9, 5);
        assert_eq!(dagger.duel(&sword), Ordering::Less);

        // Same classes, different gold: still a draw
        let rich = Knight::new(1000, 9, 5);
        assert_eq!(rich.duel(&sword), Ordering::Equal);
    }

    #[test]
    fn test_reference_comparisons() {
        let black = Knight::new(100, 21, 15);

        assert!(black.defeats(&Knight::new(2000, 14, 20)));
        assert!(Knight::new(25, 21, 16).defeats(&black));
        assert!(black.ties(&Knight::new(150, 21, 15)));
        assert!(!black.ties(&Knight::new(2000, 14, 20)));
    }

    #[test]
    fn test_duel_is_not_transitive() {
        let a = Knight::new(0, 5, 3);
        let b = Knight::new(0, 3, 4);
        let c = Knight::new(0, 4, 5);

        assert!(a.defeats(&b));
        assert!(c.defeats(&a));
        assert!(b.ties(&c));
    }

    #[test]
    fn test_extreme_classes() {
        let titan = Knight::new(0, MAX_GOLD, MAX_GOLD);
        let peasant = Knight::new(0, 0, 0);
        assert!(titan.defeats(&peasant));
        assert!(titan.ties(&titan));
    }

    fn any_knight() -> impl Strategy<Value = Knight> {
        (any::<u64>(), 0u64..64, 0u64..64).prop_map(|(g, w, a)| Knight::new(g, w, a))
    }

    proptest! {
        #[test]
        fn prop_trichotomy(a in any_knight(), b in any_knight()) {
            let outcomes = [a.defeats(&b), b.defeats(&a), a.ties(&b)];
            prop_assert_eq!(outcomes.iter().filter(|o| **o).count(), 1);
        }

        #[test]
        fn prop_reflexive(a in any_knight()) {
            prop_assert!(a.ties(&a));
        }

        #[test]
        fn prop_antisymmetric(a in any_knight(), b in any_knight()) {
            prop_assert_eq!(b.duel(&a), a.duel(&b).reverse());
            prop_assert_eq!(a.ties(&b), b.ties(&a));
        }

        #[test]
        fn prop_gold_never_matters(a in any_knight(), b in any_knight(), extra in any::<u64>()) {
            let mut richer = a;
            richer.take_gold(extra);
            prop_assert_eq!(richer.duel(&b), a.duel(&b));
        }
    }
}
