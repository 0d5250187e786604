//! Knight Definition
//!
//! A knight is a plain value: a purse of gold, a weapon class and an
//! armour class. Combat rules live in [`crate::game::combat`].

use std::fmt;
use std::ops::{Add, AddAssign};
use serde::{Serialize, Deserialize};

use crate::core::gold::{
    Gold, MAX_GOLD,
    saturating_gold, read_and_clear, adopt_if_better, class_gap,
};
use crate::core::hash::StateHasher;

/// A tournament contestant.
///
/// `PartialEq` compares all three counters. Combat results are a separate
/// relation, see [`Knight::duel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Knight {
    gold: Gold,
    weapon_class: Gold,
    armour_class: Gold,
}

impl Knight {
    /// Upper bound for a knight's purse.
    pub const MAX_GOLD: Gold = MAX_GOLD;

    /// Create a knight.
    pub const fn new(gold: Gold, weapon_class: Gold, armour_class: Gold) -> Self {
        Self {
            gold,
            weapon_class,
            armour_class,
        }
    }

    /// The placeholder contestant used when a tournament has nobody else:
    /// no gold, no weapon, the lightest armour.
    pub const fn trainee() -> Self {
        Self::new(0, 0, 1)
    }

    /// Current gold.
    #[inline]
    pub const fn gold(&self) -> Gold {
        self.gold
    }

    /// Current weapon class.
    #[inline]
    pub const fn weapon_class(&self) -> Gold {
        self.weapon_class
    }

    /// Current armour class.
    #[inline]
    pub const fn armour_class(&self) -> Gold {
        self.armour_class
    }

    /// Add gold to the purse, clamping at [`MAX_GOLD`].
    #[inline]
    pub fn take_gold(&mut self, amount: Gold) {
        self.gold = saturating_gold(self.gold, amount);
    }

    /// Empty the purse, returning what was in it.
    #[inline]
    pub fn give_up_gold(&mut self) -> Gold {
        read_and_clear(&mut self.gold)
    }

    /// Drop the weapon, returning its class.
    #[inline]
    pub fn give_up_weapon(&mut self) -> Gold {
        read_and_clear(&mut self.weapon_class)
    }

    /// Remove the armour, returning its class.
    #[inline]
    pub fn take_off_armour(&mut self) -> Gold {
        read_and_clear(&mut self.armour_class)
    }

    /// Replace the weapon.
    #[inline]
    pub fn change_weapon(&mut self, new_class: Gold) {
        self.weapon_class = new_class;
    }

    /// Replace the armour.
    #[inline]
    pub fn change_armour(&mut self, new_class: Gold) {
        self.armour_class = new_class;
    }

    /// Loot a defeated knight.
    ///
    /// All of `loser`'s gold moves into this purse. Weapon and armour are
    /// taken only when better than ours, in which case the loser is left
    /// with class 0 for that slot.
    pub fn absorb(&mut self, loser: &mut Knight) {
        self.take_gold(loser.give_up_gold());
        adopt_if_better(&mut self.weapon_class, &mut loser.weapon_class);
        adopt_if_better(&mut self.armour_class, &mut loser.armour_class);
    }

    /// Distance between weapon and armour class.
    #[inline]
    pub const fn class_gap(&self) -> Gold {
        class_gap(self.weapon_class, self.armour_class)
    }

    /// Feed this knight into a state hash.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_gold(self.gold);
        hasher.update_gold(self.weapon_class);
        hasher.update_gold(self.armour_class);
    }
}

impl Add for Knight {
    type Output = Knight;

    /// Pool two knights: summed gold, the better weapon, the better armour.
    fn add(self, other: Knight) -> Knight {
        Knight::new(
            saturating_gold(self.gold, other.gold),
            self.weapon_class.max(other.weapon_class),
            self.armour_class.max(other.armour_class),
        )
    }
}

impl Add<&Knight> for &Knight {
    type Output = Knight;

    fn add(self, other: &Knight) -> Knight {
        *self + *other
    }
}

impl AddAssign<&mut Knight> for Knight {
    /// `winner += &mut loser` loots the loser, see [`Knight::absorb`].
    fn add_assign(&mut self, loser: &mut Knight) {
        self.absorb(loser);
    }
}

impl fmt::Display for Knight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.gold, self.weapon_class, self.armour_class)
    }
}

/// Weapon and armour class of the knight whose classes are furthest apart.
///
/// Ties keep the earliest knight. Returns `(0, 0)` when no knight has a
/// positive gap.
pub fn max_class_gap(knights: &[Knight]) -> (Gold, Gold) {
    let mut best_gap = 0;
    let mut best = (0, 0);

    for knight in knights {
        let gap = knight.class_gap();
        if gap > best_gap {
            best_gap = gap;
            best = (knight.weapon_class, knight.armour_class);
        }
    }

    best
}
