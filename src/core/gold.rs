//! Saturating Counter Arithmetic
//!
//! Every knight counter (gold, weapon class, armour class) is an unsigned
//! 64-bit integer. Gold additions clamp at [`MAX_GOLD`] instead of wrapping,
//! and the looting operations are expressed as read-and-clear primitives.
//!
//! ## Counter Rules
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  saturating_gold(a, b)  = a + min(b, MAX_GOLD - a)          │
//! │  read_and_clear(&mut x) = old x, leaves x == 0              │
//! │  adopt_if_better(m, o)  = if o > m { m = o; o = 0 }         │
//! │  class_gap(w, a)        = |w - a|, never underflows         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

/// Unsigned counter type used for gold and class values.
pub type Gold = u64;

/// Upper bound for a knight's purse.
pub const MAX_GOLD: Gold = Gold::MAX;

/// Add two gold amounts, clamping at [`MAX_GOLD`].
#[inline]
pub const fn saturating_gold(a: Gold, b: Gold) -> Gold {
    let headroom = MAX_GOLD - a;
    if b < headroom {
        a + b
    } else {
        MAX_GOLD
    }
}

/// Return the current value and reset the counter to zero.
#[inline]
pub fn read_and_clear(value: &mut Gold) -> Gold {
    std::mem::take(value)
}

/// Move `other` into `mine` when it is strictly higher.
///
/// The donor field is zeroed only when it was adopted.
/// Returns `true` if `mine` changed.
#[inline]
pub fn adopt_if_better(mine: &mut Gold, other: &mut Gold) -> bool {
    if *mine < *other {
        *mine = read_and_clear(other);
        true
    } else {
        false
    }
}

/// Absolute difference between two classes.
#[inline]
pub const fn class_gap(weapon: Gold, armour: Gold) -> Gold {
    if weapon >= armour {
        weapon - armour
    } else {
        armour - weapon
    }
}
