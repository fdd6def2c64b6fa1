//! Reserve Quota
//!
//! Translates the reserve percentage into a slot count for a candidate set.
//! The product is truncated, never rounded up, and a non-empty set always
//! reserves at least one slot.

use crate::domain::ReservePercentage;

/// Minimum number of slots reserved for non-whitelisted transactions.
pub fn reserved_slots(set_size: usize, reserve: ReservePercentage) -> usize {
    if set_size == 0 {
        return 0;
    }

    // Integer form of trunc(fraction * set_size), free of float artifacts
    let slots = (set_size as u128 * reserve.percent() as u128 / 100) as usize;

    slots.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pct(p: u8) -> ReservePercentage {
        ReservePercentage::from_percent(p)
    }

    #[test]
    fn test_thirty_percent_of_ten() {
        assert_eq!(reserved_slots(10, pct(30)), 3);
    }

    #[test]
    fn test_floor_clamp_to_one() {
        assert_eq!(reserved_slots(2, pct(1)), 1);
    }

    #[test]
    fn test_empty_set_reserves_nothing() {
        assert_eq!(reserved_slots(0, pct(50)), 0);
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 29% of 100 is exactly 29; 29% of 7 is 2.03
        assert_eq!(reserved_slots(100, pct(29)), 29);
        assert_eq!(reserved_slots(7, pct(29)), 2);
        // 95% of 3 is 2.85
        assert_eq!(reserved_slots(3, pct(95)), 2);
    }

    #[test]
    fn test_full_reserve() {
        assert_eq!(reserved_slots(1000, pct(100)), 1000);
    }

    #[test]
    fn test_huge_set_does_not_overflow() {
        assert_eq!(reserved_slots(usize::MAX, pct(100)), usize::MAX);
    }

    proptest! {
        #[test]
        fn prop_reserve_within_bounds(size in 1usize..1_000_000, p in 1u8..=100) {
            let slots = reserved_slots(size, pct(p));
            prop_assert!(slots >= 1);
            prop_assert!(slots <= size);
        }

        #[test]
        fn prop_reserve_monotonic_in_size(size in 0usize..100_000, p in 1u8..=100) {
            prop_assert!(reserved_slots(size, pct(p)) <= reserved_slots(size + 1, pct(p)));
        }
    }
}
