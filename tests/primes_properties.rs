//! Property-based tests for the prime scanners
//!
//! These verify invariants that should hold for all bounds:
//! - Re-scanning identical bounds is deterministic
//! - Range output is ascending, prime, and inside the window
//! - The range scan misses no prime the window holds
//! - Sequences have exactly the requested length
//! - A sequence begins with every prime its window holds

use proptest::prelude::*;
use textscan::{is_prime, prime_sequence, primes_in_range};

proptest! {
    #[test]
    fn prop_range_is_deterministic(start in 0u64..2000, span in 0u64..200) {
        let stop = start + span;
        let first: Vec<u64> = primes_in_range(start, stop).collect();
        let second: Vec<u64> = primes_in_range(start, stop).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_range_yields_ascending_primes_inside_the_window(
        start in 0u64..2000,
        span in 0u64..200,
    ) {
        let stop = start + span;
        let primes: Vec<u64> = primes_in_range(start, stop).collect();

        for window in primes.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for p in primes {
            prop_assert!(is_prime(p));
            prop_assert!(start <= p && p < stop);
        }
    }

    #[test]
    fn prop_range_misses_no_primes(start in 0u64..500, span in 0u64..100) {
        let stop = start + span;
        let primes: Vec<u64> = primes_in_range(start, stop).collect();

        for n in start..stop {
            prop_assert_eq!(primes.contains(&n), is_prime(n));
        }
    }

    #[test]
    fn prop_sequence_has_exactly_the_requested_length(
        start in 0u64..1000,
        length in 0usize..50,
    ) {
        let sequence = prime_sequence(start, length);
        prop_assert_eq!(sequence.len(), length);

        for p in &sequence {
            prop_assert!(is_prime(*p));
            prop_assert!(*p >= start);
        }
        for window in sequence.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn prop_sequence_begins_with_the_window_primes(start in 0u64..500, span in 0u64..50) {
        let stop = start + span;
        let ranged: Vec<u64> = primes_in_range(start, stop).collect();
        let sequence = prime_sequence(start, span as usize);

        prop_assert!(sequence.len() >= ranged.len());
        prop_assert_eq!(&sequence[..ranged.len()], &ranged[..]);
    }
}
