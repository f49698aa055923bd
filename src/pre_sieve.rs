use crate::constants::NUMBERS_PER_BYTE;
use crate::error::{Result, SieveError};
use crate::wheel::{wheel30_class_start, WHEEL30};

/// Pre-computed cross-off pattern for the smallest wheel primes.
///
/// Composites of 7, 11, 13 (and optionally 17, 19) account for a large share
/// of all cross-off work, yet their pattern repeats every
/// `7 * 11 * ... * bound` bytes. Computing that cycle once and stamping it
/// into each fresh segment replaces millions of individual bit operations
/// with a handful of memcpys.
///
/// The pattern also clears the bits of the pre-sieve primes themselves
/// (position 7 of the cycle stands for 7, 510517, ... of which only the
/// first is prime). The driver repairs byte 0 of the very first segment,
/// whose eight candidates 7..31 are all prime.
pub struct PreSieve {
    limit: u32,
    pattern: Vec<u8>,
}

impl PreSieve {
    pub fn new(limit: u32) -> Result<PreSieve> {
        let primes: &[u64] = match limit {
            13 => &[7, 11, 13],
            17 => &[7, 11, 13, 17],
            19 => &[7, 11, 13, 17, 19],
            _ => return Err(SieveError::InvalidPreSieve(limit)),
        };
        let len = primes.iter().product::<u64>() as usize;
        let mut pattern = vec![0xffu8; len];
        for &prime in primes {
            // cross off every multiple p*f with f coprime to 30, starting
            // at f = 1; the cycle length is divisible by p, so the window
            // holds exactly whole periods of p's strikes
            let q = (prime / 30) as usize;
            let mut multiple_index = ((prime - 7) / NUMBERS_PER_BYTE) as usize;
            let mut wheel_index = wheel30_class_start(prime) as usize;
            while multiple_index < len {
                let e = &WHEEL30[wheel_index];
                pattern[multiple_index] &= e.unset_bit;
                multiple_index += q * e.next_multiple_factor as usize + e.correct as usize;
                wheel_index = e.next as usize;
            }
        }
        Ok(PreSieve { limit, pattern })
    }

    /// Largest pre-sieved prime.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Copy the pattern into `sieve`, rotated so that the pattern position
    /// of `low` lands on byte 0. `low` must be congruent 0 modulo 30.
    pub fn stamp(&self, sieve: &mut [u8], low: u64) {
        let len = self.pattern.len();
        let offset = ((low / NUMBERS_PER_BYTE) % len as u64) as usize;

        let head = (len - offset).min(sieve.len());
        sieve[..head].copy_from_slice(&self.pattern[offset..offset + head]);
        let mut written = head;
        while written < sieve.len() {
            let chunk = (sieve.len() - written).min(len);
            sieve[written..written + chunk].copy_from_slice(&self.pattern[..chunk]);
            written += chunk;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_pattern(primes: &[u64], len: usize) -> Vec<u8> {
        const BIT_VALUES: [u64; 8] = [7, 11, 13, 17, 19, 23, 29, 31];
        let mut pattern = vec![0xffu8; len];
        for (byte, slot) in pattern.iter_mut().enumerate() {
            for (bit, &offset) in BIT_VALUES.iter().enumerate() {
                let value = byte as u64 * 30 + offset;
                if primes.iter().any(|&p| value % p == 0) {
                    *slot &= !(1u8 << bit);
                }
            }
        }
        pattern
    }

    #[test]
    fn pattern_matches_trial_division() {
        let pre = PreSieve::new(13).unwrap();
        assert_eq!(reference_pattern(&[7, 11, 13], 1001), pre.pattern);

        let pre = PreSieve::new(17).unwrap();
        assert_eq!(17 * 1001, pre.pattern.len());
        assert_eq!(reference_pattern(&[7, 11, 13, 17], 17017), pre.pattern);
    }

    #[test]
    fn invalid_bound_rejected() {
        assert!(PreSieve::new(11).is_err());
        assert!(PreSieve::new(23).is_err());
    }

    #[test]
    fn stamp_rotates_to_segment_base() {
        let pre = PreSieve::new(13).unwrap();
        let mut sieve = vec![0u8; 2048];
        // low = 30 * 1001 * 3 + 30 * 11 -> pattern offset 11
        pre.stamp(&mut sieve, 30 * (1001 * 3 + 11));
        assert_eq!(&pre.pattern[11..100], &sieve[..89]);
        // wraps around the 1001-byte cycle
        assert_eq!(pre.pattern[0], sieve[1001 - 11]);
        assert_eq!(&pre.pattern[..], &sieve[990..990 + 1001]);
    }

    #[test]
    fn stamp_shorter_than_pattern() {
        let pre = PreSieve::new(13).unwrap();
        let mut sieve = vec![0u8; 64];
        pre.stamp(&mut sieve, 0);
        assert_eq!(&pre.pattern[..64], &sieve[..]);
    }
}
