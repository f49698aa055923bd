use std::time::Instant;

use crate::constants::{
    DEFAULT_PRE_SIEVE, DEFAULT_SIEVE_BYTES, MAX_SIEVE_BYTES, MIN_SIEVE_BYTES,
};
use crate::error::Result;
use crate::prime_finder::PrimeFinder;
use crate::sieve::Sieve;

pub(crate) fn count_flag(kind: usize) -> u32 {
    1 << kind
}

pub(crate) fn print_flag(kind: usize) -> u32 {
    1 << (7 + kind)
}

/// Primes and tuplets below the first representable candidate (7). The byte
/// encoding stores nothing under 7, so these are checked against the range
/// directly.
struct SmallPrime {
    first: u64,
    last: u64,
    kind: usize,
    text: &'static str,
}

const SMALL_PRIMES: [SmallPrime; 8] = [
    SmallPrime { first: 2, last: 2, kind: 0, text: "2" },
    SmallPrime { first: 3, last: 3, kind: 0, text: "3" },
    SmallPrime { first: 5, last: 5, kind: 0, text: "5" },
    SmallPrime { first: 3, last: 5, kind: 1, text: "(3, 5)" },
    SmallPrime { first: 5, last: 7, kind: 1, text: "(5, 7)" },
    SmallPrime { first: 5, last: 11, kind: 2, text: "(5, 7, 11)" },
    SmallPrime { first: 5, last: 13, kind: 3, text: "(5, 7, 11, 13)" },
    SmallPrime { first: 5, last: 17, kind: 4, text: "(5, 7, 11, 13, 17)" },
];

/// High-level interface to the segmented sieve: counts, prints or streams
/// the primes and prime k-tuplets in [start, stop].
///
/// Usage:
///
///     use primeseg::PrimeSieve;
///
///     let mut ps = PrimeSieve::new();
///     assert_eq!(25, ps.count_primes(0, 100).unwrap());
///     assert_eq!(8169, ps.count_twins(0, 1_000_000).unwrap());
///
/// A sieve call either completes and reports exactly the primes in range,
/// or fails with a single typed error and no partial counts.
pub struct PrimeSieve {
    start: u64,
    stop: u64,
    sieve_size: usize,
    pre_sieve: u32,
    flags: u32,
    counts: [u64; 7],
    seconds: f64,
}

impl PrimeSieve {
    pub const COUNT_PRIMES: u32 = 1 << 0;
    pub const COUNT_TWINS: u32 = 1 << 1;
    pub const COUNT_TRIPLETS: u32 = 1 << 2;
    pub const COUNT_QUADRUPLETS: u32 = 1 << 3;
    pub const COUNT_QUINTUPLETS: u32 = 1 << 4;
    pub const COUNT_SEXTUPLETS: u32 = 1 << 5;
    pub const COUNT_SEPTUPLETS: u32 = 1 << 6;
    pub const PRINT_PRIMES: u32 = 1 << 7;
    pub const PRINT_TWINS: u32 = 1 << 8;
    pub const PRINT_TRIPLETS: u32 = 1 << 9;
    pub const PRINT_QUADRUPLETS: u32 = 1 << 10;
    pub const PRINT_QUINTUPLETS: u32 = 1 << 11;
    pub const PRINT_SEXTUPLETS: u32 = 1 << 12;
    pub const PRINT_SEPTUPLETS: u32 = 1 << 13;

    pub fn new() -> PrimeSieve {
        PrimeSieve {
            start: 0,
            stop: 0,
            sieve_size: DEFAULT_SIEVE_BYTES,
            pre_sieve: DEFAULT_PRE_SIEVE,
            flags: Self::COUNT_PRIMES,
            counts: [0; 7],
            seconds: 0.0,
        }
    }

    /// Pick a segment size from CPU cache sizes in bytes: the L1 data cache
    /// is the sweet spot; without any hint, 32 KiB. The result is rounded
    /// down to a power of two and clamped to the supported range.
    pub fn sieve_size_for_cache(l1: Option<usize>, l2: Option<usize>) -> usize {
        let hint = l1.or(l2).unwrap_or(DEFAULT_SIEVE_BYTES);
        let hint = hint.clamp(MIN_SIEVE_BYTES, MAX_SIEVE_BYTES);
        1 << (usize::BITS - 1 - hint.leading_zeros())
    }

    pub fn set_start(&mut self, start: u64) {
        self.start = start;
    }

    pub fn set_stop(&mut self, stop: u64) {
        self.stop = stop;
    }

    /// Segment size in bytes; validated when sieving starts.
    pub fn set_sieve_size(&mut self, sieve_size: usize) {
        self.sieve_size = sieve_size;
    }

    /// Pre-sieve bound, one of 13, 17, 19; validated when sieving starts.
    pub fn set_pre_sieve(&mut self, pre_sieve: u32) {
        self.pre_sieve = pre_sieve;
    }

    pub fn set_flags(&mut self, flags: u32) {
        self.flags = flags;
    }

    pub fn add_flags(&mut self, flags: u32) {
        self.flags |= flags;
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn stop(&self) -> u64 {
        self.stop
    }

    pub fn sieve_size(&self) -> usize {
        self.sieve_size
    }

    pub fn pre_sieve(&self) -> u32 {
        self.pre_sieve
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// Elapsed seconds of the last sieve call.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    fn is_count(&self, kind: usize) -> bool {
        self.flags & count_flag(kind) != 0
    }

    fn is_print(&self, kind: usize) -> bool {
        self.flags & print_flag(kind) != 0
    }

    /// Sieve [start, stop] and collect whatever the flags request.
    pub fn sieve(&mut self) -> Result<()> {
        self.counts = [0; 7];
        self.seconds = 0.0;
        if self.stop < self.start {
            return Ok(());
        }
        let time = Instant::now();

        for small in &SMALL_PRIMES {
            if small.first >= self.start && small.last <= self.stop {
                if self.is_count(small.kind) {
                    self.counts[small.kind] += 1;
                }
                if self.is_print(small.kind) {
                    println!("{}", small.text);
                }
            }
        }
        if self.stop >= 7 {
            let mut finder = PrimeFinder::new(self.flags, None);
            let mut sieve = Sieve::new(self.start, self.stop, self.sieve_size, self.pre_sieve)?;
            sieve.run(&mut finder)?;
            for (total, found) in self.counts.iter_mut().zip(finder.counts()) {
                *total += found;
            }
        }
        self.seconds = time.elapsed().as_secs_f64();
        Ok(())
    }

    fn count_kind(&mut self, start: u64, stop: u64, kind: usize) -> Result<u64> {
        self.start = start;
        self.stop = stop;
        self.flags = count_flag(kind);
        self.sieve()?;
        Ok(self.counts[kind])
    }

    pub fn count_primes(&mut self, start: u64, stop: u64) -> Result<u64> {
        self.count_kind(start, stop, 0)
    }

    pub fn count_twins(&mut self, start: u64, stop: u64) -> Result<u64> {
        self.count_kind(start, stop, 1)
    }

    pub fn count_triplets(&mut self, start: u64, stop: u64) -> Result<u64> {
        self.count_kind(start, stop, 2)
    }

    pub fn count_quadruplets(&mut self, start: u64, stop: u64) -> Result<u64> {
        self.count_kind(start, stop, 3)
    }

    pub fn count_quintuplets(&mut self, start: u64, stop: u64) -> Result<u64> {
        self.count_kind(start, stop, 4)
    }

    pub fn count_sextuplets(&mut self, start: u64, stop: u64) -> Result<u64> {
        self.count_kind(start, stop, 5)
    }

    pub fn count_septuplets(&mut self, start: u64, stop: u64) -> Result<u64> {
        self.count_kind(start, stop, 6)
    }

    fn print_kind(&mut self, start: u64, stop: u64, kind: usize) -> Result<()> {
        self.start = start;
        self.stop = stop;
        self.flags = print_flag(kind);
        self.sieve()
    }

    pub fn print_primes(&mut self, start: u64, stop: u64) -> Result<()> {
        self.print_kind(start, stop, 0)
    }

    pub fn print_twins(&mut self, start: u64, stop: u64) -> Result<()> {
        self.print_kind(start, stop, 1)
    }

    pub fn print_triplets(&mut self, start: u64, stop: u64) -> Result<()> {
        self.print_kind(start, stop, 2)
    }

    pub fn print_quadruplets(&mut self, start: u64, stop: u64) -> Result<()> {
        self.print_kind(start, stop, 3)
    }

    pub fn print_quintuplets(&mut self, start: u64, stop: u64) -> Result<()> {
        self.print_kind(start, stop, 4)
    }

    pub fn print_sextuplets(&mut self, start: u64, stop: u64) -> Result<()> {
        self.print_kind(start, stop, 5)
    }

    pub fn print_septuplets(&mut self, start: u64, stop: u64) -> Result<()> {
        self.print_kind(start, stop, 6)
    }

    /// Stream every prime in [start, stop] to `callback`, in order.
    pub fn generate_primes(
        &mut self,
        start: u64,
        stop: u64,
        mut callback: impl FnMut(u64),
    ) -> Result<()> {
        if stop < start {
            return Ok(());
        }
        for prime in [2u64, 3, 5] {
            if prime >= start && prime <= stop {
                callback(prime);
            }
        }
        if stop >= 7 {
            let mut finder = PrimeFinder::new(0, Some(&mut callback));
            let mut sieve = Sieve::new(start, stop, self.sieve_size, self.pre_sieve)?;
            sieve.run(&mut finder)?;
        }
        Ok(())
    }

    /// Count collected by the last sieve call, by tuplet size (1 = primes,
    /// 2 = twins, ..., 7 = septuplets).
    pub fn count(&self, k: usize) -> u64 {
        self.counts[k - 1]
    }

    pub fn prime_count(&self) -> u64 {
        self.counts[0]
    }

    pub fn twin_count(&self) -> u64 {
        self.counts[1]
    }

    pub fn triplet_count(&self) -> u64 {
        self.counts[2]
    }

    pub fn quadruplet_count(&self) -> u64 {
        self.counts[3]
    }

    pub fn quintuplet_count(&self) -> u64 {
        self.counts[4]
    }

    pub fn sextuplet_count(&self) -> u64 {
        self.counts[5]
    }

    pub fn septuplet_count(&self) -> u64 {
        self.counts[6]
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        PrimeSieve::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_first_primes() {
        let mut ps = PrimeSieve::new();
        assert_eq!(10, ps.count_primes(0, 30).unwrap());
        assert_eq!(25, ps.count_primes(0, 100).unwrap());
        assert_eq!(0, ps.count_primes(0, 0).unwrap());
        assert_eq!(0, ps.count_primes(0, 1).unwrap());
        assert_eq!(1, ps.count_primes(0, 2).unwrap());
        assert_eq!(1, ps.count_primes(2, 2).unwrap());
        assert_eq!(3, ps.count_primes(0, 6).unwrap());
        assert_eq!(1, ps.count_primes(3, 4).unwrap());
        assert_eq!(0, ps.count_primes(4, 4).unwrap());
    }

    #[test]
    fn counts_interval_boundaries() {
        let mut ps = PrimeSieve::new();
        assert_eq!(21, ps.count_primes(100, 200).unwrap());
        assert_eq!(1, ps.count_primes(17, 17).unwrap());
        assert_eq!(0, ps.count_primes(18, 18).unwrap());
        assert_eq!(0, ps.count_primes(100, 10).unwrap());
    }

    #[test]
    fn generates_primes_in_order() {
        let mut ps = PrimeSieve::new();
        let mut primes = Vec::new();
        ps.generate_primes(0, 30, |p| primes.push(p)).unwrap();
        assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29], primes);

        let mut primes = Vec::new();
        ps.generate_primes(80, 100, |p| primes.push(p)).unwrap();
        assert_eq!(vec![83, 89, 97], primes);

        let mut primes = Vec::new();
        ps.generate_primes(100, 200, |p| primes.push(p)).unwrap();
        assert_eq!(21, primes.len());
        assert_eq!(101, primes[0]);
        assert_eq!(199, *primes.last().unwrap());
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn counts_twins() {
        let mut ps = PrimeSieve::new();
        // (3,5) (5,7) (11,13) (17,19) (29,31) (41,43) (59,61) (71,73)
        assert_eq!(8, ps.count_twins(0, 100).unwrap());
        assert_eq!(35, ps.count_twins(0, 1000).unwrap());
        assert_eq!(8169, ps.count_twins(0, 1_000_000).unwrap());
        // both members must lie in range
        assert_eq!(1, ps.count_twins(11, 13).unwrap());
        assert_eq!(0, ps.count_twins(12, 13).unwrap());
        assert_eq!(0, ps.count_twins(11, 12).unwrap());
    }

    #[test]
    fn counts_small_tuplets() {
        let mut ps = PrimeSieve::new();
        assert_eq!(30, ps.count_triplets(0, 1000).unwrap());
        assert_eq!(2837, ps.count_triplets(0, 1_000_000).unwrap());
        assert_eq!(5, ps.count_quadruplets(0, 1000).unwrap());
        assert_eq!(166, ps.count_quadruplets(0, 1_000_000).unwrap());
        assert_eq!(65, ps.count_quintuplets(0, 1_000_000).unwrap());
    }

    #[test]
    fn counts_large_tuplets() {
        let mut ps = PrimeSieve::new();
        // (7,11,13,17,19,23) then (97,101,103,107,109,113)
        assert_eq!(2, ps.count_sextuplets(0, 150).unwrap());
        assert_eq!(18, ps.count_sextuplets(0, 10_000_000).unwrap());
        // (11,...,31) is the first septuplet of its pattern
        assert_eq!(1, ps.count_septuplets(0, 100).unwrap());
        assert_eq!(3, ps.count_septuplets(0, 10_000_000).unwrap());
    }

    #[test]
    fn sieve_with_flags_fills_counts() {
        let mut ps = PrimeSieve::new();
        ps.set_start(0);
        ps.set_stop(1000);
        ps.set_flags(
            PrimeSieve::COUNT_PRIMES | PrimeSieve::COUNT_TWINS | PrimeSieve::COUNT_TRIPLETS,
        );
        ps.sieve().unwrap();
        assert_eq!(168, ps.prime_count());
        assert_eq!(35, ps.twin_count());
        assert_eq!(30, ps.triplet_count());
        assert_eq!(168, ps.count(1));
        assert_eq!(35, ps.count(2));
        assert!(ps.seconds() >= 0.0);
    }

    #[test]
    fn repeated_sieving_is_idempotent() {
        let mut ps = PrimeSieve::new();
        let first = ps.count_primes(0, 250_000).unwrap();
        let second = ps.count_primes(0, 250_000).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn configuration_errors_propagate() {
        let mut ps = PrimeSieve::new();
        ps.set_sieve_size(12345);
        assert!(ps.count_primes(0, 100).is_err());
        // counts are reset, not partial
        assert_eq!(0, ps.prime_count());

        let mut ps = PrimeSieve::new();
        ps.set_pre_sieve(21);
        assert!(ps.count_primes(0, 100).is_err());
    }

    #[test]
    fn sieve_size_for_cache_hint() {
        assert_eq!(1 << 15, PrimeSieve::sieve_size_for_cache(None, None));
        assert_eq!(1 << 15, PrimeSieve::sieve_size_for_cache(Some(32 * 1024), None));
        assert_eq!(1 << 15, PrimeSieve::sieve_size_for_cache(Some(48 * 1024), None));
        assert_eq!(1 << 18, PrimeSieve::sieve_size_for_cache(None, Some(256 * 1024)));
        // clamped to the supported range
        assert_eq!(1 << 10, PrimeSieve::sieve_size_for_cache(Some(16), None));
        assert_eq!(1 << 22, PrimeSieve::sieve_size_for_cache(Some(1 << 30), None));
    }
}
