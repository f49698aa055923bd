use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::Result;
use crate::prime_sieve::PrimeSieve;

/// Sub-intervals are cut just past multiples of the wheel period times the
/// byte stride: a boundary of `k * ALIGN + 1` keeps every k-tuplet pattern
/// inside a single worker's range, since no pattern spans the gap from a
/// byte's offset-31 candidate to the next byte's offset-7 one. A cut at a
/// plain multiple of 30 would split the (29, 31) twin across two workers
/// and lose it.
const PARTITION_ALIGN: u64 = 210 * 30;

/// Don't bother splitting tiny ranges; a worker should outlive its setup
/// (pre-sieve pattern, nested sieving-prime generation).
const MIN_CHUNK: u64 = PARTITION_ALIGN * 64;

/// Count primes and k-tuplets in [start, stop] with one single-threaded
/// sieve per worker, each over a disjoint sub-interval. The engines share
/// nothing; only the per-interval counts are combined. Every worker uses
/// the given segment size and pre-sieve bound, validated when it starts
/// sieving.
pub fn count_parallel(
    start: u64,
    stop: u64,
    flags: u32,
    sieve_size: usize,
    pre_sieve: u32,
    num_threads: usize,
) -> Result<[u64; 7]> {
    if stop < start {
        return Ok([0; 7]);
    }

    let num_threads = num_threads.max(1);
    let chunk = chunk_size(stop - start + 1, num_threads);
    let mut ranges = Vec::new();
    let mut low = start;
    while low <= stop {
        let aligned = low.saturating_add(chunk) / PARTITION_ALIGN * PARTITION_ALIGN + 1;
        let high = stop.min(aligned);
        ranges.push((low, high));
        if high == stop {
            break;
        }
        low = high + 1;
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .expect("failed to build thread pool");

    let counts = pool.install(|| {
        ranges
            .par_iter()
            .map(|&(low, high)| -> Result<[u64; 7]> {
                let mut ps = PrimeSieve::new();
                ps.set_start(low);
                ps.set_stop(high);
                ps.set_flags(flags);
                ps.set_sieve_size(sieve_size);
                ps.set_pre_sieve(pre_sieve);
                ps.sieve()?;
                Ok(std::array::from_fn(|k| ps.count(k + 1)))
            })
            .try_reduce(|| [0; 7], |a, b| Ok(std::array::from_fn(|k| a[k] + b[k])))
    })?;
    Ok(counts)
}

/// Count primes in [start, stop] across `num_threads` workers.
pub fn count_primes_parallel(
    start: u64,
    stop: u64,
    sieve_size: usize,
    pre_sieve: u32,
    num_threads: usize,
) -> Result<u64> {
    let counts = count_parallel(
        start,
        stop,
        PrimeSieve::COUNT_PRIMES,
        sieve_size,
        pre_sieve,
        num_threads,
    )?;
    Ok(counts[0])
}

fn chunk_size(interval: u64, num_threads: usize) -> u64 {
    // a few chunks per thread evens out the load between workers
    let target = interval / (num_threads as u64 * 4).max(1);
    let aligned = target / PARTITION_ALIGN * PARTITION_ALIGN;
    aligned.max(MIN_CHUNK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_PRE_SIEVE, DEFAULT_SIEVE_BYTES};
    use crate::error::SieveError;

    fn count_default(start: u64, stop: u64, num_threads: usize) -> Result<u64> {
        count_primes_parallel(start, stop, DEFAULT_SIEVE_BYTES, DEFAULT_PRE_SIEVE, num_threads)
    }

    #[test]
    fn matches_serial_counts() {
        let mut ps = PrimeSieve::new();
        let serial = ps.count_primes(0, 2_000_000).unwrap();
        assert_eq!(serial, count_default(0, 2_000_000, 4).unwrap());
        assert_eq!(serial, count_default(0, 2_000_000, 1).unwrap());
    }

    #[test]
    fn workers_honor_sieve_configuration() {
        let mut ps = PrimeSieve::new();
        let serial = ps.count_primes(0, 2_000_000).unwrap();
        assert_eq!(
            serial,
            count_primes_parallel(0, 2_000_000, 1 << 10, 13, 4).unwrap()
        );
        // a bad segment size fails the same way it does serially
        assert!(matches!(
            count_primes_parallel(0, 2_000_000, 12345, 19, 4),
            Err(SieveError::InvalidSieveSize { .. })
        ));
    }

    #[test]
    fn splits_do_not_lose_boundary_tuplets() {
        // twins crossing a chunk boundary must not be counted by either side
        let counts = count_parallel(
            0,
            1_000_000,
            PrimeSieve::COUNT_PRIMES | PrimeSieve::COUNT_TWINS,
            DEFAULT_SIEVE_BYTES,
            DEFAULT_PRE_SIEVE,
            8,
        )
        .unwrap();
        assert_eq!(78498, counts[0]);
        // serial twin count for comparison
        let mut ps = PrimeSieve::new();
        let twins = ps.count_twins(0, 1_000_000).unwrap();
        assert_eq!(twins, counts[1]);
    }

    #[test]
    fn empty_range() {
        assert_eq!(0, count_default(100, 10, 4).unwrap());
    }
}
