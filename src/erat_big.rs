use crate::constants::{BUCKETS_PER_ALLOC, BUCKET_LEN, NUMBERS_PER_BYTE};
use crate::error::{Result, SieveError};
use crate::wheel::{WheelPrime, MAX_FACTOR_210, WHEEL210};

const NIL: u32 = u32::MAX;

/// Fixed-capacity array of sieving-prime triples, chained into per-segment
/// lists through `next`.
struct Bucket {
    len: u32,
    next: u32,
    entries: [WheelPrime; BUCKET_LEN],
}

impl Bucket {
    fn empty() -> Bucket {
        Bucket {
            len: 0,
            next: NIL,
            entries: [WheelPrime::default(); BUCKET_LEN],
        }
    }

    #[inline]
    fn push(&mut self, wp: WheelPrime) -> bool {
        if self.len as usize == BUCKET_LEN {
            return false;
        }
        self.entries[self.len as usize] = wp;
        self.len += 1;
        true
    }
}

/// Cross-off engine for big sieving primes, whose next multiple typically
/// falls several segments ahead.
///
/// Per segment the cost is routing, not bit clearing: each prime strikes at
/// most once, and the work is deciding *which* segment its next multiple
/// lands in. Primes are therefore bucket-sorted by target segment:
/// `lists[k]` chains the buckets of primes striking `k` segments from now,
/// and after a segment the array rotates left by one. Emptied buckets return
/// to the `stock` free list; memory is only ever acquired in slabs of
/// `BUCKETS_PER_ALLOC` buckets, registered in `slabs` and released on drop.
pub struct EratBig {
    lists: Vec<u32>,
    stock: u32,
    slabs: Vec<Vec<Bucket>>,
    log2_sieve_size: u32,
    modulo_sieve_size: u32,
}

impl EratBig {
    /// `sieve_size` must be a power of two (validated by the driver).
    /// The list array is sized so that one wheel step of the largest possible
    /// sieving prime (`sqrt_stop`) stays within it.
    pub fn new(sieve_size: usize, sqrt_stop: u64) -> Result<EratBig> {
        debug_assert!(sieve_size.is_power_of_two());
        let log2_sieve_size = sieve_size.trailing_zeros();
        let max_sieving_prime = sqrt_stop / NUMBERS_PER_BYTE;
        let max_next_multiple = max_sieving_prime * MAX_FACTOR_210 + MAX_FACTOR_210;
        let max_multiple_index = (sieve_size as u64 - 1) + max_next_multiple;
        let size = (max_multiple_index >> log2_sieve_size) + 1;

        let mut big = EratBig {
            lists: vec![NIL; size as usize],
            stock: NIL,
            slabs: Vec::new(),
            log2_sieve_size,
            modulo_sieve_size: (sieve_size - 1) as u32,
        };
        // every list starts with one empty bucket so store never sees NIL
        for segment in 0..big.lists.len() {
            big.push_bucket(segment)?;
        }
        Ok(big)
    }

    #[inline]
    fn bucket(&self, index: u32) -> &Bucket {
        &self.slabs[index as usize / BUCKETS_PER_ALLOC][index as usize % BUCKETS_PER_ALLOC]
    }

    #[inline]
    fn bucket_mut(&mut self, index: u32) -> &mut Bucket {
        &mut self.slabs[index as usize / BUCKETS_PER_ALLOC][index as usize % BUCKETS_PER_ALLOC]
    }

    /// Move an empty bucket from the stock to the front of `lists[segment]`,
    /// allocating a new slab if the stock has run dry.
    fn push_bucket(&mut self, segment: usize) -> Result<()> {
        if self.stock == NIL {
            self.allocate_slab()?;
        }
        let bucket = self.stock;
        self.stock = self.bucket(bucket).next;
        let head = self.lists[segment];
        let b = self.bucket_mut(bucket);
        b.next = head;
        self.lists[segment] = bucket;
        Ok(())
    }

    fn allocate_slab(&mut self) -> Result<()> {
        let base = (self.slabs.len() * BUCKETS_PER_ALLOC) as u32;
        let mut slab: Vec<Bucket> = Vec::new();
        slab.try_reserve_exact(BUCKETS_PER_ALLOC)?;
        for i in 0..BUCKETS_PER_ALLOC as u32 {
            let mut bucket = Bucket::empty();
            bucket.next = if i + 1 < BUCKETS_PER_ALLOC as u32 {
                base + i + 1
            } else {
                NIL
            };
            slab.push(bucket);
        }
        self.slabs.push(slab);
        self.stock = base;
        Ok(())
    }

    /// Add a new sieving prime; `multiple_index` is relative to the current
    /// segment base and selects the bucket list of the segment its next
    /// multiple falls in.
    pub fn store(&mut self, prime: u64, multiple_index: u64, wheel_index: u32) -> Result<()> {
        debug_assert!(multiple_index <= u64::from(u32::MAX));
        let multiple_index = multiple_index as u32;
        let segment = (multiple_index >> self.log2_sieve_size) as usize;
        let multiple_index = multiple_index & self.modulo_sieve_size;
        let wp = WheelPrime::new(
            (prime / NUMBERS_PER_BYTE) as u32,
            multiple_index,
            wheel_index,
        );
        self.store_packed(segment, wp)
    }

    fn store_packed(&mut self, segment: usize, wp: WheelPrime) -> Result<()> {
        let head = *self
            .lists
            .get(segment)
            .ok_or(SieveError::Invariant("sieving prime beyond bucket horizon"))?;
        if !self.bucket_mut(head).push(wp) {
            self.push_bucket(segment)?;
            let head = self.lists[segment];
            let stored = self.bucket_mut(head).push(wp);
            debug_assert!(stored);
        }
        Ok(())
    }

    /// Cross off the current segment's multiples and re-route each prime to
    /// the bucket list of its next multiple, then rotate the lists so the
    /// next segment's list becomes current.
    pub fn cross_off(&mut self, sieve: &mut [u8]) -> Result<()> {
        loop {
            let head = self.lists[0];
            let b = self.bucket(head);
            if b.len == 0 && b.next == NIL {
                break;
            }
            // detach the chain; a fresh head catches primes routed back into
            // the current segment, and the outer loop drains them too
            self.lists[0] = NIL;
            self.push_bucket(0)?;
            let mut chain = head;
            while chain != NIL {
                let next = self.bucket(chain).next;
                self.cross_off_bucket(chain, sieve)?;
                let stock = self.stock;
                let b = self.bucket_mut(chain);
                b.len = 0;
                b.next = stock;
                self.stock = chain;
                chain = next;
            }
        }
        // the drained current slot moves to the back: lists[1] is now current
        self.lists.rotate_left(1);
        Ok(())
    }

    /// Two triples per iteration to break the dependency chain on
    /// (multiple_index, wheel_index); any tail triple is handled scalarly.
    fn cross_off_bucket(&mut self, index: u32, sieve: &mut [u8]) -> Result<()> {
        let len = self.bucket(index).len as usize;
        let mut i = 0;
        while i + 2 <= len {
            let wp0 = self.bucket(index).entries[i];
            let wp1 = self.bucket(index).entries[i + 1];
            let (mi0, wi0) = unset_and_step(sieve, wp0);
            let (mi1, wi1) = unset_and_step(sieve, wp1);
            self.route(wp0.sieving_prime(), mi0, wi0)?;
            self.route(wp1.sieving_prime(), mi1, wi1)?;
            i += 2;
        }
        if i < len {
            let wp = self.bucket(index).entries[i];
            let (mi, wi) = unset_and_step(sieve, wp);
            self.route(wp.sieving_prime(), mi, wi)?;
        }
        Ok(())
    }

    #[inline]
    fn route(&mut self, sieving_prime: u32, multiple_index: u32, wheel_index: u32) -> Result<()> {
        let segment = (multiple_index >> self.log2_sieve_size) as usize;
        let multiple_index = multiple_index & self.modulo_sieve_size;
        self.store_packed(segment, WheelPrime::new(sieving_prime, multiple_index, wheel_index))
    }
}

/// One wheel step: clear the current multiple's bit, return the prime's new
/// (multiple_index, wheel_index) before segment splitting.
#[inline]
fn unset_and_step(sieve: &mut [u8], wp: WheelPrime) -> (u32, u32) {
    let e = &WHEEL210[wp.wheel_index() as usize];
    let mi = wp.multiple_index() as usize;
    sieve[mi] &= e.unset_bit;
    let mi = mi as u32 + wp.sieving_prime() * u32::from(e.next_multiple_factor) + u32::from(e.correct);
    (mi, u32::from(e.next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::MOD210_WHEEL;

    fn reference_segment(primes: &[u64], low: u64, len: usize) -> Vec<u8> {
        const BIT_VALUES: [u64; 8] = [7, 11, 13, 17, 19, 23, 29, 31];
        let mut expected = vec![0xffu8; len];
        for (byte, slot) in expected.iter_mut().enumerate() {
            for (bit, &offset) in BIT_VALUES.iter().enumerate() {
                let value = low + byte as u64 * 30 + offset;
                for &p in primes {
                    if value % p == 0 && value >= p * p && (value / p) % 7 != 0 {
                        *slot &= !(1u8 << bit);
                    }
                }
            }
        }
        expected
    }

    #[test]
    fn routes_primes_through_bucket_lists() {
        // a tiny segment forces every prime through multi-segment routing
        let len = 64usize;
        let segments = 600;
        let stop = (len * segments) as u64 * 30 + 1;
        // primes larger than 2 * len bytes: EratBig territory
        let primes = [131u64, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211];

        let mut erat = EratBig::new(len, 211).unwrap();
        let mut pending = primes.iter().copied().peekable();
        for s in 0..segments {
            let low = (s * len) as u64 * 30;
            let high = low + len as u64 * 30 + 1;
            // a prime enters once its square is within reach, like the driver
            while let Some(&p) = pending.peek() {
                if p * p > high {
                    break;
                }
                let (mi, wi) = MOD210_WHEEL.first_multiple(p, low, stop).unwrap();
                erat.store(p, mi, wi).unwrap();
                pending.next();
            }
            let mut sieve = vec![0xffu8; len];
            erat.cross_off(&mut sieve).unwrap();

            let inserted: Vec<u64> = primes.iter().copied().filter(|&p| p * p <= high).collect();
            assert_eq!(reference_segment(&inserted, low, len), sieve, "segment {}", s);
        }
    }

    #[test]
    fn bucket_overflow_allocates_from_stock() {
        // more entries than one bucket holds, all targeting the same segment
        let len = 1usize << 10;
        let mut erat = EratBig::new(len, 100_000).unwrap();
        let stored = BUCKET_LEN as u32 + 10;
        for k in 0..stored {
            let mi = len as u64 + u64::from(k % len as u32);
            erat.store(90 * 30 + 1, mi, 0).unwrap();
        }
        let mut total = 0u32;
        for &head in &erat.lists {
            let mut idx = head;
            while idx != NIL {
                total += erat.bucket(idx).len;
                idx = erat.bucket(idx).next;
            }
        }
        assert_eq!(stored, total);
        // overflow drew from the stock, never dropped an entry
        assert!(total > BUCKET_LEN as u32);
    }

    #[test]
    fn rotation_keeps_tail_slot_usable() {
        let len = 1usize << 10;
        let mut erat = EratBig::new(len, 50_000).unwrap();
        let lists = erat.lists.len();
        let mut sieve = vec![0xffu8; len];
        // rotating through more segments than there are lists must keep
        // every slot holding a valid empty bucket
        for _ in 0..lists * 3 {
            erat.cross_off(&mut sieve).unwrap();
            for &head in &erat.lists {
                assert_ne!(NIL, head);
                assert_eq!(0, erat.bucket(head).len);
            }
        }
    }
}
