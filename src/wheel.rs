use crate::constants::NUMBERS_PER_BYTE;

/// Wheel factorization state machines for the modulo-30 and modulo-210
/// wheels.
///
/// A sieving prime crosses off its multiples `m = p * f` where the factor `f`
/// runs over the residues coprime to the wheel modulus; every other factor
/// would produce a multiple of 2, 3, 5 (or 7) that the byte encoding does not
/// even store. The precomputed tables below advance a prime from one such
/// multiple to the next without any division:
///
/// * `unset_bit` is the AND-mask clearing the bit of the current multiple,
/// * `next_multiple_factor` is the factor gap to the next coprime multiple,
/// * `correct` fixes up the byte offset, since `p * gap` is rarely a whole
///   number of bytes,
/// * `next` is the wheel index of the following table entry.
///
/// One step: `multiple_index += sieving_prime * factor + correct;
/// wheel_index = next`, where `sieving_prime = p / 30` is the prime in byte
/// units. Entries are grouped into one block per residue class of `p mod 30`,
/// so `wheel_index / POSITIONS` recovers the class and the class never
/// changes while stepping.
///
/// Table derivation: with `p = 30*q + r` and byte offsets counted as
/// `(m - low - 7) / 30`, the correction for a step `f -> f'` is
/// `(r*f' - 7)/30 - (r*f - 7)/30`, independent of `q`.

#[derive(Clone, Copy)]
pub(crate) struct WheelInit {
    pub next_multiple_factor: u8,
    pub wheel_index: u8,
}

#[derive(Clone, Copy)]
pub(crate) struct WheelElement {
    pub unset_bit: u8,
    pub next_multiple_factor: u8,
    pub correct: u8,
    pub next: u16,
}

/// Residue classes of sieving primes modulo 30, in block order.
pub(crate) const PRIME_RESIDUES: [u64; 8] = [1, 7, 11, 13, 17, 19, 23, 29];

/// Maps `p % 30` to its block index in the wheel tables.
const CLASS_OF_RESIDUE: [u8; 30] = [
    0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 3, 0, 0, 0, 4, 0, 5, 0, 0, 0, 6,
    0, 0, 0, 0, 0, 7,
];

/// Index of the first modulo-30 table entry of `prime`'s residue class,
/// positioned at factor 1. Used by the pre-sieve, which crosses off all
/// coprime multiples of a prime starting at the prime itself.
pub(crate) fn wheel30_class_start(prime: u64) -> u32 {
    u32::from(CLASS_OF_RESIDUE[(prime % 30) as usize]) * 8
}

/// A wheel flavor: the modulus, its coprime position count and the matching
/// initialization table. The cross-off tables themselves are accessed by the
/// engines directly (`WHEEL30`, `WHEEL210`).
pub(crate) struct WheelBasis {
    pub modulo: u64,
    pub positions: u32,
    init: &'static [WheelInit],
}

pub(crate) static MOD30_WHEEL: WheelBasis = WheelBasis {
    modulo: 30,
    positions: 8,
    init: &WHEEL30_INIT,
};

pub(crate) static MOD210_WHEEL: WheelBasis = WheelBasis {
    modulo: 210,
    positions: 48,
    init: &WHEEL210_INIT,
};

/// Largest factor gap in the modulo-210 tables; bounds how far a single step
/// can carry a multiple, and hence EratBig's horizon.
pub(crate) const MAX_FACTOR_210: u64 = 10;

impl WheelBasis {
    /// First multiple of `prime` at or above `max(prime^2, low + 7)` whose
    /// factor is coprime to the wheel modulus, decomposed into the byte
    /// offset relative to `low` and the wheel index. This is the only place
    /// where division happens; returns `None` when that multiple exceeds
    /// `stop` and the prime never strikes.
    ///
    /// `low` must be congruent 0 modulo 30.
    pub fn first_multiple(&self, prime: u64, low: u64, stop: u64) -> Option<(u64, u32)> {
        let quotient = ((low + 6) / prime + 1).max(prime);
        let init = &self.init[(quotient % self.modulo) as usize];
        let multiple = prime.checked_mul(quotient + u64::from(init.next_multiple_factor))?;
        if multiple > stop {
            return None;
        }
        let multiple_index = (multiple - low - 7) / NUMBERS_PER_BYTE;
        let class = u32::from(CLASS_OF_RESIDUE[(prime % 30) as usize]);
        let wheel_index = class * self.positions + u32::from(init.wheel_index);
        Some((multiple_index, wheel_index))
    }
}

/// Sieving prime triple, packed to 8 bytes: the prime in byte units plus the
/// multiple index (23 bits) and wheel index (9 bits).
#[derive(Clone, Copy, Default)]
pub(crate) struct WheelPrime {
    indexes: u32,
    sieving_prime: u32,
}

const MULTIPLE_INDEX_BITS: u32 = 23;
const MULTIPLE_INDEX_MASK: u32 = (1 << MULTIPLE_INDEX_BITS) - 1;

impl WheelPrime {
    #[inline]
    pub fn new(sieving_prime: u32, multiple_index: u32, wheel_index: u32) -> WheelPrime {
        debug_assert!(multiple_index <= MULTIPLE_INDEX_MASK);
        debug_assert!(wheel_index < 8 * 48);
        WheelPrime {
            indexes: multiple_index | (wheel_index << MULTIPLE_INDEX_BITS),
            sieving_prime,
        }
    }

    /// The prime divided by 30, i.e. its byte stride.
    #[inline]
    pub fn sieving_prime(self) -> u32 {
        self.sieving_prime
    }

    #[inline]
    pub fn multiple_index(self) -> u32 {
        self.indexes & MULTIPLE_INDEX_MASK
    }

    #[inline]
    pub fn wheel_index(self) -> u32 {
        self.indexes >> MULTIPLE_INDEX_BITS
    }

    #[inline]
    pub fn set_indexes(&mut self, multiple_index: u32, wheel_index: u32) {
        debug_assert!(multiple_index <= MULTIPLE_INDEX_MASK);
        self.indexes = multiple_index | (wheel_index << MULTIPLE_INDEX_BITS);
    }
}

pub(crate) static WHEEL30_INIT: [WheelInit; 30] = [
    WheelInit { next_multiple_factor: 1, wheel_index: 0 }, WheelInit { next_multiple_factor: 0, wheel_index: 0 }, WheelInit { next_multiple_factor: 5, wheel_index: 1 },
    WheelInit { next_multiple_factor: 4, wheel_index: 1 }, WheelInit { next_multiple_factor: 3, wheel_index: 1 }, WheelInit { next_multiple_factor: 2, wheel_index: 1 },
    WheelInit { next_multiple_factor: 1, wheel_index: 1 }, WheelInit { next_multiple_factor: 0, wheel_index: 1 }, WheelInit { next_multiple_factor: 3, wheel_index: 2 },
    WheelInit { next_multiple_factor: 2, wheel_index: 2 }, WheelInit { next_multiple_factor: 1, wheel_index: 2 }, WheelInit { next_multiple_factor: 0, wheel_index: 2 },
    WheelInit { next_multiple_factor: 1, wheel_index: 3 }, WheelInit { next_multiple_factor: 0, wheel_index: 3 }, WheelInit { next_multiple_factor: 3, wheel_index: 4 },
    WheelInit { next_multiple_factor: 2, wheel_index: 4 }, WheelInit { next_multiple_factor: 1, wheel_index: 4 }, WheelInit { next_multiple_factor: 0, wheel_index: 4 },
    WheelInit { next_multiple_factor: 1, wheel_index: 5 }, WheelInit { next_multiple_factor: 0, wheel_index: 5 }, WheelInit { next_multiple_factor: 3, wheel_index: 6 },
    WheelInit { next_multiple_factor: 2, wheel_index: 6 }, WheelInit { next_multiple_factor: 1, wheel_index: 6 }, WheelInit { next_multiple_factor: 0, wheel_index: 6 },
    WheelInit { next_multiple_factor: 5, wheel_index: 7 }, WheelInit { next_multiple_factor: 4, wheel_index: 7 }, WheelInit { next_multiple_factor: 3, wheel_index: 7 },
    WheelInit { next_multiple_factor: 2, wheel_index: 7 }, WheelInit { next_multiple_factor: 1, wheel_index: 7 }, WheelInit { next_multiple_factor: 0, wheel_index: 7 },
];

pub(crate) static WHEEL210_INIT: [WheelInit; 210] = [
    WheelInit { next_multiple_factor: 1, wheel_index: 0 }, WheelInit { next_multiple_factor: 0, wheel_index: 0 }, WheelInit { next_multiple_factor: 9, wheel_index: 1 },
    WheelInit { next_multiple_factor: 8, wheel_index: 1 }, WheelInit { next_multiple_factor: 7, wheel_index: 1 }, WheelInit { next_multiple_factor: 6, wheel_index: 1 },
    WheelInit { next_multiple_factor: 5, wheel_index: 1 }, WheelInit { next_multiple_factor: 4, wheel_index: 1 }, WheelInit { next_multiple_factor: 3, wheel_index: 1 },
    WheelInit { next_multiple_factor: 2, wheel_index: 1 }, WheelInit { next_multiple_factor: 1, wheel_index: 1 }, WheelInit { next_multiple_factor: 0, wheel_index: 1 },
    WheelInit { next_multiple_factor: 1, wheel_index: 2 }, WheelInit { next_multiple_factor: 0, wheel_index: 2 }, WheelInit { next_multiple_factor: 3, wheel_index: 3 },
    WheelInit { next_multiple_factor: 2, wheel_index: 3 }, WheelInit { next_multiple_factor: 1, wheel_index: 3 }, WheelInit { next_multiple_factor: 0, wheel_index: 3 },
    WheelInit { next_multiple_factor: 1, wheel_index: 4 }, WheelInit { next_multiple_factor: 0, wheel_index: 4 }, WheelInit { next_multiple_factor: 3, wheel_index: 5 },
    WheelInit { next_multiple_factor: 2, wheel_index: 5 }, WheelInit { next_multiple_factor: 1, wheel_index: 5 }, WheelInit { next_multiple_factor: 0, wheel_index: 5 },
    WheelInit { next_multiple_factor: 5, wheel_index: 6 }, WheelInit { next_multiple_factor: 4, wheel_index: 6 }, WheelInit { next_multiple_factor: 3, wheel_index: 6 },
    WheelInit { next_multiple_factor: 2, wheel_index: 6 }, WheelInit { next_multiple_factor: 1, wheel_index: 6 }, WheelInit { next_multiple_factor: 0, wheel_index: 6 },
    WheelInit { next_multiple_factor: 1, wheel_index: 7 }, WheelInit { next_multiple_factor: 0, wheel_index: 7 }, WheelInit { next_multiple_factor: 5, wheel_index: 8 },
    WheelInit { next_multiple_factor: 4, wheel_index: 8 }, WheelInit { next_multiple_factor: 3, wheel_index: 8 }, WheelInit { next_multiple_factor: 2, wheel_index: 8 },
    WheelInit { next_multiple_factor: 1, wheel_index: 8 }, WheelInit { next_multiple_factor: 0, wheel_index: 8 }, WheelInit { next_multiple_factor: 3, wheel_index: 9 },
    WheelInit { next_multiple_factor: 2, wheel_index: 9 }, WheelInit { next_multiple_factor: 1, wheel_index: 9 }, WheelInit { next_multiple_factor: 0, wheel_index: 9 },
    WheelInit { next_multiple_factor: 1, wheel_index: 10 }, WheelInit { next_multiple_factor: 0, wheel_index: 10 }, WheelInit { next_multiple_factor: 3, wheel_index: 11 },
    WheelInit { next_multiple_factor: 2, wheel_index: 11 }, WheelInit { next_multiple_factor: 1, wheel_index: 11 }, WheelInit { next_multiple_factor: 0, wheel_index: 11 },
    WheelInit { next_multiple_factor: 5, wheel_index: 12 }, WheelInit { next_multiple_factor: 4, wheel_index: 12 }, WheelInit { next_multiple_factor: 3, wheel_index: 12 },
    WheelInit { next_multiple_factor: 2, wheel_index: 12 }, WheelInit { next_multiple_factor: 1, wheel_index: 12 }, WheelInit { next_multiple_factor: 0, wheel_index: 12 },
    WheelInit { next_multiple_factor: 5, wheel_index: 13 }, WheelInit { next_multiple_factor: 4, wheel_index: 13 }, WheelInit { next_multiple_factor: 3, wheel_index: 13 },
    WheelInit { next_multiple_factor: 2, wheel_index: 13 }, WheelInit { next_multiple_factor: 1, wheel_index: 13 }, WheelInit { next_multiple_factor: 0, wheel_index: 13 },
    WheelInit { next_multiple_factor: 1, wheel_index: 14 }, WheelInit { next_multiple_factor: 0, wheel_index: 14 }, WheelInit { next_multiple_factor: 5, wheel_index: 15 },
    WheelInit { next_multiple_factor: 4, wheel_index: 15 }, WheelInit { next_multiple_factor: 3, wheel_index: 15 }, WheelInit { next_multiple_factor: 2, wheel_index: 15 },
    WheelInit { next_multiple_factor: 1, wheel_index: 15 }, WheelInit { next_multiple_factor: 0, wheel_index: 15 }, WheelInit { next_multiple_factor: 3, wheel_index: 16 },
    WheelInit { next_multiple_factor: 2, wheel_index: 16 }, WheelInit { next_multiple_factor: 1, wheel_index: 16 }, WheelInit { next_multiple_factor: 0, wheel_index: 16 },
    WheelInit { next_multiple_factor: 1, wheel_index: 17 }, WheelInit { next_multiple_factor: 0, wheel_index: 17 }, WheelInit { next_multiple_factor: 5, wheel_index: 18 },
    WheelInit { next_multiple_factor: 4, wheel_index: 18 }, WheelInit { next_multiple_factor: 3, wheel_index: 18 }, WheelInit { next_multiple_factor: 2, wheel_index: 18 },
    WheelInit { next_multiple_factor: 1, wheel_index: 18 }, WheelInit { next_multiple_factor: 0, wheel_index: 18 }, WheelInit { next_multiple_factor: 3, wheel_index: 19 },
    WheelInit { next_multiple_factor: 2, wheel_index: 19 }, WheelInit { next_multiple_factor: 1, wheel_index: 19 }, WheelInit { next_multiple_factor: 0, wheel_index: 19 },
    WheelInit { next_multiple_factor: 5, wheel_index: 20 }, WheelInit { next_multiple_factor: 4, wheel_index: 20 }, WheelInit { next_multiple_factor: 3, wheel_index: 20 },
    WheelInit { next_multiple_factor: 2, wheel_index: 20 }, WheelInit { next_multiple_factor: 1, wheel_index: 20 }, WheelInit { next_multiple_factor: 0, wheel_index: 20 },
    WheelInit { next_multiple_factor: 7, wheel_index: 21 }, WheelInit { next_multiple_factor: 6, wheel_index: 21 }, WheelInit { next_multiple_factor: 5, wheel_index: 21 },
    WheelInit { next_multiple_factor: 4, wheel_index: 21 }, WheelInit { next_multiple_factor: 3, wheel_index: 21 }, WheelInit { next_multiple_factor: 2, wheel_index: 21 },
    WheelInit { next_multiple_factor: 1, wheel_index: 21 }, WheelInit { next_multiple_factor: 0, wheel_index: 21 }, WheelInit { next_multiple_factor: 3, wheel_index: 22 },
    WheelInit { next_multiple_factor: 2, wheel_index: 22 }, WheelInit { next_multiple_factor: 1, wheel_index: 22 }, WheelInit { next_multiple_factor: 0, wheel_index: 22 },
    WheelInit { next_multiple_factor: 1, wheel_index: 23 }, WheelInit { next_multiple_factor: 0, wheel_index: 23 }, WheelInit { next_multiple_factor: 3, wheel_index: 24 },
    WheelInit { next_multiple_factor: 2, wheel_index: 24 }, WheelInit { next_multiple_factor: 1, wheel_index: 24 }, WheelInit { next_multiple_factor: 0, wheel_index: 24 },
    WheelInit { next_multiple_factor: 1, wheel_index: 25 }, WheelInit { next_multiple_factor: 0, wheel_index: 25 }, WheelInit { next_multiple_factor: 3, wheel_index: 26 },
    WheelInit { next_multiple_factor: 2, wheel_index: 26 }, WheelInit { next_multiple_factor: 1, wheel_index: 26 }, WheelInit { next_multiple_factor: 0, wheel_index: 26 },
    WheelInit { next_multiple_factor: 7, wheel_index: 27 }, WheelInit { next_multiple_factor: 6, wheel_index: 27 }, WheelInit { next_multiple_factor: 5, wheel_index: 27 },
    WheelInit { next_multiple_factor: 4, wheel_index: 27 }, WheelInit { next_multiple_factor: 3, wheel_index: 27 }, WheelInit { next_multiple_factor: 2, wheel_index: 27 },
    WheelInit { next_multiple_factor: 1, wheel_index: 27 }, WheelInit { next_multiple_factor: 0, wheel_index: 27 }, WheelInit { next_multiple_factor: 5, wheel_index: 28 },
    WheelInit { next_multiple_factor: 4, wheel_index: 28 }, WheelInit { next_multiple_factor: 3, wheel_index: 28 }, WheelInit { next_multiple_factor: 2, wheel_index: 28 },
    WheelInit { next_multiple_factor: 1, wheel_index: 28 }, WheelInit { next_multiple_factor: 0, wheel_index: 28 }, WheelInit { next_multiple_factor: 3, wheel_index: 29 },
    WheelInit { next_multiple_factor: 2, wheel_index: 29 }, WheelInit { next_multiple_factor: 1, wheel_index: 29 }, WheelInit { next_multiple_factor: 0, wheel_index: 29 },
    WheelInit { next_multiple_factor: 5, wheel_index: 30 }, WheelInit { next_multiple_factor: 4, wheel_index: 30 }, WheelInit { next_multiple_factor: 3, wheel_index: 30 },
    WheelInit { next_multiple_factor: 2, wheel_index: 30 }, WheelInit { next_multiple_factor: 1, wheel_index: 30 }, WheelInit { next_multiple_factor: 0, wheel_index: 30 },
    WheelInit { next_multiple_factor: 1, wheel_index: 31 }, WheelInit { next_multiple_factor: 0, wheel_index: 31 }, WheelInit { next_multiple_factor: 3, wheel_index: 32 },
    WheelInit { next_multiple_factor: 2, wheel_index: 32 }, WheelInit { next_multiple_factor: 1, wheel_index: 32 }, WheelInit { next_multiple_factor: 0, wheel_index: 32 },
    WheelInit { next_multiple_factor: 5, wheel_index: 33 }, WheelInit { next_multiple_factor: 4, wheel_index: 33 }, WheelInit { next_multiple_factor: 3, wheel_index: 33 },
    WheelInit { next_multiple_factor: 2, wheel_index: 33 }, WheelInit { next_multiple_factor: 1, wheel_index: 33 }, WheelInit { next_multiple_factor: 0, wheel_index: 33 },
    WheelInit { next_multiple_factor: 1, wheel_index: 34 }, WheelInit { next_multiple_factor: 0, wheel_index: 34 }, WheelInit { next_multiple_factor: 5, wheel_index: 35 },
    WheelInit { next_multiple_factor: 4, wheel_index: 35 }, WheelInit { next_multiple_factor: 3, wheel_index: 35 }, WheelInit { next_multiple_factor: 2, wheel_index: 35 },
    WheelInit { next_multiple_factor: 1, wheel_index: 35 }, WheelInit { next_multiple_factor: 0, wheel_index: 35 }, WheelInit { next_multiple_factor: 5, wheel_index: 36 },
    WheelInit { next_multiple_factor: 4, wheel_index: 36 }, WheelInit { next_multiple_factor: 3, wheel_index: 36 }, WheelInit { next_multiple_factor: 2, wheel_index: 36 },
    WheelInit { next_multiple_factor: 1, wheel_index: 36 }, WheelInit { next_multiple_factor: 0, wheel_index: 36 }, WheelInit { next_multiple_factor: 3, wheel_index: 37 },
    WheelInit { next_multiple_factor: 2, wheel_index: 37 }, WheelInit { next_multiple_factor: 1, wheel_index: 37 }, WheelInit { next_multiple_factor: 0, wheel_index: 37 },
    WheelInit { next_multiple_factor: 1, wheel_index: 38 }, WheelInit { next_multiple_factor: 0, wheel_index: 38 }, WheelInit { next_multiple_factor: 3, wheel_index: 39 },
    WheelInit { next_multiple_factor: 2, wheel_index: 39 }, WheelInit { next_multiple_factor: 1, wheel_index: 39 }, WheelInit { next_multiple_factor: 0, wheel_index: 39 },
    WheelInit { next_multiple_factor: 5, wheel_index: 40 }, WheelInit { next_multiple_factor: 4, wheel_index: 40 }, WheelInit { next_multiple_factor: 3, wheel_index: 40 },
    WheelInit { next_multiple_factor: 2, wheel_index: 40 }, WheelInit { next_multiple_factor: 1, wheel_index: 40 }, WheelInit { next_multiple_factor: 0, wheel_index: 40 },
    WheelInit { next_multiple_factor: 1, wheel_index: 41 }, WheelInit { next_multiple_factor: 0, wheel_index: 41 }, WheelInit { next_multiple_factor: 5, wheel_index: 42 },
    WheelInit { next_multiple_factor: 4, wheel_index: 42 }, WheelInit { next_multiple_factor: 3, wheel_index: 42 }, WheelInit { next_multiple_factor: 2, wheel_index: 42 },
    WheelInit { next_multiple_factor: 1, wheel_index: 42 }, WheelInit { next_multiple_factor: 0, wheel_index: 42 }, WheelInit { next_multiple_factor: 3, wheel_index: 43 },
    WheelInit { next_multiple_factor: 2, wheel_index: 43 }, WheelInit { next_multiple_factor: 1, wheel_index: 43 }, WheelInit { next_multiple_factor: 0, wheel_index: 43 },
    WheelInit { next_multiple_factor: 1, wheel_index: 44 }, WheelInit { next_multiple_factor: 0, wheel_index: 44 }, WheelInit { next_multiple_factor: 3, wheel_index: 45 },
    WheelInit { next_multiple_factor: 2, wheel_index: 45 }, WheelInit { next_multiple_factor: 1, wheel_index: 45 }, WheelInit { next_multiple_factor: 0, wheel_index: 45 },
    WheelInit { next_multiple_factor: 1, wheel_index: 46 }, WheelInit { next_multiple_factor: 0, wheel_index: 46 }, WheelInit { next_multiple_factor: 9, wheel_index: 47 },
    WheelInit { next_multiple_factor: 8, wheel_index: 47 }, WheelInit { next_multiple_factor: 7, wheel_index: 47 }, WheelInit { next_multiple_factor: 6, wheel_index: 47 },
    WheelInit { next_multiple_factor: 5, wheel_index: 47 }, WheelInit { next_multiple_factor: 4, wheel_index: 47 }, WheelInit { next_multiple_factor: 3, wheel_index: 47 },
    WheelInit { next_multiple_factor: 2, wheel_index: 47 }, WheelInit { next_multiple_factor: 1, wheel_index: 47 }, WheelInit { next_multiple_factor: 0, wheel_index: 47 },
];

pub(crate) static WHEEL30: [WheelElement; 64] = [
    // p % 30 == 1
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 1, next: 1 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 0, next: 2 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 0, next: 3 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 0, next: 4 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 5 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 0, next: 6 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 0, next: 7 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 0, next: 0 },
    // p % 30 == 7
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 1, next: 9 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 1, next: 10 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 11 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 1, next: 12 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 1, next: 13 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 1, next: 14 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 1, next: 15 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 8 },
    // p % 30 == 11
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 2, next: 17 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 1, next: 18 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 1, next: 19 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 20 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 0, next: 21 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 2, next: 22 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 23 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 16 },
    // p % 30 == 13
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 25 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 2, next: 26 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 27 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 2, next: 28 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 29 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 1, next: 30 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 3, next: 31 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 1, next: 24 },
    // p % 30 == 17
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 3, next: 33 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 34 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 35 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 2, next: 36 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 37 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 38 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 4, next: 39 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 32 },
    // p % 30 == 19
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 4, next: 41 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 2, next: 42 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 2, next: 43 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 2, next: 44 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 45 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 3, next: 46 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 4, next: 47 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 40 },
    // p % 30 == 23
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 5, next: 49 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 3, next: 50 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 51 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 52 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 53 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 3, next: 54 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 5, next: 55 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 48 },
    // p % 30 == 29
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 6, next: 57 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 4, next: 58 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 2, next: 59 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 4, next: 60 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 2, next: 61 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 4, next: 62 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 5, next: 63 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 56 },
];

pub(crate) static WHEEL210: [WheelElement; 384] = [
    // p % 30 == 1
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 10, correct: 1, next: 1 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 0, next: 2 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 0, next: 3 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 4 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 0, next: 5 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 0, next: 6 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 0, next: 7 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 1, next: 8 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 0, next: 9 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 0, next: 10 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 0, next: 11 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 0, next: 12 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 0, next: 13 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 0, next: 14 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 1, next: 15 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 0, next: 16 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 0, next: 17 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 0, next: 18 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 0, next: 19 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 0, next: 20 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 8, correct: 1, next: 21 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 0, next: 22 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 0, next: 23 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 0, next: 24 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 25 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 0, next: 26 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 8, correct: 0, next: 27 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 1, next: 28 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 0, next: 29 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 0, next: 30 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 31 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 0, next: 32 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 0, next: 33 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 0, next: 34 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 1, next: 35 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 0, next: 36 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 0, next: 37 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 38 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 0, next: 39 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 0, next: 40 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 0, next: 41 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 1, next: 42 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 0, next: 43 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 0, next: 44 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 0, next: 45 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 46 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 10, correct: 0, next: 47 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 0, next: 0 },
    // p % 30 == 7
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 10, correct: 2, next: 49 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 50 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 1, next: 51 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 1, next: 52 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 1, next: 53 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 1, next: 54 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 55 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 1, next: 56 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 1, next: 57 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 58 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 1, next: 59 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 2, next: 60 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 1, next: 61 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 62 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 1, next: 63 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 1, next: 64 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 65 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 2, next: 66 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 1, next: 67 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 1, next: 68 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 8, correct: 2, next: 69 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 1, next: 70 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 71 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 1, next: 72 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 1, next: 73 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 1, next: 74 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 8, correct: 2, next: 75 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 1, next: 76 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 1, next: 77 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 1, next: 78 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 1, next: 79 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 1, next: 80 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 1, next: 81 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 82 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 1, next: 83 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 1, next: 84 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 1, next: 85 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 1, next: 86 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 1, next: 87 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 1, next: 88 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 89 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 1, next: 90 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 1, next: 91 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 0, next: 92 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 1, next: 93 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 1, next: 94 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 10, correct: 2, next: 95 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 48 },
    // p % 30 == 11
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 10, correct: 3, next: 97 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 1, next: 98 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 99 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 0, next: 100 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 2, next: 101 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 102 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 103 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 2, next: 104 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 1, next: 105 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 1, next: 106 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 107 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 2, next: 108 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 109 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 110 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 2, next: 111 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 1, next: 112 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 1, next: 113 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 2, next: 114 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 2, next: 115 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 116 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 8, correct: 3, next: 117 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 1, next: 118 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 1, next: 119 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 120 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 0, next: 121 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 2, next: 122 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 8, correct: 3, next: 123 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 2, next: 124 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 1, next: 125 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 3, next: 126 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 0, next: 127 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 2, next: 128 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 129 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 130 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 2, next: 131 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 2, next: 132 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 133 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 0, next: 134 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 2, next: 135 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 136 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 137 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 2, next: 138 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 1, next: 139 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 1, next: 140 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 141 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 0, next: 142 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 10, correct: 4, next: 143 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 96 },
    // p % 30 == 13
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 10, correct: 4, next: 145 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 146 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 2, next: 147 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 148 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 1, next: 149 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 3, next: 150 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 1, next: 151 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 152 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 2, next: 153 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 154 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 2, next: 155 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 2, next: 156 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 3, next: 157 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 1, next: 158 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 159 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 2, next: 160 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 161 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 3, next: 162 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 1, next: 163 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 3, next: 164 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 8, correct: 3, next: 165 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 2, next: 166 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 167 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 2, next: 168 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 169 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 1, next: 170 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 8, correct: 4, next: 171 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 172 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 2, next: 173 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 3, next: 174 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 175 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 1, next: 176 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 3, next: 177 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 1, next: 178 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 179 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 3, next: 180 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 2, next: 181 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 182 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 1, next: 183 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 3, next: 184 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 1, next: 185 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 2, next: 186 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 2, next: 187 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 188 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 4, correct: 2, next: 189 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 190 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 10, correct: 4, next: 191 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 2, correct: 1, next: 144 },
    // p % 30 == 17
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 10, correct: 6, next: 193 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 194 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 2, next: 195 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 196 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 197 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 4, next: 198 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 199 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 3, next: 200 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 201 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 202 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 2, next: 203 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 3, next: 204 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 4, next: 205 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 206 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 3, next: 207 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 208 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 209 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 3, next: 210 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 211 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 4, next: 212 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 8, correct: 4, next: 213 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 214 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 215 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 2, next: 216 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 217 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 218 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 8, correct: 5, next: 219 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 3, next: 220 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 221 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 3, next: 222 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 223 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 224 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 4, next: 225 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 226 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 3, next: 227 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 4, next: 228 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 2, next: 229 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 230 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 2, next: 231 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 4, next: 232 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 233 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 3, next: 234 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 235 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 236 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 2, next: 237 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 1, next: 238 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 10, correct: 6, next: 239 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 192 },
    // p % 30 == 19
    WheelElement { unset_bit: 0xef, next_multiple_factor: 10, correct: 6, next: 241 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 2, next: 242 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 2, next: 243 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 244 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 3, next: 245 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 4, next: 246 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 247 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 4, next: 248 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 2, next: 249 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 2, next: 250 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 2, next: 251 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 4, next: 252 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 4, next: 253 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 254 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 4, next: 255 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 2, next: 256 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 2, next: 257 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 3, next: 258 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 3, next: 259 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 4, next: 260 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 8, correct: 5, next: 261 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 2, next: 262 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 2, next: 263 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 2, next: 264 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 265 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 3, next: 266 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 8, correct: 5, next: 267 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 4, next: 268 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 2, next: 269 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 4, next: 270 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 271 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 3, next: 272 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 4, next: 273 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 274 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 4, next: 275 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 4, next: 276 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 2, next: 277 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 278 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 4, correct: 3, next: 279 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 4, next: 280 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 281 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 4, next: 282 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 4, correct: 2, next: 283 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 2, correct: 2, next: 284 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 4, correct: 2, next: 285 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 2, correct: 1, next: 286 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 10, correct: 7, next: 287 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 2, correct: 1, next: 240 },
    // p % 30 == 23
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 10, correct: 8, next: 289 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 290 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 291 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 292 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 3, next: 293 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 5, next: 294 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 295 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 5, next: 296 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 3, next: 297 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 298 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 299 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 6, correct: 5, next: 300 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 5, next: 301 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 302 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 5, next: 303 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 3, next: 304 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 305 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 5, next: 306 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 3, next: 307 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 5, next: 308 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 8, correct: 6, next: 309 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 3, next: 310 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 311 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 312 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 313 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 3, next: 314 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 8, correct: 6, next: 315 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 5, next: 316 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 3, next: 317 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 4, next: 318 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 319 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 3, next: 320 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 5, next: 321 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 322 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 5, next: 323 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 6, correct: 4, next: 324 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 325 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 326 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 3, next: 327 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 5, next: 328 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 329 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 5, next: 330 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 3, next: 331 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 1, next: 332 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 4, correct: 3, next: 333 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 334 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 10, correct: 8, next: 335 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 2, correct: 1, next: 288 },
    // p % 30 == 29
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 10, correct: 10, next: 337 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 2, next: 338 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 4, next: 339 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 2, next: 340 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 4, next: 341 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 5, next: 342 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 343 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 6, next: 344 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 4, next: 345 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 2, next: 346 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 4, next: 347 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 6, correct: 6, next: 348 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 5, next: 349 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 350 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 6, next: 351 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 4, next: 352 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 2, next: 353 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 6, correct: 6, next: 354 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 4, next: 355 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 5, next: 356 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 8, correct: 8, next: 357 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 4, next: 358 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 2, next: 359 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 4, next: 360 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 2, next: 361 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 4, next: 362 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 8, correct: 7, next: 363 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 6, next: 364 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 4, next: 365 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 6, correct: 6, next: 366 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 2, next: 367 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 4, next: 368 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 5, next: 369 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 370 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 6, next: 371 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 6, correct: 6, next: 372 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 4, next: 373 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 2, next: 374 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 4, correct: 4, next: 375 },
    WheelElement { unset_bit: 0xfe, next_multiple_factor: 6, correct: 5, next: 376 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 377 },
    WheelElement { unset_bit: 0xbf, next_multiple_factor: 6, correct: 6, next: 378 },
    WheelElement { unset_bit: 0xdf, next_multiple_factor: 4, correct: 4, next: 379 },
    WheelElement { unset_bit: 0xef, next_multiple_factor: 2, correct: 2, next: 380 },
    WheelElement { unset_bit: 0xf7, next_multiple_factor: 4, correct: 4, next: 381 },
    WheelElement { unset_bit: 0xfb, next_multiple_factor: 2, correct: 2, next: 382 },
    WheelElement { unset_bit: 0xfd, next_multiple_factor: 10, correct: 9, next: 383 },
    WheelElement { unset_bit: 0x7f, next_multiple_factor: 2, correct: 2, next: 336 },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    /// Cross off multiples of `prime` in a fresh [0, 30*len + 1] window by
    /// stepping the wheel, then compare against trial division.
    fn check_wheel(basis: &WheelBasis, table: &[WheelElement], prime: u64, len: usize) {
        let stop = len as u64 * 30 + 1;
        let mut sieve = vec![0xffu8; len];
        if let Some((multiple_index, wheel_index)) = basis.first_multiple(prime, 0, stop) {
            let q = prime / 30;
            let mut mi = multiple_index as usize;
            let mut wi = wheel_index as usize;
            while mi < len {
                let e = &table[wi];
                sieve[mi] &= e.unset_bit;
                mi += q as usize * e.next_multiple_factor as usize + e.correct as usize;
                wi = e.next as usize;
            }
        }

        let mut expected = vec![0xffu8; len];
        let mut factor = prime;
        loop {
            let multiple = prime * factor;
            if multiple > stop {
                break;
            }
            if gcd(factor, basis.modulo) == 1 {
                let byte = ((multiple - 7) / 30) as usize;
                let bit = BIT_VALUES_TEST
                    .iter()
                    .position(|&v| v == multiple % 30 || (v == 31 && multiple % 30 == 1))
                    .unwrap();
                if byte < len {
                    expected[byte] &= !(1u8 << bit);
                }
            }
            factor += 1;
        }
        assert_eq!(expected, sieve, "prime {} modulo {}", prime, basis.modulo);
    }

    const BIT_VALUES_TEST: [u64; 8] = [7, 11, 13, 17, 19, 23, 29, 31];

    #[test]
    fn wheel30_strikes_match_trial_division() {
        for prime in [7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 97, 101, 149] {
            check_wheel(&MOD30_WHEEL, &WHEEL30, prime, 500);
        }
    }

    #[test]
    fn wheel210_strikes_match_trial_division() {
        for prime in [11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 97, 101, 149, 151] {
            check_wheel(&MOD210_WHEEL, &WHEEL210, prime, 500);
        }
    }

    #[test]
    fn first_multiple_at_least_prime_squared() {
        // 7^2 = 49 -> byte (49-7)/30 = 1
        let (mi, wi) = MOD30_WHEEL.first_multiple(7, 0, 1000).unwrap();
        assert_eq!(1, mi);
        assert_eq!(8, wi); // class of 7, position 0
        // first multiple beyond stop: prime never strikes
        assert!(MOD30_WHEEL.first_multiple(31, 0, 960).is_none());
        assert!(MOD30_WHEEL.first_multiple(31, 0, 961).is_some());
    }

    #[test]
    fn first_multiple_above_segment_base() {
        // first coprime multiple of 7 at or above 1000 is 7*143 = 1001,
        // but 143 = 11*13 is coprime to 30, so it is 1001 for the mod-30
        // wheel; the mod-210 wheel skips 7*7k factors only.
        let (mi, _) = MOD30_WHEEL.first_multiple(7, 990, 10_000).unwrap();
        assert_eq!((1001 - 990 - 7) / 30, mi);
        // 31 * 32 = 992 -> factor 32 shares a factor 2, next coprime is 37
        let (mi, _) = MOD30_WHEEL.first_multiple(31, 990, 10_000).unwrap();
        assert_eq!((31 * 37 - 990 - 7) / 30, mi);
    }

    #[test]
    fn wheel_prime_packing_round_trips() {
        let mut wp = WheelPrime::new(12_345, (1 << 23) - 1, 383);
        assert_eq!(12_345, wp.sieving_prime());
        assert_eq!((1 << 23) - 1, wp.multiple_index());
        assert_eq!(383, wp.wheel_index());
        wp.set_indexes(7, 0);
        assert_eq!(7, wp.multiple_index());
        assert_eq!(0, wp.wheel_index());
        assert_eq!(12_345, wp.sieving_prime());
    }

    #[test]
    fn max_factor_covers_tables() {
        let max30 = WHEEL30.iter().map(|e| e.next_multiple_factor).max().unwrap();
        let max210 = WHEEL210.iter().map(|e| e.next_multiple_factor).max().unwrap();
        assert_eq!(6, max30);
        assert_eq!(MAX_FACTOR_210, u64::from(max210));
    }
}
