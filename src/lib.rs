//! Segmented sieve of Eratosthenes with wheel factorization, generating the
//! primes and prime k-tuplets (twins, triplets, ..., septuplets) in an
//! inclusive interval [start, stop] up to 2^64 - 2^32.
//!
//! The sieve stores only the candidates coprime to 30, eight per byte, and
//! walks a cache-sized window over the range. Per window, composites of the
//! tiny primes are stamped from a precomputed pattern; the remaining sieving
//! primes are crossed off by three engines picked per prime by size class,
//! the largest of which bucket-sorts its primes by the segment their next
//! multiple falls in.
//!
//!     use primeseg::PrimeSieve;
//!
//!     let mut ps = PrimeSieve::new();
//!     assert_eq!(78498, ps.count_primes(0, 1_000_000).unwrap());
//!
//!     let mut primes = vec![];
//!     ps.generate_primes(80, 100, |p| primes.push(p)).unwrap();
//!     assert_eq!(vec![83, 89, 97], primes);

mod bit_sieve;
mod constants;
mod erat_big;
mod erat_medium;
mod erat_small;
mod error;
mod parallel;
mod pre_sieve;
mod prime_finder;
mod prime_sieve;
mod sieve;
mod sieving_primes;
mod wheel;

pub use bit_sieve::{count_set_bits, BitSieve, BIT_VALUES};
pub use error::{Result, SieveError};
pub use parallel::{count_parallel, count_primes_parallel};
pub use prime_sieve::PrimeSieve;
pub use sieve::{Scanner, Sieve};
