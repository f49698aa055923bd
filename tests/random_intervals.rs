use rand::{Rng, SeedableRng};

use primeseg::PrimeSieve;

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[test]
fn random_intervals_match_trial_division() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    let mut ps = PrimeSieve::new();
    for _ in 0..300 {
        let a: u64 = rng.gen_range(0..100_000_000);
        let width: u64 = rng.gen_range(0..2000);
        let b = a + width;
        let expected = (a..=b).filter(|&n| is_prime(n)).count() as u64;
        assert_eq!(expected, ps.count_primes(a, b).unwrap(), "interval [{}, {}]", a, b);
    }
}

#[test]
fn random_intervals_candidate_accounting() {
    // every integer in range is either even, a multiple of 3 or 5, or a
    // candidate; candidates split into primes and struck composites
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut ps = PrimeSieve::new();
    for _ in 0..50 {
        let a: u64 = rng.gen_range(7..10_000_000);
        let b = a + rng.gen_range(0..5000);
        let candidates = (a..=b)
            .filter(|n| n % 2 != 0 && n % 3 != 0 && n % 5 != 0)
            .count() as u64;
        let primes = ps.count_primes(a, b).unwrap();
        let composite_candidates = (a..=b)
            .filter(|&n| n % 2 != 0 && n % 3 != 0 && n % 5 != 0 && !is_prime(n))
            .count() as u64;
        assert_eq!(candidates, primes + composite_candidates, "interval [{}, {}]", a, b);
    }
}
