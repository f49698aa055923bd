use primeseg::{count_primes_parallel, PrimeSieve};

#[test]
fn known_prime_counts() {
    let mut ps = PrimeSieve::new();
    assert_eq!(10, ps.count_primes(0, 30).unwrap());
    assert_eq!(25, ps.count_primes(0, 100).unwrap());
    assert_eq!(168, ps.count_primes(0, 1000).unwrap());
    assert_eq!(78498, ps.count_primes(0, 1_000_000).unwrap());
    assert_eq!(664_579, ps.count_primes(0, 10_000_000).unwrap());
}

#[test]
fn known_prime_count_windows() {
    let mut ps = PrimeSieve::new();
    assert_eq!(21, ps.count_primes(100, 200).unwrap());
    assert_eq!(48155, ps.count_primes(1_000_000_000, 1_001_000_000).unwrap());
    assert_eq!(5308, ps.count_primes(123_456_789, 123_556_789).unwrap());
}

#[test]
fn trillion_tail() {
    let mut ps = PrimeSieve::new();
    let stop = 1_000_000_000_000u64;
    assert_eq!(38, ps.count_primes(stop - 1000, stop).unwrap());

    let mut largest = 0;
    let mut first = 0;
    ps.generate_primes(stop - 1000, stop, |p| {
        if first == 0 {
            first = p;
        }
        largest = p;
    })
    .unwrap();
    assert_eq!(999_999_999_091, first);
    assert_eq!(999_999_999_989, largest);
}

#[test]
fn single_value_ranges() {
    let mut ps = PrimeSieve::new();
    assert_eq!(1, ps.count_primes(17, 17).unwrap());
    assert_eq!(0, ps.count_primes(18, 18).unwrap());
    assert_eq!(1, ps.count_primes(2, 2).unwrap());
    assert_eq!(0, ps.count_primes(1, 1).unwrap());
}

#[test]
fn partition_law() {
    let mut ps = PrimeSieve::new();
    let splits = [(0u64, 499_999u64, 1_000_000u64), (10, 77_777, 300_000), (1000, 1001, 1002)];
    for &(a, b, c) in &splits {
        let whole = ps.count_primes(a, c).unwrap();
        let left = ps.count_primes(a, b).unwrap();
        let right = ps.count_primes(b + 1, c).unwrap();
        assert_eq!(whole, left + right, "split {} {} {}", a, b, c);
    }
}

#[test]
fn sieve_size_stress() {
    // the smallest segment maximizes bucket traffic; counts must not move
    let mut small = PrimeSieve::new();
    small.set_sieve_size(1 << 10);
    let mut default = PrimeSieve::new();
    for (start, stop) in [(0u64, 3_000_000u64), (998_000_000, 1_000_000_000)] {
        assert_eq!(
            default.count_primes(start, stop).unwrap(),
            small.count_primes(start, stop).unwrap(),
            "range {} {}",
            start,
            stop
        );
    }
}

#[test]
fn pre_sieve_bounds_agree() {
    let mut counts = Vec::new();
    for pre in [13, 17, 19] {
        let mut ps = PrimeSieve::new();
        ps.set_pre_sieve(pre);
        counts.push(ps.count_primes(900_000_000, 901_000_000).unwrap());
    }
    assert_eq!(counts[0], counts[1]);
    assert_eq!(counts[1], counts[2]);
}

#[test]
fn parallel_matches_serial() {
    let mut ps = PrimeSieve::new();
    let serial = ps.count_primes(0, 5_000_000).unwrap();
    let sieve_size = ps.sieve_size();
    let pre_sieve = ps.pre_sieve();
    for threads in [1, 2, 3, 8] {
        assert_eq!(
            serial,
            count_primes_parallel(0, 5_000_000, sieve_size, pre_sieve, threads).unwrap()
        );
    }
}

#[test]
#[ignore] // slow: run with cargo test --release -- --ignored
fn known_heavy_counts() {
    let mut ps = PrimeSieve::new();
    assert_eq!(5_761_455, ps.count_primes(0, 100_000_000).unwrap());
    assert_eq!(50_847_534, ps.count_primes(0, 1_000_000_000).unwrap());
    assert_eq!(1713, ps.count_septuplets(0, 1_000_000_000).unwrap());
}
