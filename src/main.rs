use clap::Parser;
use primeseg::{count_parallel, PrimeSieve};

/// Count and print primes and prime k-tuplets.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Sieve the interval [START, STOP]; with a single number, [0, STOP]
    #[arg(value_name = "NUMBER", num_args = 1..=2, required = true)]
    numbers: Vec<u64>,

    /// Tuplet sizes to count: 1 = primes, 2 = twins, ..., 7 = septuplets
    #[arg(short = 'c', long = "count", value_delimiter = ',', default_value = "1")]
    count: Vec<usize>,

    /// Print the primes (or k-tuplets of the given size) instead of counting
    #[arg(short, long, value_name = "K")]
    print: Option<usize>,

    /// Segment size in KiB (power of two); picked from the L1 cache size
    /// if omitted
    #[arg(short, long)]
    sieve_size: Option<usize>,

    /// Pre-sieve bound: 13, 17 or 19
    #[arg(long, default_value_t = 19)]
    pre_sieve: u32,

    /// Number of worker threads [t=1]
    #[arg(short, long)]
    threads: Option<usize>,

    /// Suppress the timing line on stderr
    #[arg(short, long)]
    quiet: bool,
}

const LABELS: [&str; 7] = [
    "Primes",
    "Twin primes",
    "Prime triplets",
    "Prime quadruplets",
    "Prime quintuplets",
    "Prime sextuplets",
    "Prime septuplets",
];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (start, stop) = match args.numbers[..] {
        [stop] => (0, stop),
        [start, stop] => (start, stop),
        _ => unreachable!("clap enforces 1..=2 numbers"),
    };
    anyhow::ensure!(start <= stop, "START ({}) must be <= STOP ({})", start, stop);
    for &k in &args.count {
        anyhow::ensure!((1..=7).contains(&k), "tuplet size must be in 1..=7, got {}", k);
    }

    let sieve_size = match args.sieve_size {
        Some(kib) => kib * 1024,
        None => PrimeSieve::sieve_size_for_cache(None, None),
    };
    let threads = args.threads.unwrap_or(1);
    anyhow::ensure!(threads >= 1, "threads must be >= 1");

    if let Some(k) = args.print {
        anyhow::ensure!((1..=7).contains(&k), "tuplet size must be in 1..=7, got {}", k);
        let mut ps = PrimeSieve::new();
        ps.set_sieve_size(sieve_size);
        ps.set_pre_sieve(args.pre_sieve);
        ps.set_start(start);
        ps.set_stop(stop);
        ps.set_flags(1 << (7 + k - 1));
        ps.sieve()?;
        if !args.quiet {
            eprintln!("Seconds: {:.3}", ps.seconds());
        }
        return Ok(());
    }

    let mut flags = 0;
    for &k in &args.count {
        flags |= 1 << (k - 1);
    }

    if threads > 1 {
        let time = std::time::Instant::now();
        let counts = count_parallel(start, stop, flags, sieve_size, args.pre_sieve, threads)?;
        for &k in &args.count {
            println!("{}: {}", LABELS[k - 1], counts[k - 1]);
        }
        if !args.quiet {
            eprintln!("Seconds: {:.3}", time.elapsed().as_secs_f64());
        }
    } else {
        let mut ps = PrimeSieve::new();
        ps.set_sieve_size(sieve_size);
        ps.set_pre_sieve(args.pre_sieve);
        ps.set_start(start);
        ps.set_stop(stop);
        ps.set_flags(flags);
        ps.sieve()?;
        for &k in &args.count {
            println!("{}: {}", LABELS[k - 1], ps.count(k));
        }
        if !args.quiet {
            eprintln!("Seconds: {:.3}", ps.seconds());
        }
    }
    Ok(())
}
