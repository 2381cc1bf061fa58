use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use sparsearray::op::{random_ops, replay, SparseOp};
use sparsearray::sparse_array::SparseMapVector;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply operations such as `3=5`, `3++`, `3+=2`, `3*=2` to a sparse vector
    Run {
        /// Virtual size of the vector
        #[clap(short = 'n', long)]
        size: usize,
        /// Value of unstored indices
        #[clap(short = 'z', long, default_value_t = 0, allow_hyphen_values = true)]
        zero: i64,
        /// Operations applied in order
        #[clap(allow_hyphen_values = true)]
        ops: Vec<String>,
    },
    /// Apply random operations to a sparse vector and to a dense vector, and
    /// compare the two
    Random {
        /// Virtual size of the vector
        #[clap(short = 'n', long)]
        size: usize,
        /// Value of unstored indices
        #[clap(short = 'z', long, default_value_t = 0, allow_hyphen_values = true)]
        zero: i64,
        /// Number of operations
        #[clap(short = 'k', long, default_value_t = 100)]
        n_ops: usize,
        /// Seed of the random generator
        #[clap(short, long, default_value_t = 0)]
        seed: u64,
    },
}

fn run(size: usize, zero: i64, ops: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let ops: Vec<SparseOp<i64>> = ops
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;
    let mut v: SparseMapVector<i64> = SparseMapVector::new(size, zero);
    for op in ops.iter() {
        op.apply(&mut v);
        info!("{} n_entries={}", op, v.n_entries());
    }
    println!("{}", v);
    println!("n_entries={}", v.n_entries());
    Ok(())
}

fn random(
    size: usize,
    zero: i64,
    n_ops: usize,
    seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    if size == 0 && n_ops > 0 {
        return Err("size should be positive".into());
    }
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let ops = random_ops(&mut rng, size, n_ops);
    let r = replay(size, zero, &ops);
    let mismatches = r.mismatches();
    for m in mismatches.iter() {
        warn!("index={} sparse={} dense={}", m.index, m.sparse, m.dense);
    }
    println!("{}", r.sparse);
    println!(
        "n_ops={} n_entries={} n_mismatches={}",
        n_ops,
        r.sparse.n_entries(),
        mismatches.len()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts: Opts = Opts::parse();
    println!("# started_at={}", chrono::Local::now());
    println!("# opts={:?}", opts);
    match &opts.command {
        Commands::Run { size, zero, ops } => run(*size, *zero, ops)?,
        Commands::Random {
            size,
            zero,
            n_ops,
            seed,
        } => random(*size, *zero, *n_ops, *seed)?,
    }
    println!("# finished_at={}", chrono::Local::now());
    Ok(())
}
