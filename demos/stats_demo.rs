use chain_hash::ChainedHashSet;
use chain_hash::DefaultHashBuilder;
use chain_hash::StdHash;
use clap::Parser;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HashKind {
    /// foldhash, or the crate's default hasher
    Default,
    /// The value itself
    Identity,
    /// Every value lands in the same bucket
    Constant,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "count", default_value_t = 1000)]
    count: u64,

    #[arg(short = 'b', long = "buckets", default_value_t = chain_hash::DEFAULT_CAPACITY)]
    buckets: usize,

    #[arg(long = "hash", value_enum, default_value_t = HashKind::Default)]
    hash: HashKind,
}

fn fill<H: chain_hash::HashFunction<u64>>(args: &Args, hasher: H) {
    let mut set = ChainedHashSet::with_capacity_and_hasher(args.buckets, hasher);

    println!("Initial bucket count: {}", set.capacity());
    println!("Filling set with {} u64 values...", args.count);

    let mut growths = Vec::new();
    for value in 0..args.count {
        let before = set.capacity();
        set.add(value);
        if set.capacity() != before {
            growths.push((set.len(), before, set.capacity()));
        }
    }

    for (len, before, after) in &growths {
        println!("  grew at element {len}: {before} -> {after} buckets");
    }
    println!("Inserted {} values", set.len());
    println!("Final load factor: {:.2}%", set.load_factor() * 100.0);

    set.chain_stats().print();
}

fn main() {
    let args = Args::parse();

    match args.hash {
        HashKind::Default => fill(&args, StdHash::<DefaultHashBuilder>::default()),
        HashKind::Identity => fill(&args, |v: &u64| *v),
        HashKind::Constant => fill(&args, |_: &u64| 0u64),
    }
}
