#[macro_use]
extern crate log;

use clap::{ArgAction, Parser};
use fixed_splay::splay_tree::SplaySet;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::process;

#[derive(Parser, Debug)]
#[command(version, about = "Splays a sequence of keys in a fixed-size splay tree.", long_about = None)]
struct Args {
    /// Number of keys in the tree. The tree starts as a chain of 1..=SIZE rooted at SIZE.
    #[arg(short = 'n', long, default_value_t = 10)]
    size: usize,

    /// Keys to splay to the root, in order.
    #[arg(default_values_t = [1usize, 10, 4, 7])]
    keys: Vec<usize>,

    /// Dump every node after each splay.
    #[arg(short, long)]
    print: bool,

    /// Increase logging verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if SimpleLogger::init(level, Config::default()).is_err() {
        eprintln!("logger was already initialized");
    }

    if let Some(key) = args.keys.iter().find(|key| **key == 0 || **key > args.size) {
        error!("key {} is outside of [1, {}]", key, args.size);
        process::exit(2);
    }

    let mut set = SplaySet::new(args.size);
    if args.print {
        println!("{:#?}", set);
    }

    for &key in &args.keys {
        set.splay(key);
        info!(
            "splayed {}: root = {:?}, height = {}, rotations = {}",
            key,
            set.root(),
            set.height(),
            set.rotations(),
        );
        if set.root() != Some(key) {
            error!("splay failed: expected root {}, got {:?}", key, set.root());
            process::exit(1);
        }
        if args.print {
            println!("{:#?}", set);
        }
    }

    set.check_invariants();
    println!("Splay tests passed");
}
