//! Example: the month-name dictionary as a trie, an automaton and two transducers.
//!
//! Each command builds its structure from the twelve month names (February
//! twice, for common and leap years), looks up a few keys and prints the graph
//! in Graphviz format.
//!
//! Run with: cargo run --example months -- <trie|fsa|fst|fst-int>

use std::fmt::Debug;
use std::process::ExitCode;

use libfst::{FsaBuilder, FstBuilder, Lookup, Trie};

const MONTHS: [(&str, u64); 13] = [
    ("January", 31),
    ("February", 28),
    ("February", 29),
    ("March", 31),
    ("April", 30),
    ("May", 31),
    ("June", 30),
    ("July", 31),
    ("August", 31),
    ("September", 30),
    ("October", 31),
    ("November", 30),
    ("December", 31),
];

/// The months sorted by name, as the minimal builders require.
fn sorted_months() -> Vec<(&'static str, u64)> {
    let mut months = MONTHS.to_vec();
    months.sort_by_key(|&(month, _)| month);
    months
}

fn print_lookups<O: Debug>(search: impl Fn(&str) -> Lookup<O>) {
    for key in ["March", "February", "Smarch"] {
        match search(key) {
            Lookup::Found(values) => println!("Search for '{key}': {values:?}"),
            Lookup::NoValue | Lookup::NotFound => println!("Search for '{key}': not found"),
        }
    }
}

fn trie() {
    // A trie takes keys in any order.
    let mut trie = Trie::new();
    for (month, days) in MONTHS {
        trie.insert(month, days);
    }
    print_lookups(|key| trie.search(key));
    println!("{} nodes", trie.node_count());
    println!("{}", trie.to_dot());
}

fn fsa() {
    let mut builder = FsaBuilder::new();
    for (month, _) in sorted_months() {
        if let Err(e) = builder.insert(month) {
            eprintln!("{e}");
            return;
        }
    }
    let fsa = builder.finish();
    for key in ["March", "Smarch"] {
        println!("Search for '{key}': {}", fsa.contains(key));
    }
    println!("{} nodes", fsa.node_count());
    println!("{}", fsa.to_dot());
}

fn fst_strings() {
    let mut builder = FstBuilder::new();
    for (month, days) in sorted_months() {
        if let Err(e) = builder.insert(month, days.to_string()) {
            eprintln!("{e}");
            return;
        }
    }
    let fst = builder.finish();
    print_lookups(|key| fst.search(key));
    println!("{} nodes", fst.node_count());
    println!("{}", fst.to_dot());
}

fn fst_integers() {
    let mut builder = FstBuilder::new();
    for (month, days) in sorted_months() {
        if let Err(e) = builder.insert(month, days) {
            eprintln!("{e}");
            return;
        }
    }
    let fst = builder.finish();
    print_lookups(|key| fst.search(key));
    println!("{} nodes", fst.node_count());
    println!("{}", fst.to_dot());
}

fn main() -> ExitCode {
    let Some(command) = std::env::args().nth(1) else {
        eprintln!("Usage: months <command>");
        eprintln!("Available commands: trie, fsa, fst, fst-int");
        return ExitCode::FAILURE;
    };
    match command.as_str() {
        "trie" => trie(),
        "fsa" => fsa(),
        "fst" => fst_strings(),
        "fst-int" => fst_integers(),
        other => {
            eprintln!("Unknown command: {other}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
