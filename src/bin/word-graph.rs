//! word-graph CLI binary.

use clap::Parser;
use std::process;
use word_graph::cli::{args::WordGraphArgs, execute, logging::init_tracing};

fn main() {
    let args = WordGraphArgs::parse();
    init_tracing(args.log_directive());

    if let Err(e) = execute(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
