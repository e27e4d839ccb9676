//! Speller CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;

use speller::cli::{SpellerArgs, execute_command};

fn main() {
    let args = SpellerArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
