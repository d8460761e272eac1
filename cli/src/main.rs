//! Scaffold - re-provision the bootstrap files of a web front-end project

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use scaffold_cli::cli::Cli;
use scaffold_cli::output::json;

fn main() {
    let cli = Cli::parse();
    let as_json = cli.json;
    if let Err(e) = cli.run() {
        match json::error_object(&e) {
            Ok(obj) if as_json => eprintln!("{obj}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
