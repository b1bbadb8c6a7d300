//! Binary entrypoint, everything lives in the library crate.

use nutrilog::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
