// main.rs
//
// Derives the geometry of every built-in variant and writes it out as JSON,
// one folder per variant, for a geometry kernel to pick up.

use std::path::Path;
use std::process::ExitCode;

use candle_bridge::{Configuration, export::write_variant};

const PATH: &str = "models";

fn main() -> ExitCode {
    let mut status = ExitCode::SUCCESS;
    for config in Configuration::variants() {
        match write_variant(&config, Path::new(PATH)) {
            Ok(path) => println!("{}: wrote {}", config.name, path.display()),
            Err(error) => {
                eprintln!("{}: {error}", config.name);
                status = ExitCode::FAILURE;
            },
        }
    }
    status
}
