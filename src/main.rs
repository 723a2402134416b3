use std::env;
use std::path::Path;
use std::process;

use mathsheets::{PipelineError, generate_document};

/// A simple CLI to generate practice worksheets from a JSON config.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some((config_path, seed)) = parse_args(&args) else {
        eprintln!("Generates arithmetic practice worksheets and an answer key as one PDF.");
        eprintln!();
        eprintln!("Usage: {} <path/to/config.json> [--seed N]", args[0]);
        process::exit(1);
    };

    println!("Creating practice sheets from {config_path}");
    let output_path = generate_document(Path::new(&config_path), seed)?;
    println!("Created {}", output_path.display());
    Ok(())
}

fn parse_args(args: &[String]) -> Option<(String, Option<u64>)> {
    match args {
        [_, config] => Some((config.clone(), None)),
        [_, config, flag, seed] if flag == "--seed" => {
            let seed = seed.parse().ok()?;
            Some((config.clone(), Some(seed)))
        }
        _ => None,
    }
}
