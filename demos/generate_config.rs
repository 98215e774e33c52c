//! Generate a default filter configuration file
//!
//! Creates a JSON config with all default parameters

use hsl_filter::FilterConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/filter.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = FilterConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Hue rotation:   {:?}", config.hue_rotation);
            match config.decimal_places {
                Some(places) => eprintln!("  Decimal places: {}", places),
                None => eprintln!("  Decimal places: shortest"),
            }
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
