//! Command-line interface for hsl_filter
//!
//! Computes the CSS filter that tints one hex color towards another

use hsl_filter::{ColorConverter, CssFilter, FilterCalculator, FilterConfig};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut css_mode = false;
    let mut config_path = None;
    let mut colors = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--css" => css_mode = true,
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => colors.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if colors.len() != 2 {
        print_help(&args[0]);
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match FilterConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => FilterConfig::default(),
    };

    let calculator = FilterCalculator::with_config(config);
    match calculator.calculate(&colors[0], &colors[1], css_mode) {
        Ok(output) => {
            if let Some(css) = output.as_css() {
                println!("{}", css);
            } else if let Some(filter) = output.as_descriptor() {
                print_result(&colors[0], &colors[1], filter);
            }
        }
        Err(error) => {
            eprintln!("Filter calculation failed: {}", error);
            if error.is_input_error() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <from_hex> <to_hex>", program_name);
    eprintln!();
    eprintln!("Compute a CSS hue-rotate/saturate filter mapping one color onto another.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --css            Print a CSS declaration instead of JSON");
    eprintln!("  --config FILE    Load filter settings from a JSON file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#3366cc' '#cc3366'", program_name);
    eprintln!("  {} --css 3366cc cc3366", program_name);
    eprintln!("  RUST_LOG=debug {} --config filter.json '#3366cc' '#cc3366'", program_name);
}

fn print_result(from: &str, to: &str, filter: &CssFilter) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(filter) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            println!("{}", filter);
        }
    }

    // Print summary to stderr for human reading
    let converter = ColorConverter::new();
    eprintln!();
    eprintln!("Filter Summary:");
    for (label, hex) in [("From", from), ("To", to)] {
        if let Ok(rgb) = converter.hex_to_rgb(hex) {
            let hsl = converter.rgb_to_hsl(rgb.red.into(), rgb.green.into(), rgb.blue.into());
            eprintln!(
                "  {:<4} {}  hsl({:.1}, {:.1}%, {:.1}%)",
                label,
                converter.rgb_to_hex(rgb),
                hsl.hue * 360.0,
                hsl.saturation * 100.0,
                hsl.lightness * 100.0
            );
        }
    }
    eprintln!("  CSS  {}", filter);
}
