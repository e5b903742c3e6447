//! qpress – command-line HTML normalizer.
//!
//! Usage:
//!   qpress <input.html> [output.html] [--data values.json] [--compose] [--title "My Order"]
//!
//! Reads editor-authored HTML, runs the normalization pipeline, and writes
//! the rasterizer-ready document. If `output.html` is omitted the result is
//! written next to the input with a `.print.html` extension.

use std::{env, fs, path::PathBuf, process};

use serde_json::{Map, Value};

use quill_press::compose::Composer;
use quill_press::pipeline::{prepare_html, PipelineConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut data_path: Option<PathBuf> = None;
    let mut compose = false;
    let mut title: Option<String> = None;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--compose" | "-c" => compose = true,
            "--data" | "-d" => match iter.next() {
                Some(v) => data_path = Some(PathBuf::from(v)),
                None => {
                    eprintln!("--data requires a file argument");
                    process::exit(1);
                }
            },
            "--title" | "-t" => match iter.next() {
                Some(v) => title = Some(v.clone()),
                None => {
                    eprintln!("--title requires a value");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if positional == 0 {
                    input_path = Some(PathBuf::from(path));
                } else if positional == 1 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                positional += 1;
            }
        }
    }

    let input = match input_path {
        Some(p) => p,
        None => {
            eprintln!("Error: no input file specified.");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    // Default output: same directory + same stem, with .print.html
    let output = output_path.unwrap_or_else(|| {
        let mut o = input.clone();
        o.set_extension("print.html");
        o
    });

    // Invalid UTF-8 in the stored template is a hard failure.
    let html = match fs::read_to_string(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", input.display());
            process::exit(1);
        }
    };

    let data: Map<String, Value> = match &data_path {
        Some(p) => match fs::read_to_string(p) {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    eprintln!("Error: '{}' must contain a JSON object", p.display());
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error parsing '{}': {e}", p.display());
                    process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error reading '{}': {e}", p.display());
                process::exit(1);
            }
        },
        None => Map::new(),
    };

    let document = if compose {
        let composer = match title {
            Some(t) => Composer {
                title: t,
                ..Composer::default()
            },
            None => Composer::default(),
        };
        composer.compose(&html)
    } else {
        prepare_html(&html, &data, &PipelineConfig::default())
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("Error creating output directory: {e}");
                process::exit(1);
            }
        }
    }
    if let Err(e) = fs::write(&output, &document) {
        eprintln!("Error writing '{}': {e}", output.display());
        process::exit(1);
    }
    eprintln!("Wrote '{}' ({} bytes)", output.display(), document.len());
}

fn print_usage(prog: &str) {
    eprintln!("qpress – rich-text HTML normalizer (quill-press)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <input.html> [output.html] [--data values.json] [--compose] [--title \"My Order\"]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <input.html>    Editor-authored HTML to normalize");
    eprintln!("  [output.html]   Output path (default: same stem as input with .print.html)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --data, -d      JSON object file with placeholder values");
    eprintln!("  --compose, -c   Build the fixed header/logo document shell instead");
    eprintln!("  --title, -t     Title block text for --compose (default: TRANSFER ORDER)");
    eprintln!("  --help          Print this message");
}
