//! Command-line interface for conflang
//! This binary translates a configuration file (TOML, JSON or YAML) into conflang declarations.
//!
//! Usage:
//!   conflang `<input>` `<output>` [--format `<format>`]   - Translate and write to a file
//!   conflang `<input>` [--format `<format>`]            - Translate and print to stdout
//!   conflang `<input>` --constants                    - Print the resolved top-level constants as JSON
//!   conflang --list-formats                           - List all available input formats
//!
//! Set `RUST_LOG=debug` to see constants as they are bound.

use clap::{Arg, ArgAction, Command};
use conflang::conflang::loader::{write_output, DocumentLoader};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("conflang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate configuration files into conflang constant declarations")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the input configuration file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path to the output file (default: stdout)")
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Input format (e.g., 'toml', 'json', 'yaml'; default: from the file extension)"),
        )
        .arg(
            Arg::new("constants")
                .long("constants")
                .help("Print the resolved top-level constants as JSON instead of the translation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available input formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let input = matches
        .get_one::<String>("input")
        .expect("input is required unless listing formats");
    let output = matches.get_one::<String>("output").map(String::as_str);
    let format = matches.get_one::<String>("format").map(String::as_str);
    handle_translate_command(input, output, format, matches.get_flag("constants"));
}

/// Handle the translate command
fn handle_translate_command(
    input: &str,
    output: Option<&str>,
    format: Option<&str>,
    constants: bool,
) {
    let loader = DocumentLoader::new();
    let (text, scope) = loader.translate_file(input, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if constants {
        let json = serde_json::to_string_pretty(&scope).unwrap_or_else(|e| {
            eprintln!("Error formatting constants: {}", e);
            std::process::exit(1);
        });
        println!("{}", json);
        return;
    }

    match output {
        Some(path) => {
            write_output(path, &text).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("Transformation successful. Output written to: {}", path);
        }
        None => println!("{}", text),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let loader = DocumentLoader::new();
    println!("Available input formats:\n");

    for name in loader.registry().list_formats() {
        if let Some(format) = loader.registry().get(&name) {
            println!("  {} (.{})", name, format.extensions().join(", ."));
            println!("    {}", format.description());
            println!();
        }
    }
}
