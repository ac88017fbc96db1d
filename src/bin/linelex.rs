//! Command-line interface for linelex
//! This binary tokenizes C++-like source files into classified lexeme records.
//!
//! Usage:
//!   linelex tokenize `<path>` [--output `<path>`] [--format `<format>`]  - Tokenize a source file
//!   linelex list-passes                                              - List the classifier passes

use clap::{Arg, ArgAction, Command};

use linelex::linelex::lexing::passes::PASSES;
use linelex::linelex::processor::{
    process_source_observed, OutputFormat, ProcessingSpec, TokenOrder,
};

fn main() {
    let matches = Command::new("linelex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A line-oriented lexical analyzer for C++-like source")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a source file into classified lexeme records")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write records to this file instead of stdout"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                )
                .arg(
                    Arg::new("pass-order")
                        .long("pass-order")
                        .action(ArgAction::SetTrue)
                        .help("Emit tokens in pass-execution order instead of source order"),
                )
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .action(ArgAction::SetTrue)
                        .help("Print the working buffer after each pass to stderr"),
                ),
        )
        .subcommand(
            Command::new("list-passes").about("List the classifier passes in precedence order"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => {
            let path = tokenize_matches.get_one::<String>("path").unwrap();
            let output = tokenize_matches.get_one::<String>("output");
            let format = tokenize_matches.get_one::<String>("format").unwrap();
            let pass_order = tokenize_matches.get_flag("pass-order");
            let trace = tokenize_matches.get_flag("trace");
            handle_tokenize_command(path, output, format, pass_order, trace);
        }
        Some(("list-passes", _)) => {
            handle_list_passes_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the tokenize command
fn handle_tokenize_command(
    path: &str,
    output: Option<&String>,
    format: &str,
    pass_order: bool,
    trace: bool,
) {
    let format: OutputFormat = format.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let spec = ProcessingSpec {
        format,
        order: if pass_order {
            TokenOrder::Pass
        } else {
            TokenOrder::Source
        },
    };

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let mut traced_line = String::new();
    let result = process_source_observed(&source, &spec, |line, pass, buffer| {
        if !trace {
            return;
        }
        if traced_line != line {
            traced_line = line.to_string();
            eprintln!("line: {:?}", line);
        }
        eprintln!("  after {:<22} {:?}", pass.name, buffer);
    });

    let rendered = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match output {
        Some(output_path) => {
            std::fs::write(output_path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            });
        }
        None => print!("{}", rendered),
    }
}

/// Handle the list-passes command
fn handle_list_passes_command() {
    println!("Classifier passes in precedence order:\n");
    for pass in &PASSES {
        println!(
            "  {}. {:<24} -> {}",
            pass.rank,
            pass.name,
            pass.classification.name()
        );
    }
}
