//! Kiln compiler CLI.

use std::path::Path;

use kilnc::commands::{check_file, lex_file};

fn main() {
    kilnc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: kiln check <file>");
                std::process::exit(1);
            }
            check_file(Path::new(&args[2]))
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: kiln lex <file>");
                std::process::exit(1);
            }
            lex_file(Path::new(&args[2]))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("kiln {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("Kiln Compiler");
    println!();
    println!("Usage: kiln <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file>   Evaluate every static_assert and report failures");
    println!("  lex <file>     Print the token stream (debugging)");
    println!("  help           Show this message");
    println!("  version        Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=kiln_parse=debug) for tracing output.");
}
