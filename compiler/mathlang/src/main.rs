//! MathLang CLI

use std::io::{self, Write};

use mathlang::commands::{eval_source, list_operations, parse_run_args, run_repl, run_script};
use mathlang::{init_tracing, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let session = Session::new();
    let mut stdout = io::stdout().lock();

    let outcome = match command.as_str() {
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: mathlang eval \"<source>\"");
                std::process::exit(1);
            }
            eval_source(&session, &args[2..].join(" "), &mut stdout)
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: mathlang run <script> [--var name=value]... [--quiet]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --var name=value   Bind a variable before the script runs");
                eprintln!("  -q, --quiet        Do not print results");
                std::process::exit(1);
            }
            parse_run_args(&args[2..]).and_then(|options| run_script(&session, &options, &mut stdout))
        }
        "repl" => run_repl(&session, io::stdin().lock(), &mut stdout),
        "ops" => list_operations(session.registry(), args.get(2).map(String::as_str), &mut stdout),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("mathlang {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let _ = stdout.flush();
    if let Err(message) = outcome {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("MathLang - a small mathematical expression language");
    println!();
    println!("Usage: mathlang <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval \"<source>\"       Evaluate source text and print each result");
    println!("  run <script>          Evaluate a script file");
    println!("      --var name=value  Bind a variable first (repeatable)");
    println!("      --quiet           Only report errors");
    println!("  repl                  Interactive session (:vars, :clear, :ops, :quit)");
    println!("  ops [category]        List operations, optionally by category prefix");
    println!("  help                  Show this message");
    println!("  version               Show version information");
    println!();
    println!("Examples:");
    println!("  mathlang eval \"f(x) = x ^ 2; Map(Range(1, 5), f)\"");
    println!("  mathlang run script.ml --var n=10");
    println!("  mathlang ops Statistics");
}
