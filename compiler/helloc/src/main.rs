//! hello lexer CLI.

use helloc::commands::{lex_file, parse_lex_args};

fn main() {
    helloc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: helloc lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --spans          Show parser spans and token codes");
                eprintln!("  --deny-unknown   Fail on the first unrecognized character");
                std::process::exit(1);
            }

            let result = parse_lex_args(&args[2..]).and_then(|(path, options)| {
                let stdout = std::io::stdout();
                lex_file(&path, &options, &mut stdout.lock())
            });
            if let Err(err) = result {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("helloc - token dump for the hello lexer");
    println!();
    println!("Usage: helloc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>    Print the token stream of a file");
    println!("  help          Show this message");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=hello_lexer_core=trace) for scanner tracing.");
}
