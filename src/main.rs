use std::env;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::process::exit;

use lexi::{ScanError, Scanner};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let args = env::args().collect::<Vec<String>>();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: lexi [path]");
            exit(64)
        }
    }
}

fn repl() {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        // Invalid UTF-8 becomes U+FFFD and is reported by the scanner.
        match io::stdin().lock().read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let _ = run(&String::from_utf8_lossy(&buf));
            }
            Err(err) => {
                eprintln!("Could not read input: {err}");
                break;
            }
        }
    }
}

fn run_file(path: &str) {
    let Ok(source) = std::fs::read_to_string(path) else {
        eprintln!("Could not read file.");
        exit(74);
    };
    if run(&source).is_err() {
        exit(65);
    }
}

/// Prints the tokens of `source`, or every lexical error when there are any.
fn run(source: &str) -> Result<(), Vec<ScanError>> {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("{err}");
        }
        return Err(errors);
    }
    for token in &tokens {
        println!("{token}");
    }
    Ok(())
}
