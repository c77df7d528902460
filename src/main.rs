//! Front end driver.
//!
//! Usage: toolchain [FILE] [--tokens] [--ast]
//!
//! Without a file, reads lines from stdin and prints the tokens of each.

use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use toolchain::{display_error, lexer::tokens::TokenKind, parse, tokenize, Scanner};

#[derive(Parser, Debug)]
#[command(name = "toolchain")]
#[command(version = "0.1.0")]
#[command(about = "Tokenizer and parser for indentation structured scripts", long_about = None)]
struct Args {
    /// Source file; starts the token shell when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print every token of the file
    #[arg(long, default_value_t = false)]
    tokens: bool,

    /// Print the parsed tree
    #[arg(long, default_value_t = false)]
    ast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match &args.file {
        Some(path) => run_file(path, &args),
        None => run_shell(),
    }
}

fn run_file(path: &Path, args: &Args) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: could not read file '{}': {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let start = Instant::now();

    let tokens = match tokenize(&source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let block = match parse(&source, Some(file_name)) {
        Ok(block) => block,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    if args.ast {
        println!("{:#?}", block);
    }

    ExitCode::SUCCESS
}

fn run_shell() -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("error: could not read input: {}", e);
                return ExitCode::FAILURE;
            }
            None => return ExitCode::SUCCESS,
        };

        let mut scanner = Scanner::new(&line, None);
        loop {
            match scanner.next_token() {
                Ok(token) => {
                    println!("{}", token);
                    if token.kind == TokenKind::EOF {
                        break;
                    }
                }
                Err(error) => {
                    display_error(&error, &line);
                    break;
                }
            }
        }
    }
}
