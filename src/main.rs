use std::{env, fs::read_to_string, process::exit, time::Instant};

use minilang::{
    analyzer::analyzer::analyze, display_error, lexer::lexer::tokenize, parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 || (args.len() == 3 && args[2] != "--tokens") {
        eprintln!("Usage: minilang <file> [--tokens]");
        exit(1);
    }

    let file_path: &str = &args[1];
    let show_tokens = args.len() == 3;

    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap_or(file_path)
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    if show_tokens {
        match tokenize(&source) {
            Ok(tokens) => {
                for token in &tokens {
                    token.debug();
                }
            }
            Err(error) => {
                display_error(&error, &source, file_name);
                exit(1);
            }
        }
    }

    let start = Instant::now();

    let program = match parse(&source) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, file_name);
            exit(1);
        }
    };

    println!("Parsed in {:?}", start.elapsed());

    let analyze_start = Instant::now();

    if let Err(error) = analyze(&program) {
        display_error(&error, &source, file_name);
        exit(1);
    }

    println!("Analyzed in {:?}", analyze_start.elapsed());
    println!(
        "{}: {} top-level statement(s), no errors",
        file_name,
        program.body.len()
    );
}
