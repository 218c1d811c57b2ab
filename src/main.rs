use std::{env, fs::read_to_string, process::exit, time::Instant};

use rslox_parser::{ast::printer::dump, display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let (tokens, mut errors) = tokenize(&source);
    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (program, syntax_errors) = parse(tokens);
    errors.extend(syntax_errors);
    println!("Parsed in {:?}", parse_start.elapsed());

    println!("{}", dump(&program));

    for error in &errors {
        display_error(error, &source, file_name);
    }

    if !errors.is_empty() {
        exit(1);
    }
}
