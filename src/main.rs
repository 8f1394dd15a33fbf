use std::{
    fs::File,
    io::{BufReader, Read, Write},
};

use anyhow::Result;
use cengc_lexer::scan;

const DEFAULT_OUTPUT_FILE: &str = "code.lex";

fn main() -> Result<()> {
    let Some(source_file) = std::env::args().nth(1) else {
        eprintln!("err: source file not provided");
        eprintln!("usage: ceng-lang code_file.ceng [code.lex]");
        std::process::exit(1);
    };
    let output_file = std::env::args()
        .nth(2)
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_owned());

    println!("CENG Lexical Analyzer");
    println!("=====================");

    println!("Reading source from file {source_file}...");
    let mut bf = BufReader::new(File::open(source_file)?);

    let mut source = String::new();

    bf.read_to_string(&mut source)?;

    println!("Lexing source file...");
    let tokens = match scan(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    };

    println!("Writing lexemes to {output_file}...");
    let mut out = File::create(&output_file)?;
    for (i, token) in tokens.iter().enumerate() {
        // Lines are newline-separated, with no trailing newline after the
        // final token.
        if i + 1 == tokens.len() {
            write!(out, "{token}")?;
        } else {
            writeln!(out, "{token}")?;
        }
    }

    println!("Done! {} lexemes written to {output_file}", tokens.len());

    Ok(())
}
