// lexi-spell: check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word is
// correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   lexi-spell [-l LEXICON] [OPTIONS]
//
// Options:
//   -l, --lexicon PATH   Lexicon JSON file (word -> weight map)
//   -s, --suggest        Also print corrections for misspelled words
//   -n, --max N          Maximum corrections per word (default 5)
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = lexi_cli::parse_lexicon_path(&args);
    let (max_corrections, args) = lexi_cli::parse_max(&args, 5);

    if lexi_cli::wants_help(&args) {
        println!("lexi-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: lexi-spell [-l LEXICON] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon JSON file (word -> weight map)");
        println!("  -s, --suggest        Also print corrections for misspelled words");
        println!("  -n, --max N          Maximum corrections per word (default 5)");
        println!("  -h, --help           Print this help");
        return;
    }

    let show_corrections = args.iter().any(|a| a == "-s" || a == "--suggest");

    let service = lexi_cli::load_service(lexicon_path.as_deref())
        .unwrap_or_else(|e| lexi_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let result = service.check_spelling(word, max_corrections);
        if result.is_valid() {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_corrections {
                for correction in result.corrections() {
                    let _ = writeln!(out, "S: {correction}");
                }
            }
        }
    }
}
