// lexi-suggest: rank completion candidates for composing text.
//
// Reads composing fragments from stdin (one per line; an empty line asks
// for the frequency top picks) and prints the ranked candidates, one per
// line, with their confidence. Auto-commit-eligible candidates are marked
// with a trailing `*`.
//
// Usage:
//   lexi-suggest [-l LEXICON] [-n MAX]

use std::io::{self, BufRead, Write};

use lexi_core::SuggestionCandidate;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = lexi_cli::parse_lexicon_path(&args);
    let (max_candidates, args) = lexi_cli::parse_max(&args, 5);

    if lexi_cli::wants_help(&args) {
        println!("lexi-suggest: Rank completion candidates for composing text.");
        println!();
        println!("Usage: lexi-suggest [-l LEXICON] [-n MAX]");
        println!();
        println!("Reads composing fragments from stdin (one per line; an empty");
        println!("line asks for the frequency top picks). Prints one candidate");
        println!("per line as 'word <tab> confidence', auto-commit marked '*'.");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon JSON file (word -> weight map)");
        println!("  -n, --max N          Maximum candidates per query (default 5)");
        println!("  -h, --help           Print this help");
        return;
    }

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
        let composing = line.trim_end();

        let candidates = service.suggest(composing, max_candidates);
        if candidates.is_empty() {
            let _ = writeln!(out, "(no candidates for {composing:?})");
            continue;
        }
        for SuggestionCandidate {
            text,
            confidence,
            auto_commit,
        } in &candidates
        {
            let marker = if *auto_commit { " *" } else { "" };
            let _ = writeln!(out, "{text}\t{confidence:.3}{marker}");
        }
    }
}
