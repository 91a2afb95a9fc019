// lexi-words: export every lexicon entry.
//
// Prints one `word <tab> weight` line per entry, in scan order.
//
// Usage:
//   lexi-words [-l LEXICON]

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = lexi_cli::parse_lexicon_path(&args);

    if lexi_cli::wants_help(&args) {
        println!("lexi-words: Export every lexicon entry as 'word <tab> weight'.");
        println!();
        println!("Usage: lexi-words [-l LEXICON]");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Lexicon JSON file (word -> weight map)");
        println!("  -h, --help           Print this help");
        return;
    }

    let service = lexi_cli::load_service(lexicon_path.as_deref())
        .unwrap_or_else(|e| lexi_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for (word, weight) in service.export_words() {
        let _ = writeln!(out, "{word}\t{weight}");
    }
}
