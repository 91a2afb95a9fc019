// lexi-cli: shared utilities for the CLI tools.

use std::path::PathBuf;
use std::process;

use lexi_engine::SuggestionService;

/// Lexicon file name looked for in the current directory.
const LEXICON_FILE: &str = "lexicon.json";

/// Environment variable naming the lexicon file.
const LEXICON_ENV: &str = "LEXI_LEXICON_PATH";

/// Locate a lexicon file and build a loaded `SuggestionService`.
///
/// Search order:
/// 1. `lexicon_path` argument (if provided)
/// 2. `LEXI_LEXICON_PATH` environment variable
/// 3. `./lexicon.json`
pub fn load_service(lexicon_path: Option<&str>) -> Result<SuggestionService, String> {
    let search_paths = build_search_paths(lexicon_path);

    for path in &search_paths {
        if path.is_file() {
            let bytes = std::fs::read(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            let service = SuggestionService::new();
            service
                .load_from_json_bytes(&bytes)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            return Ok(service);
        }
    }

    Err(format!(
        "could not find a lexicon file in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate lexicon file paths.
fn build_search_paths(lexicon_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = lexicon_path {
        paths.push(PathBuf::from(p));
    }

    // 2. LEXI_LEXICON_PATH environment variable
    if let Ok(env_path) = std::env::var(LEXICON_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_FILE));
    }

    paths
}

/// Parse a `--lexicon=PATH` or `-l PATH` argument from command line args.
///
/// Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut lexicon_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            lexicon_path = Some(val.to_string());
        } else if arg == "--lexicon" || arg == "-l" {
            if i + 1 < args.len() {
                lexicon_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (lexicon_path, remaining)
}

/// Parse a `--max=N` or `-n N` argument. Returns `(max, remaining_args)`,
/// with `default` when the flag is absent.
pub fn parse_max(args: &[String], default: usize) -> (usize, Vec<String>) {
    let mut max = default;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let value = if let Some(val) = arg.strip_prefix("--max=") {
            Some(val.to_string())
        } else if arg == "--max" || arg == "-n" {
            if i + 1 < args.len() {
                skip_next = true;
                Some(args[i + 1].clone())
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
            None
        };

        if let Some(value) = value {
            match value.parse() {
                Ok(n) => max = n,
                Err(_) => {
                    eprintln!("error: invalid count: {value}");
                    process::exit(1);
                }
            }
        }
    }

    (max, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
