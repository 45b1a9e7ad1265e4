use std::fs;
use std::process;

use clap::Parser;
use minspan::{min_window_str_with, EmptyTarget, MinspanError, SearchConfig};

#[derive(Parser)]
struct Args {
    /// Source text, or a file path when --file is given
    source: String,
    /// Required elements; repeats raise the required count
    target: String,
    /// Treat SOURCE as a path and read the text from disk
    #[clap(long)]
    file: bool,
    /// Print the result as a JSON object
    #[clap(long)]
    json: bool,
    /// Treat an empty TARGET as trivially satisfied instead of no match
    #[clap(long)]
    empty_match: bool,
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<bool, MinspanError> {
    let source = if args.file {
        let bytes = fs::read(&args.source)?;
        String::from_utf8(bytes)
            .map_err(|_| MinspanError::Input(format!("{} is not valid UTF-8", args.source)))?
    } else {
        args.source.clone()
    };

    let config = SearchConfig {
        empty_target: if args.empty_match {
            EmptyTarget::EmptyMatch
        } else {
            EmptyTarget::NotFound
        },
    };

    match min_window_str_with(&source, &args.target, &config) {
        Some(span) => {
            let window = &source[span.range()];
            if args.json {
                let out = serde_json::json!({
                    "start": span.start,
                    "end": span.end,
                    "len": span.len(),
                    "window": window,
                });
                println!("{}", serde_json::to_string_pretty(&out).unwrap());
            } else {
                println!("{}..={}  {}", span.start, span.end, window);
            }
            Ok(true)
        }
        None => {
            println!("no match");
            Ok(false)
        }
    }
}
