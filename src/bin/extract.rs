use clap::Parser;
use std::path::PathBuf;

use chartsmith::chart::{ChartType, MIN_DOCUMENT_LEN, extract, fallback};

/// Offline normalizer: run extraction + fallback on a saved raw completion
/// without touching the network. Useful for replaying model output and for
/// piping another tool's completion straight into a renderer.
#[derive(Parser, Debug)]
#[command(name = "chartsmith-extract")]
#[command(version)]
#[command(about = "Extract a valid Mermaid document from a raw LLM completion", long_about = None)]
struct Args {
    /// Raw completion file (use "-" for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Chart type to extract (aliases accepted)
    #[arg(short = 't', long, value_name = "TYPE", default_value = "flowchart")]
    chart_type: String,

    /// Output file path (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Text to seed the fallback template with when extraction fails
    /// (defaults to the raw completion itself)
    #[arg(long, value_name = "TEXT")]
    fallback_seed: Option<String>,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let raw = if args.input.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        buffer
    } else {
        std::fs::read_to_string(&args.input)
            .map_err(|e| format!("Failed to read input file: {}", e))?
    };

    let chart = ChartType::resolve(&args.chart_type);

    let mut document = match extract(chart, &raw) {
        Some(document) if document.len() >= MIN_DOCUMENT_LEN => {
            eprintln!("Extracted {} document", chart);
            document
        }
        _ => {
            let seed = args.fallback_seed.as_deref().unwrap_or(&raw);
            eprintln!("Extraction failed; using the {} fallback template", chart);
            fallback(chart, seed)
        }
    };
    document.push('\n');

    match args.output {
        Some(path) => {
            std::fs::write(&path, document)
                .map_err(|e| format!("Failed to write output: {}", e))?;
            eprintln!("Mermaid saved to: {}", path.display());
        }
        None => print!("{}", document),
    }

    Ok(())
}
