use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use chartsmith::chart::{ChartRequest, dispatch};
use chartsmith::completion::GroqClient;
use chartsmith::config::Config;

/// Generate Mermaid diagrams from free-form text or source code
#[derive(Parser, Debug)]
#[command(name = "chartsmith")]
#[command(version)]
#[command(about = "Generate Mermaid diagrams from free-form text or source code", long_about = None)]
struct Args {
    /// Input text file (use "-" for stdin)
    #[arg(value_name = "INPUT", required_unless_present_any = ["completions", "list_models"])]
    input: Option<PathBuf>,

    /// Output file path (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Chart type: flowchart, mindmap, gantt, pie, quadrant, journey, git,
    /// state, class, timeline or sequence (aliases like "project" or
    /// "version-control" work too). Auto-detected when omitted
    #[arg(short = 't', long, value_name = "TYPE")]
    chart_type: Option<String>,

    /// Path to a TOML or YAML config file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured model
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Print the full response envelope as JSON instead of bare Mermaid
    #[arg(long)]
    json: bool,

    /// List the models the completion API offers and exit
    #[arg(long)]
    list_models: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "chartsmith", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(model) = args.model {
        config.model = model;
    }
    let client = GroqClient::new(config);

    if args.list_models {
        let models = client.test_connection()?;
        for model in models {
            println!("{}", model);
        }
        return Ok(());
    }

    let input_path = args.input.ok_or("INPUT is required")?;
    let input = if input_path.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        buffer
    } else {
        std::fs::read_to_string(&input_path)
            .map_err(|e| format!("Failed to read input file: {}", e))?
    };

    let request = ChartRequest {
        input,
        chart_type: args.chart_type,
    };
    let response = dispatch(&client, &request)?;

    eprintln!("Chart type: {}", response.chart_type);
    if let Some(error) = &response.error {
        eprintln!("Completion service error: {}", error);
    }
    if response.fallback {
        eprintln!(
            "Extraction failed; substituted the {} fallback template",
            response.chart_type
        );
    }

    let payload = if args.json {
        let mut json = serde_json::to_string_pretty(&response)
            .map_err(|e| format!("Failed to serialize response: {}", e))?;
        json.push('\n');
        json
    } else {
        let mut code = response.mermaid_code.clone();
        code.push('\n');
        code
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, payload).map_err(|e| format!("Failed to write output: {}", e))?;
            eprintln!("Mermaid saved to: {}", path.display());
        }
        None => print!("{}", payload),
    }

    Ok(())
}
