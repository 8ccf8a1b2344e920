//! `triage` — classify a complaint from the command line.
//!
//! Runs the same remote-first / local-fallback analysis the submission
//! workflow uses, and prints the result as a readable report or as JSON.

use anyhow::Result;
use clap::Parser;
use complaint_ai::{heuristic, AnalysisClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "triage", about = "Classify a campus maintenance complaint")]
struct Args {
    /// Complaint description text
    description: String,

    /// URL of an image attached to the complaint
    #[arg(long)]
    image_url: Option<String>,

    /// Skip the AI service and run the built-in analyzer only
    #[arg(long)]
    local: bool,

    /// Emit the analysis as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (development)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let analysis = if args.local {
        heuristic::analyze(&args.description, args.image_url.is_some())
    } else {
        let client = AnalysisClient::from_env()?;
        client
            .analyze(&args.description, args.image_url.as_deref())
            .await
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("Category:             {}", analysis.category);
        println!("Priority:             {}", analysis.priority);
        println!("Department:           {}", analysis.department);
        println!("Estimated resolution: {}", analysis.estimated_resolution);
        println!("Risk score:           {}/100", analysis.risk_score);
        println!("Source:               {}", analysis.provenance);
        println!();
        println!("{}", analysis.reasoning);
    }

    Ok(())
}
