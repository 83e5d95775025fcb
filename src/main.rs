use std::io::{BufRead, IsTerminal};
use std::sync::Arc;

use tracing::{error, info, Level};

use patentscout::config::SearchConfig;
use patentscout::llm::LlmClient;
use patentscout::pipeline::PatentPipeline;
use patentscout::report;
use patentscout::search::SearchClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenv::dotenv();

    let idea = read_idea()?;

    let search = SearchClient::new(SearchConfig::from_env())?;
    let llm = Arc::new(LlmClient::from_env()?);
    let pipeline = PatentPipeline::new(llm, search);

    info!(idea_len = idea.len(), "starting pipeline run");
    match pipeline.run(&idea).await {
        Ok(result) => {
            print!("{}", report::render(&result));
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "pipeline run failed");
            std::process::exit(1);
        }
    }
}

/// Read the invention description from stdin until EOF.
fn read_idea() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter invention description (end with Ctrl+D):");
    }

    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line?);
    }

    let idea = lines.join("\n").trim().to_string();
    if idea.is_empty() {
        anyhow::bail!("no idea text provided");
    }
    Ok(idea)
}
