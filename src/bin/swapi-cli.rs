use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "swapi-cli")]
#[command(about = "Query a running SWAPI proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one starship by id
    Starship { id: String },
    /// List starships
    Starships,
    /// Fetch one person by id
    Person { id: String },
    /// List people
    People,
    /// Check proxy health
    Health,
}

impl Commands {
    fn path(&self) -> String {
        match self {
            Commands::Starship { id } => format!("/api/v1/starships/{}", id),
            Commands::Starships => "/api/v1/starships".to_string(),
            Commands::Person { id } => format!("/api/v1/people/{}", id),
            Commands::People => "/api/v1/people".to_string(),
            Commands::Health => "/health".to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = format!("{}{}", cli.url.trim_end_matches('/'), cli.command.path());
    let res = client.get(url).send().await?;
    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
