use anyhow::Context;
use clap::{Parser, Subcommand};
use graph_intake::{
    config::{CliConfig, IntakeConfig},
    intake::{DryRunExecutor, GraphIntake},
};
use std::io::Read;
use std::path::{Path, PathBuf};

/// graph-intake - Generate Cypher statements from JSON graph payloads
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file (overrides the options below)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Result cap for reads without --limit (0 = no cap)
    #[arg(
        long,
        global = true,
        env = "GRAPH_INTAKE_DEFAULT_LIMIT",
        default_value_t = 20,
        allow_negative_numbers = true
    )]
    default_limit: i64,

    /// Report generated statements before execution
    #[arg(
        long,
        global = true,
        env = "GRAPH_INTAKE_LOG_STATEMENTS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    log_statements: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// MERGE statement for a JSON array of nodes
    Nodes {
        /// Payload file, or - for stdin
        file: PathBuf,
    },
    /// MATCH + CREATE statement for a JSON array of relationships
    Relationships {
        /// Payload file, or - for stdin
        file: PathBuf,
    },
    /// Read statement for a JSON node pattern
    Match {
        /// Payload file, or - for stdin
        file: PathBuf,

        /// Maximum number of nodes to return (0 = no cap)
        #[arg(long)]
        limit: Option<i64>,
    },
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        CliConfig {
            default_limit: cli.default_limit,
            log_statements: cli.log_statements,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Defaults to INFO level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => IntakeConfig::from_yaml_file(path),
        None => IntakeConfig::from_cli(CliConfig::from(&cli)),
    }
    .context("Configuration error")?;

    let intake = GraphIntake::new(DryRunExecutor::new(), config);

    match cli.command {
        Command::Nodes { file } => {
            intake.create_nodes_from_json(&read_input(&file)?).await?;
        }
        Command::Relationships { file } => {
            intake
                .create_relationships_from_json(&read_input(&file)?)
                .await?;
        }
        Command::Match { file, limit } => {
            intake.get_nodes_from_json(&read_input(&file)?, limit).await?;
        }
    }

    for statement in intake.executor().statements() {
        println!("{}", statement);
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read payload from stdin")?;
        Ok(input)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file {}", path.display()))
    }
}
