mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use edgerank::config::AlgorithmConfig;
use edgerank::{current_timestamp, rank_detailed_at, ranked_items, synthetic, CandidateItem, ViewerContext};

#[derive(Parser)]
#[command(name = "edgerank", about = "Community feed ranking engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Rank(RankArgs),
    Gen(GenArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct RankArgs {
    /// JSON input: either a candidate array or {"candidates": [...], "viewer": {...}}.
    /// Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Flat tenant override blob (the admin page's feed_algorithm JSON).
    #[arg(long)]
    tenant_config: Option<PathBuf>,
    /// Unix timestamp to rank at; defaults to the current time.
    #[arg(long)]
    now: Option<i64>,
    /// Emit the per-factor breakdown instead of the compact ranking.
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct GenArgs {
    #[arg(long, default_value_t = 50)]
    count: usize,
    #[arg(long, default_value_t = 8)]
    authors: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Rank(RankArgs::default()));

    match command {
        Command::Rank(args) => run_rank(args),
        Command::Gen(args) => run_gen(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_rank(args: RankArgs) -> Result<(), String> {
    let (mut config, _) = AlgorithmConfig::load(args.config)?;
    if let Some(path) = args.tenant_config.as_deref() {
        let raw = read_file(path)?;
        let overrides: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|err| format!("invalid tenant config JSON: {}", err))?;
        config.apply_tenant_overrides(&overrides);
    }

    let raw = read_input(args.input)?;
    let (candidates, viewer) = parse_batch(&raw)?;
    let now = args.now.unwrap_or_else(current_timestamp);

    let scored = rank_detailed_at(&candidates, &viewer, &config, now);
    let payload = if args.details {
        serde_json::to_string_pretty(&scored)
    } else {
        serde_json::to_string_pretty(&ranked_items(&scored))
    }
    .map_err(|err| format!("failed to serialize output: {}", err))?;

    println!("{}", payload);
    Ok(())
}

fn run_gen(args: GenArgs) -> Result<(), String> {
    let candidates =
        synthetic::generate_candidates(args.count, args.authors, args.seed, current_timestamp());
    let payload = serde_json::to_string_pretty(&candidates)
        .map_err(|err| format!("failed to serialize candidates: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn parse_batch(raw: &str) -> Result<(Vec<CandidateItem>, ViewerContext), String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|err| format!("invalid input JSON: {}", err))?;

    if value.is_array() {
        let candidates = serde_json::from_value(value)
            .map_err(|err| format!("invalid candidate list: {}", err))?;
        return Ok((candidates, ViewerContext::default()));
    }

    #[derive(serde::Deserialize)]
    struct Batch {
        #[serde(default)]
        candidates: Vec<CandidateItem>,
        #[serde(default)]
        viewer: ViewerContext,
    }

    let batch: Batch =
        serde_json::from_value(value).map_err(|err| format!("invalid input batch: {}", err))?;
    Ok((batch.candidates, batch.viewer))
}

fn read_input(path: Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = path {
        return read_file(&path);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing input: pass --input or pipe JSON".to_string());
    }
    Ok(buffer)
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
