//! Baby Tracker CLI
//!
//! Terminal client for the Baby Tracker API:
//! - Open a view by its route, as the browser app would
//! - Log feeds, sleep, growth and diaper changes
//! - List recent entries or show a single one
//! - Generate a config file

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use babytracker::config::{self, Config};
use babytracker::transport::{self, HttpTransport};
use babytracker::{
    DiaperChange, Feed, FieldKind, GrowthMeasurement, RecordKind, Screen, Shell, SleepSession,
    SubmitOutcome, Workflow,
};

#[derive(Parser)]
#[command(name = "babytracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Log feeds, sleep, growth and diaper changes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL, including the /api prefix (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a view by path, e.g. /feeds or /susupoty
    Open {
        #[arg(default_value = "/")]
        path: String,
    },

    /// Feeds
    Feeds {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Sleep sessions
    Sleep {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Growth measurements
    Growth {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Diaper changes
    Diapers {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum RecordAction {
    /// Log a new entry. Date and time default to now.
    Log {
        /// Field values in name=value form, e.g. -s type=Bottle -s quantity=120
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Apply a quick-fill preset first (bottle, breast, wet, dirty)
        #[arg(short, long)]
        quick: Option<String>,
    },

    /// Show the most recent entries, newest first
    Recent,

    /// Show one entry by id
    Show { id: u64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let config = Config::resolve(cli.config.as_deref())?;
    babytracker::logging::init(&config.logging);

    let base_url = cli.api_url.unwrap_or(config.api.base_url);
    tracing::debug!(base_url = %base_url, "Using API");
    let shell = Shell::new(HttpTransport::new(&base_url));

    match cli.command {
        Commands::Open { path } => open(&shell, &path, cli.format).await,
        Commands::Feeds { action } => run::<Feed>(&shell, action, cli.format).await,
        Commands::Sleep { action } => run::<SleepSession>(&shell, action, cli.format).await,
        Commands::Growth { action } => run::<GrowthMeasurement>(&shell, action, cli.format).await,
        Commands::Diapers { action } => run::<DiaperChange>(&shell, action, cli.format).await,
        Commands::Config { .. } => Ok(()),
    }
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &content)
                .with_context(|| format!("writing config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

async fn open(shell: &Shell<HttpTransport>, path: &str, format: OutputFormat) -> anyhow::Result<()> {
    match shell.open(path).await {
        Screen::Feeds(w) => print_view(&w, format),
        Screen::Sleep(w) => print_view(&w, format),
        Screen::Growth(w) => print_view(&w, format),
        Screen::Diapers(w) => print_view(&w, format),
        Screen::NotFound => bail!("404 Not Found"),
    }
}

async fn run<K: RecordKind>(
    shell: &Shell<HttpTransport>,
    action: RecordAction,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        RecordAction::Log { set, quick } => {
            let mut workflow: Workflow<K> = Workflow::new();

            if let Some(key) = quick {
                workflow.quick_fill(&key)?;
            }
            for pair in &set {
                let (name, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Expected FIELD=VALUE, got {:?}", pair))?;
                workflow.set_field(name.trim(), value)?;
            }

            match workflow.submit(shell.transport()).await? {
                SubmitOutcome::Logged { .. } => {
                    if let Some(message) = workflow.feedback() {
                        println!("{}", message);
                    }
                    print_recents(&workflow, format)
                }
                SubmitOutcome::Failed => {
                    bail!("{}", workflow.error().unwrap_or("Submission failed"))
                }
            }
        }

        RecordAction::Recent => {
            let workflow: Workflow<K> = shell.fresh().await;
            print_recents(&workflow, format)
        }

        RecordAction::Show { id } => {
            let record: K = transport::get(shell.transport(), id).await?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
                OutputFormat::Text => println!("{}", record.summarize()),
            }
            Ok(())
        }
    }
}

/// Print the form with its defaults, then the recents list
fn print_view<K: RecordKind>(workflow: &Workflow<K>, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_recents(workflow, format);
    }

    let labels = K::LABELS;
    println!("{}", labels.heading);
    println!("{}", "-".repeat(labels.heading.len()));

    if !workflow.quick_fills().is_empty() {
        let presets: Vec<_> = workflow
            .quick_fills()
            .iter()
            .map(|q| format!("{} (--quick {})", q.label, q.key))
            .collect();
        println!("Quick fill: {}", presets.join(", "));
    }

    for spec in workflow.form().fields() {
        let marker = if spec.required { "*" } else { " " };
        let value = workflow.form().value(spec.name);
        let hint = match spec.kind {
            FieldKind::Choice(options) => format!("one of: {}", options.join(" | ")),
            _ => spec.placeholder.to_string(),
        };
        println!("{} {:<12} {:<28} {:<12} {}", marker, spec.name, spec.label, value, hint);
    }
    println!("  [{}]", labels.submit);
    println!();

    print_recents(workflow, format)
}

fn print_recents<K: RecordKind>(workflow: &Workflow<K>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(workflow.recents())?);
        }
        OutputFormat::Text => {
            println!("{}", K::LABELS.recent_heading);
            if workflow.recents().is_empty() {
                println!("  {}", K::LABELS.empty);
            }
            for record in workflow.recents() {
                let summary = record.summarize();
                match record.id() {
                    Some(id) => println!("  #{:<5} {}", id, summary),
                    None => println!("  {}", summary),
                }
            }
        }
    }
    Ok(())
}
