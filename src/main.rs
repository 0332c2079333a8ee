use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailnet::config::AnalysisConfig;

/// Builds a weighted communication graph from email metadata and ranks
/// identities by influence.
#[derive(Parser, Debug)]
#[command(name = "mailnet")]
#[command(version)]
struct Args {
    /// TOML settings file; flags below override its values
    #[arg(short, long, env = "MAILNET_CONFIG")]
    config: Option<PathBuf>,

    /// Email table (MetadataFrom, MetadataTo)
    #[arg(long)]
    emails: Option<PathBuf>,

    /// Alias table (Alias, PersonId)
    #[arg(long)]
    aliases: Option<PathBuf>,

    /// Person table (Id, Name)
    #[arg(long)]
    persons: Option<PathBuf>,

    /// Minimum importance kept in the filtered view
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Number of ranked identities to print
    #[arg(long)]
    top: Option<usize>,

    /// Write the scored graph as JSON
    #[arg(long, value_name = "PATH")]
    export_json: Option<PathBuf>,

    /// Write the ranking as CSV
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut AnalysisConfig) {
        if let Some(path) = self.emails {
            config.input.emails = path;
        }
        if let Some(path) = self.aliases {
            config.input.aliases = path;
        }
        if let Some(path) = self.persons {
            config.input.persons = path;
        }
        if let Some(threshold) = self.threshold {
            config.report.threshold = threshold;
        }
        if let Some(top) = self.top {
            config.report.top = top;
        }
        if self.export_json.is_some() {
            config.export.json = self.export_json;
        }
        if self.export_csv.is_some() {
            config.export.csv = self.export_csv;
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailnet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match AnalysisConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => AnalysisConfig::default(),
    };
    args.apply(&mut config);

    if let Err(e) = mailnet::cli::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
