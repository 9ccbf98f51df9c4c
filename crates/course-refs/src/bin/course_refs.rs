//! course-refs command-line tool
//!
//! Resolves course references against a catalog snapshot exported as CSV
//! (`id,course_number` columns), or extracts course numbers from text.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use course_refs::{
    extract_all, CourseRecord, CourseTable, ResolutionPolicy, ResolveError, Resolver,
    ResolverConfig,
};

#[derive(Parser)]
#[command(name = "course-refs", version, about = "Resolve course references against a catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve references all-or-nothing and print the course ids as JSON
    Resolve {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Diagnostic label reported on failure
        #[arg(short, long, default_value = "command line")]
        label: String,
        /// Raw course references
        #[arg(required = true)]
        references: Vec<String>,
    },
    /// Resolve a single reference and show which stage matched
    Lookup {
        #[command(flatten)]
        catalog: CatalogArgs,
        reference: String,
    },
    /// Print the course numbers found in free text as JSON
    Extract { text: String },
}

#[derive(clap::Args)]
struct CatalogArgs {
    /// Catalog snapshot CSV with `id` and `course_number` columns
    #[arg(short, long)]
    catalog: PathBuf,
    /// Resolution policy TOML (aliases and suffix pattern)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CatalogArgs {
    fn load(&self) -> Result<(CourseTable, Resolver), Box<dyn std::error::Error>> {
        let policy = match &self.config {
            Some(path) => ResolverConfig::from_path(path)?.into_policy()?,
            None => ResolutionPolicy::default(),
        };
        let table = load_catalog(&self.catalog)?;
        tracing::info!("Loaded {} course(s) from {:?}", table.len(), self.catalog);
        Ok((table, Resolver::new(policy)))
    }
}

fn load_catalog(path: &Path) -> Result<CourseTable, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize::<CourseRecord>()
        .collect::<Result<CourseTable, _>>()
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Resolve {
            catalog,
            label,
            references,
        } => {
            let (table, resolver) = catalog.load()?;
            match resolver.resolve_all(&table, &references, &label) {
                Ok(ids) => {
                    println!("{}", serde_json::to_string_pretty(&ids)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(err @ ResolveError::Unresolved { .. }) => {
                    eprintln!("{}", err);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Lookup { catalog, reference } => {
            let (table, resolver) = catalog.load()?;
            match resolver.resolve_detailed(&table, &reference) {
                Some(resolution) => {
                    println!(
                        "{} ({} match on '{}')",
                        resolution.id,
                        resolution.stage.display_name(),
                        resolution.key
                    );
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("not found");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Extract { text } => {
            println!("{}", serde_json::to_string_pretty(&extract_all(&text))?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
