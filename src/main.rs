use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use release_director::config::DirectorConfig;
use release_director::release::catalog::ReleaseCatalog;
use release_director::release::resolver;
use release_director::release::sqlite::SqliteStore;
use release_director::release::store::ReleaseStore;
use release_director::release::version::normalize;

#[derive(Parser)]
#[command(name = "release-director")]
#[command(version, about = "Inspect releases and resolve release versions")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Release database, overriding the configured one
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List releases and their versions
    List {
        /// Only list this release
        #[arg(long)]
        release: Option<String>,

        /// Only list versions starting with this prefix
        #[arg(long, requires = "release")]
        prefix: Option<String>,
    },
    /// Resolve a version of a release, accepting either dev-build notation
    FindVersion { release: String, version: String },
    /// Print a dev version in its other notation
    Normalize { version: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DirectorConfig::load(path)?,
        None => DirectorConfig::default(),
    };
    let _guard = release_director::logging::init(&config.log_file(), &config.logging.level)?;

    let db_path = cli.database.unwrap_or_else(|| config.database_path());

    match cli.command {
        Command::List { release, prefix } => {
            let store: Arc<dyn ReleaseStore> = Arc::new(SqliteStore::open(&db_path)?);
            let catalog = ReleaseCatalog::new(Arc::clone(&store));

            match release {
                None => print_json(&catalog.all_releases()?),
                Some(name) => {
                    let release = resolver::find_release(store.as_ref(), &name)?;
                    print_json(&catalog.sorted_release_versions(&release, prefix.as_deref())?)
                }
            }
        }
        Command::FindVersion { release, version } => {
            let store = SqliteStore::open(&db_path)?;
            let release = resolver::find_release(&store, &release)?;
            let versions = store.versions(&release)?;

            print_json(resolver::find_version(&release, &versions, &version)?)
        }
        Command::Normalize { version } => {
            let normalized = normalize(&version)
                .with_context(|| format!("`{version}' has no alternate dev notation"))?;
            println!("{normalized}");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
