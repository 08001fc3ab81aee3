use clap::{Args, Parser, Subcommand};
use photo_catalog::{
    generate_manifest, load_catalog, manifest::MANIFEST_FILE_NAME, CatalogBuilder, CatalogConfig,
    CatalogError,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "photo-catalog", version, about = "Portfolio photo catalog from a manifest")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write manifest.json for a directory of photos
    Generate {
        /// Directory holding the photos
        dir: PathBuf,
    },
    /// Print the catalog, newest first
    List {
        #[command(flatten)]
        source: SourceArgs,
        /// Print photo records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the hero background image path
    Hero {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Manifest URL or file path
    #[arg(long)]
    manifest: Option<String>,
    /// URL prefix the site is served under
    #[arg(long)]
    base_path: Option<String>,
}

impl SourceArgs {
    /// Command line values override the config file
    fn apply(self, config: &mut CatalogConfig) -> Result<(), CatalogError> {
        if let Some(manifest) = self.manifest {
            config.manifest = manifest;
        }
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        config.validate()?;
        Ok(())
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<CatalogConfig, CatalogError> {
    let config = match path {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::load_default()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Generate { dir } => {
            let manifest = generate_manifest(&dir)?;
            println!("✅ Generated manifest with {} photos:", manifest.photos.len());
            for photo in &manifest.photos {
                println!("  - {}", photo);
            }
            println!("📁 Manifest saved to: {}", dir.join(MANIFEST_FILE_NAME).display());
        }
        Command::List { source, json } => {
            source.apply(&mut config)?;
            let catalog = load_catalog(
                &config.manifest_source(),
                &CatalogBuilder::from_config(&config),
            )
            .await;

            if json {
                println!("{}", serde_json::to_string_pretty(catalog.photos())?);
            } else if catalog.is_empty() {
                println!("📭 No photos found in {}", config.manifest);
            } else {
                println!("🖼️  Hero: {}", catalog.hero_path());
                for photo in catalog.gallery(config.exclude_hero) {
                    println!(
                        "📸 {:<20} {:<32} {}",
                        photo.display_date(),
                        photo.title(),
                        photo.path()
                    );
                }
                println!("📊 {} photos", catalog.len());
            }
        }
        Command::Hero { source } => {
            source.apply(&mut config)?;
            let catalog = load_catalog(
                &config.manifest_source(),
                &CatalogBuilder::from_config(&config),
            )
            .await;
            println!("{}", catalog.hero_path());
        }
    }

    Ok(())
}
