use std::fs;
use std::path::PathBuf;

use artkit::prelude::RandomSource;
use clap::{Parser, Subcommand};
use toolkit::prelude::*;
use toolkit::utils::errors::{Result, ToolkitError};

#[derive(Parser)]
#[command(name = "artkit-cli", about = "Render, document and bundle artkit drawings")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a built-in scene as JSON
    Render {
        /// Scene name (see `artkit-cli scenes`)
        scene: String,

        /// Seed for the random source
        #[arg(long, env = "ARTKIT_SEED")]
        seed: Option<u64>,

        /// Animation frame passed to the scene
        #[arg(long, default_value_t = 0)]
        tick: u64,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the built-in scenes
    Scenes,

    /// Print the API reference as markdown
    Docs {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Include a one-line summary per type
        #[arg(long)]
        summaries: bool,
    },

    /// Bundle source files below a directory into a single file
    Package {
        /// Directory to bundle
        root: PathBuf,

        /// File extension to include
        #[arg(long, default_value = "rs")]
        extension: String,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Unpack a bundle below a directory
    Unpackage {
        /// Bundle file
        bundle: PathBuf,

        /// Directory to unpack into
        prefix: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn emit(text: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            tracing::info!(path = %path.display(), "wrote");
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            scene,
            seed,
            tick,
            pretty,
        } => {
            let drawing = scene_by_name(&scene).ok_or_else(|| {
                ToolkitError::NotFoundError(format!(
                    "scene '{}' (available: {})",
                    scene,
                    scene_names().join(", ")
                ))
            })?;
            if let Some(seed) = seed {
                RandomSource::seed(seed);
            }
            let shape = drawing.draw(tick);
            tracing::debug!(scene = drawing.name(), root = shape.type_name(), tick, "drawn");
            let json = if pretty {
                shape.to_json_pretty()?
            } else {
                shape.to_json()?
            };
            println!("{}", json);
        }
        Commands::Scenes => {
            for scene in scenes() {
                println!("{:<20} {}", scene.name(), scene.description());
            }
        }
        Commands::Docs { output, summaries } => {
            let doc = DocGenerator::new().with_summaries(summaries).render();
            emit(&doc, output.as_ref())?;
        }
        Commands::Package {
            root,
            extension,
            output,
        } => {
            let text = package(&root, &extension)?;
            emit(&text, output.as_ref())?;
        }
        Commands::Unpackage { bundle, prefix } => {
            let text = fs::read_to_string(&bundle)?;
            let written = unpackage(&text, &prefix)?;
            println!("unpacked {} files into {}", written.len(), prefix.display());
        }
    }
    Ok(())
}
