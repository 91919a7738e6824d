use anyhow::Result;
use clap::Parser;
use imgname::{
    cli::{Cli, Commands, OutputFormat},
    config::{Config, ImageConfig},
    service::{IdentityDetector, ResolveRequest, ResolveService},
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            path,
            config,
            image,
            user,
            output,
        } => {
            let file_config = match config {
                Some(config_path) => Config::load_from(&config_path)?,
                None => Config::load()?,
            };
            let image_config = file_config.image.merge(ImageConfig::from(image));
            debug!("Image configuration: {:?}", image_config);

            let resolved = ResolveService::resolve(ResolveRequest {
                project_path: path.unwrap_or_else(|| PathBuf::from(".")),
                image: image_config,
                user: user.or_else(IdentityDetector::detect),
            })?;

            // Print only the references to stdout
            match output {
                OutputFormat::Text => {
                    for image in resolved.images() {
                        println!("{}", image);
                    }
                }
                OutputFormat::Json => println!("{}", resolved.to_json()?),
            }
        }
        Commands::Version => {
            println!("imgname {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
