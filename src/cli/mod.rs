use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ImageConfig;

#[derive(Parser)]
#[command(name = "imgname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the container image reference for a Rust application
    Resolve {
        /// Path to the Rust project directory
        #[arg(value_name = "DIRECTORY")]
        path: Option<PathBuf>,

        /// Config file to use instead of the default location
        #[arg(long, env = "IMGNAME_CONFIG")]
        config: Option<PathBuf>,

        #[command(flatten)]
        image: ImageArgs,

        /// User name to use as namespace instead of the current OS user
        #[arg(long, env = "IMGNAME_USER")]
        user: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Debug, Default)]
pub struct ImageArgs {
    /// Group (namespace) of the image; must not contain whitespace
    #[arg(long, env = "IMGNAME_GROUP")]
    pub group: Option<String>,

    /// Registry prefix (e.g., ghcr.io)
    #[arg(long, env = "IMGNAME_REGISTRY")]
    pub registry: Option<String>,

    /// Image name, defaults to the package name
    #[arg(long)]
    pub name: Option<String>,

    /// Image tag, defaults to the package version
    #[arg(long)]
    pub tag: Option<String>,

    /// Full image reference, replacing the derived one
    #[arg(long)]
    pub image: Option<String>,

    /// Extra tag to publish the image under
    /// Can be specified multiple times or as a comma-separated list
    #[arg(long = "additional-tag", value_delimiter = ',')]
    pub additional_tags: Vec<String>,
}

impl From<ImageArgs> for ImageConfig {
    fn from(args: ImageArgs) -> Self {
        ImageConfig {
            registry: args.registry,
            group: args.group,
            name: args.name,
            tag: args.tag,
            image: args.image,
            additional_tags: args.additional_tags,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One image reference per line
    #[default]
    Text,
    /// A single JSON object
    Json,
}
