//! Command-line argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "podman-docker-names")]
#[command(about = "Normalize container image names between podman and docker conventions")]
#[command(version, author)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress all output except results and errors
    #[arg(long = "quiet", short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the fully qualified name docker stores the image under
    Normalize {
        /// Image reference to normalize
        image: String,

        /// Tag to join with the image before normalizing; a full reference
        /// here overrides the image entirely
        #[arg(long = "tag", short = 't')]
        tag: Option<String>,
    },

    /// Print the minimal repository[:tag] form with registry and namespace stripped
    ShortName {
        /// Image reference to shorten
        image: String,
    },

    /// Show how the reference is classified (tag, namespace, registry shape)
    Classify {
        /// Image reference to classify
        image: String,
    },

    /// Report the active storage driver and fuse-overlayfs availability
    Inspect,
}
