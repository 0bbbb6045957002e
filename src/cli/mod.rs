pub mod init;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "influence")]
#[command(version)]
#[command(about = "Content backend for the Influence site", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "influence.toml", env = "INFLUENCE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter config and create the upload directory
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Create tables and add missing columns, then exit
    Migrate,
    /// Run the HTTP server
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
}
