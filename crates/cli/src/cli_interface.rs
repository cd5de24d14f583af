use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API key gateway service
    Start {
        /// optional - The path to the project, default will be where the command is run.
        #[clap(long, short)]
        path: Option<String>,
    },
}
