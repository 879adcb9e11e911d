use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "veloria", version, about = "Veloria health assistant tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Show how a message is normalized and classified. Never calls the model.
    Classify {
        /// Message text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Answer a message, calling the model if needed (needs `HF_API_KEY`).
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}
