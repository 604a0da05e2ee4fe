use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prompt-booster")]
#[command(about = "Turns rough prompts into polished ones using heuristics and Gemini")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the config file [default: ~/.prompt-booster/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Address to bind, overrides the config file
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides the config file
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply the heuristic stages only, without calling the model
    Enhance {
        /// Prompt text; read from stdin when omitted
        prompt: Option<String>,
    },
    /// Run the full pipeline and print the polished prompt
    Boost {
        /// Prompt text; read from stdin when omitted
        prompt: Option<String>,
    },
    /// Show configuration
    Config,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
        }
    }
}
