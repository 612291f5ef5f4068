use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `pressroom-mcp` - drive the Pressroom content pipeline from any MCP client.
#[derive(Parser, Debug)]
#[command(name = "pressroom-mcp")]
#[command(version)]
#[command(about = "MCP server for the Pressroom content backend.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.pressroom/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run; `serve` when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the MCP server on stdio
    Serve,

    /// List registered tools
    Tools,

    /// Invoke one tool and print its text
    Call {
        /// Tool name, e.g. pressroom_list_orgs
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,
    },

    /// Run the read-only smoke suite against the live backend
    Smoke {
        /// Org to exercise (default: first org returned by the backend)
        #[arg(long)]
        org: Option<i64>,
    },

    /// Print the resolved configuration
    Status,
}
