use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"), about = "Live Markdown/math tree renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a parsed document tree (hast JSON) to the terminal.
    Render {
        /// Path to the document; reads stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Serve the demo SSE stream that emits a sample Markdown document
    /// a few characters at a time.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Delay between emitted chunks, in milliseconds.
        #[arg(long, default_value_t = 75)]
        interval_ms: u64,
    },
}
