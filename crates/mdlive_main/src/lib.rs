mod cli;
pub mod server;
mod term;

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use mdlive_render::TreeRenderer;

pub use cli::{Cli, Command};
pub use term::TermView;

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render { file } => render(file.as_deref()),
        Command::Serve { port, interval_ms } => {
            server::run(port, Duration::from_millis(interval_ms))
        }
    }
}

/// Read a document tree (JSON) from a file or stdin and print it
/// through the terminal backend.
fn render(file: Option<&Path>) -> Result<()> {
    let json = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read document from stdin")?;
            buffer
        }
    };

    let tree = mdlive_hast::parse_document(&json)?;
    let renderer = TreeRenderer::new(TermView);
    for part in renderer.render(&tree).into_vec() {
        print!("{part}");
    }
    Ok(())
}
