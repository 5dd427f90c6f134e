use std::path::PathBuf;

use channel_extract::ExtractPaths;
use clap::{Parser, ValueEnum};

/// Extract the text of every page of the channel listing PDF into a text file.
///
/// With no arguments, reads List-Channels.pdf at the repository root and
/// writes channel_list_full.txt next to it.
#[derive(Debug, Parser)]
#[command(name = "extract-channels", about, version)]
pub struct Cli {
    /// Source PDF. Default: List-Channels.pdf at the repository root
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Destination text file, replaced if present. Default: channel_list_full.txt at the repository root
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = TextFormat::Text)]
    pub format: TextFormat,

    /// Use layout-preserving text extraction
    #[arg(long)]
    pub layout: bool,
}

/// Rendering of the extracted pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextFormat {
    /// `===== PAGE n =====` markers followed by each page's text
    Text,
    /// JSON array of {"page", "text"} objects
    Json,
}

impl Cli {
    /// Input and output paths after applying any overrides.
    pub fn paths(&self) -> ExtractPaths {
        let mut paths = ExtractPaths::defaults();
        if let Some(input) = &self.input {
            paths = paths.with_input(input);
        }
        if let Some(output) = &self.output {
            paths = paths.with_output(output);
        }
        paths
    }
}
