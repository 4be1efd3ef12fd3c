//! Common CLI types

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary (default)
    Text,
    /// Report document as JSON
    Json,
    /// Report document as YAML
    Yaml,
}

impl OutputFormat {
    /// Text output is the only mode that gets decorations like spinners and banners
    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
