use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "iso-duration")]
#[command(about = "Parse, normalize and convert ISO-8601 durations")]
pub struct CliConfig {
    /// Durations to parse, e.g. P1Y2DT3H4M5S or P2W
    pub durations: Vec<String>,

    /// Read additional durations from a file, one per line
    #[arg(long)]
    pub file: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 收集所有輸入：先命令列參數，再檔案內容
    pub fn inputs(&self) -> std::io::Result<Vec<String>> {
        let mut inputs = self.durations.clone();

        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(Path::new(path))?;
            inputs.extend(parse_input_lines(&content));
        }

        Ok(inputs)
    }
}

/// Trimmed, non-empty lines; `#` starts a comment line.
pub fn parse_input_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.durations.is_empty() && self.file.is_none() {
            return Err(ConfigError::Missing {
                field: "durations or --file".to_string(),
            });
        }

        for duration in &self.durations {
            validate_non_empty_string("durations", duration)?;
        }

        if let Some(path) = &self.file {
            validate_path("file", path)?;
        }

        Ok(())
    }
}
