//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                let discovery = &config.discovery;
                println!("✓ Configuration is valid!");
                println!("  Max word length: {}", discovery.max_word_length());
                println!("  Top K: {}", discovery.top_k());
                println!(
                    "  Excluded characters: {}",
                    discovery.excluded_chars().iter().collect::<String>()
                );
                println!(
                    "  Missing entropy: {}",
                    discovery.missing_entropy().as_str()
                );
                println!(
                    "  Execution mode: {}",
                    discovery.execution_mode().as_str()
                );
                println!("  Output format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", contents).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_config() {
        let file = config_file(
            r#"
[discovery]
max_word_length = 5
top_k = 20

[output]
default_format = "markdown"
"#,
        );

        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        let file = config_file("[discovery]\nlog_base = 1.0\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };

        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("log_base"));
    }

    #[test]
    fn test_validate_syntax_error() {
        let file = config_file("[discovery\n");
        let args = ValidateArgs {
            config: file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/kotoba.toml"),
        };
        assert!(args.execute().is_err());
    }
}
