//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use kotoba_core::config::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to tune discovery");
        println!("2. Validate your configuration:");
        println!("   kotoba validate -c {}", self.output.display());
        println!("3. Use it for discovery:");
        println!(
            "   kotoba discover -i corpus.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        let excluded: Vec<String> = defaults::EXCLUDED_CHARS
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect();

        format!(
            r#"# kotoba configuration

[discovery]
# Longest candidate word in characters (1 to {max_len_limit})
max_word_length = {max_len}

# Words reported for each length from 2 to max_word_length
top_k = {top_k}

# Characters that disqualify a candidate. They still count as neighbors.
excluded_chars = [{excluded}]

# Logarithm base for entropy and cohesion, greater than 1
log_base = {log_base:.1}

# Words with no neighbor on one side (sentence edges):
#   "zero"    - score them as 0
#   "exclude" - leave them out of the ranking
missing_entropy = "zero"

# "parallel" or "sequential" scoring
execution_mode = "parallel"

# Scoring threads; omit to use every core
# threads = 4

[output]
# text, json, markdown or dict
default_format = "text"

# Indent JSON output
pretty_json = true

# Show composite values in text and markdown output
include_scores = false
"#,
            max_len = defaults::MAX_WORD_LENGTH,
            max_len_limit = defaults::MAX_WORD_LENGTH_LIMIT,
            top_k = defaults::TOP_K,
            excluded = excluded.join(", "),
            log_base = defaults::LOG_BASE,
        )
    }
}
