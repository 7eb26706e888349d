//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use gehyph_engine::HarmonicClusters;

pub mod generate_config;
pub mod hyphenate;
pub mod validate;

use crate::output::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hyphenate Georgian text from files, inline text or stdin
    Hyphenate(hyphenate::HyphenateArgs),

    /// Check a JSON exception dictionary
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the built-in harmonic consonant clusters
    Clusters,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Hyphenate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Output lines of the listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Clusters => HarmonicClusters::default().to_sorted_vec(),
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|(format, description)| {
                    let name = format!("{format:?}").to_lowercase();
                    format!("{name:<10} {description}")
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_clusters() {
        let lines = ListCommands::Clusters.lines();
        assert_eq!(lines.len(), 67);
        assert!(lines.contains(&"სწ".to_string()));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("text"));
        assert!(lines[3].starts_with("hunspell"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
