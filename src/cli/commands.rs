//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Provider toolkit CLI
#[derive(Parser, Debug)]
#[command(name = "provider-toolkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Toolkit configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Service endpoint (overridden by --config; falls back to PROVIDER_ENDPOINT)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every SCRAM secret ARN associated with a cluster
    ScramSecrets {
        /// ARN of the cluster
        #[arg(long)]
        cluster_arn: String,
    },

    /// Generate the service filter accessor source file
    Generate {
        /// Directory to write the generated file into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Verify the existing file is up to date instead of writing
        #[arg(long)]
        check: bool,
    },

    /// List supported service names and their filter metadata
    Services,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One item per line
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_scram_secrets() {
        let cli = Cli::try_parse_from([
            "provider-toolkit",
            "--endpoint",
            "https://kafka.us-east-1.amazonaws.com",
            "scram-secrets",
            "--cluster-arn",
            "arn:aws:kafka:us-east-1:123456789012:cluster/demo/abc",
        ])
        .unwrap();

        assert_eq!(
            cli.endpoint.as_deref(),
            Some("https://kafka.us-east-1.amazonaws.com")
        );
        assert!(matches!(cli.command, Commands::ScramSecrets { .. }));
        assert_eq!(cli.format, OutputFormat::Plain);
    }

    #[test]
    fn test_parse_generate_with_check() {
        let cli = Cli::try_parse_from(["provider-toolkit", "generate", "--check"]).unwrap();

        match cli.command {
            Commands::Generate { output_dir, check } => {
                assert_eq!(output_dir, PathBuf::from("."));
                assert!(check);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_format() {
        let cli =
            Cli::try_parse_from(["provider-toolkit", "--format", "json", "services"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_scram_secrets_requires_cluster_arn() {
        let result = Cli::try_parse_from(["provider-toolkit", "scram-secrets"]);
        assert!(result.is_err());
    }
}
