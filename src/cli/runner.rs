//! CLI command dispatch

use super::commands::{Cli, Commands, OutputFormat};
use crate::codegen::Generator;
use crate::config::ToolkitConfig;
use crate::error::Result;
use crate::filters::services::{self, SLICE_SERVICE_NAMES};
use crate::kafka::{find_scram_secrets, KafkaClient};
use std::path::Path;
use tracing::info;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for a parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::ScramSecrets { cluster_arn } => self.run_scram_secrets(cluster_arn).await,
            Commands::Generate { output_dir, check } => self.run_generate(output_dir, *check),
            Commands::Services => self.run_services(),
        }
    }

    /// Resolve the endpoint configuration: file, flag, then environment
    fn resolve_config(&self) -> Result<ToolkitConfig> {
        if let Some(path) = &self.cli.config {
            return ToolkitConfig::load(path);
        }
        if let Some(endpoint) = &self.cli.endpoint {
            let config = ToolkitConfig::new(endpoint.clone());
            config.validate()?;
            return Ok(config);
        }
        ToolkitConfig::from_env()
    }

    async fn run_scram_secrets(&self, cluster_arn: &str) -> Result<()> {
        let config = self.resolve_config()?;
        let client = KafkaClient::new(&config)?;
        let secrets = find_scram_secrets(&client, cluster_arn).await?;

        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&secrets)?),
            OutputFormat::Plain => {
                for arn in &secrets {
                    println!("{arn}");
                }
            }
        }
        Ok(())
    }

    fn run_generate(&self, output_dir: &Path, check: bool) -> Result<()> {
        let generator = Generator::builtin();
        if check {
            generator.check(output_dir)?;
            info!("generated service filters are up to date");
        } else {
            let path = generator.write_to(output_dir)?;
            info!(path = %path.display(), "generation complete");
        }
        Ok(())
    }

    fn run_services(&self) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                let mut entries = serde_json::Map::new();
                for service in SLICE_SERVICE_NAMES {
                    let meta = services::lookup(service)?;
                    entries.insert(
                        service.to_string(),
                        serde_json::json!({
                            "package": meta.package,
                            "filter_type": meta.filter_type,
                            "name_field": meta.name_field,
                            "values_field": meta.values_field,
                        }),
                    );
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::Value::Object(entries))?
                );
            }
            OutputFormat::Plain => {
                for service in SLICE_SERVICE_NAMES {
                    let meta = services::lookup(service)?;
                    println!("{service}\t{}::{}", meta.package, meta.filter_type);
                }
            }
        }
        Ok(())
    }
}
