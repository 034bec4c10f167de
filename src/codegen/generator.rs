//! Service filter accessor generator

use super::formatter::format_source;
use crate::error::{Error, Result};
use crate::filters::services::{self, SLICE_SERVICE_NAMES};
use crate::template::{render, TemplateContext};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed name of the generated source file
pub const GENERATED_FILENAME: &str = "service_filters_gen.rs";

const FILE_HEADER: &str = "// Code generated by generate-service-filters; DO NOT EDIT.\n";

const METHOD_TEMPLATE: &str = r"    /// Builds `{{ service }}` service filters from the generic name/values map.
    ///
    /// Returns `None` when the map is empty, one record per name otherwise.
    pub fn {{ service }}_filters(&self) -> Option<Vec<{{ package }}::{{ filter_type }}>> {
        let m = self.map();
        if m.is_empty() {
            return None;
        }
        let mut result = Vec::with_capacity(m.len());
        for (filter_name, filter_values) in m {
            result.push({{ package }}::{{ filter_type }} {
                {{ name_field }}: filter_name,
                {{ values_field }}: filter_values,
            });
        }
        Some(result)
    }";

/// Renders the service filter accessor source file
pub struct Generator {
    service_names: Vec<String>,
}

impl Generator {
    /// Create a generator over an explicit service list
    pub fn new<I, S>(service_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            service_names: service_names.into_iter().map(Into::into).collect(),
        }
    }

    /// Generator over the built-in slice service list
    pub fn builtin() -> Self {
        Self::new(SLICE_SERVICE_NAMES)
    }

    /// Render the full generated file contents
    ///
    /// Deterministic: service names are sorted and deduplicated before
    /// rendering, so output is byte-identical across runs and independent
    /// of input list order.
    pub fn render(&self) -> Result<String> {
        // Always sort to reduce any potential generation churn
        let mut names: Vec<&str> = self.service_names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();

        if names.is_empty() {
            return Err(Error::generation("service list is empty"));
        }

        let mut aliases = Vec::with_capacity(names.len());
        for name in &names {
            aliases.push(services::filter_package(name)?);
        }
        aliases.sort_unstable();
        aliases.dedup();

        let mut buffer = String::new();
        buffer.push_str(FILE_HEADER);
        buffer.push('\n');
        buffer.push_str(&format!(
            "use crate::filters::sdk::{{{}}};\n",
            aliases.join(", ")
        ));
        buffer.push_str("use crate::filters::NameValuesFilters;\n\n");
        buffer.push_str("impl NameValuesFilters {\n");

        let mut methods = Vec::with_capacity(names.len());
        for name in &names {
            let meta = services::lookup(name)?;
            let ctx = TemplateContext::new()
                .with("service", *name)
                .with("package", meta.package)
                .with("filter_type", meta.filter_type)
                .with("name_field", meta.name_field)
                .with("values_field", meta.values_field);
            methods.push(render(METHOD_TEMPLATE, &ctx)?);
        }
        buffer.push_str(&methods.join("\n\n"));
        buffer.push_str("\n}\n");

        format_source(&buffer)
    }

    /// Render and write the generated file into a directory
    ///
    /// The fixed filename is overwritten unconditionally. Render and
    /// format failures leave any existing file untouched; only the final
    /// write can fail partway.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let contents = self.render()?;
        let path = dir.as_ref().join(GENERATED_FILENAME);
        fs::write(&path, contents)?;
        info!(path = %path.display(), "wrote generated service filters");
        Ok(path)
    }

    /// Verify the on-disk generated file matches a fresh render
    pub fn check(&self, dir: impl AsRef<Path>) -> Result<()> {
        let expected = self.render()?;
        let path = dir.as_ref().join(GENERATED_FILENAME);
        let actual = fs::read_to_string(&path).map_err(|_| Error::FileNotFound {
            path: path.display().to_string(),
        })?;

        if actual == expected {
            Ok(())
        } else {
            Err(Error::StaleGeneratedFile {
                path: path.display().to_string(),
            })
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::builtin()
    }
}
