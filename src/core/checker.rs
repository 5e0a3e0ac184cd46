use crate::config::site_config::SiteConfig;
use crate::core::checks;
use crate::domain::model::{CheckReport, Violation};
use crate::domain::ports::DocsRepository;
use crate::utils::error::Result;

/// Runs every lint check against a loaded configuration and the docs
/// tree it references, and assembles the report.
pub struct Checker<'a, D: DocsRepository> {
    config: &'a SiteConfig,
    docs: &'a D,
    config_path: String,
}

impl<'a, D: DocsRepository> Checker<'a, D> {
    pub fn new(config: &'a SiteConfig, docs: &'a D, config_path: &str) -> Self {
        Self {
            config,
            docs,
            config_path: config_path.to_string(),
        }
    }

    pub fn run(&self) -> Result<CheckReport> {
        let mut violations = Vec::new();

        tracing::debug!("Checking theme, plugins and markdown extensions");
        violations.extend(checks::check_theme(self.config));
        violations.extend(checks::check_plugins(self.config));
        violations.extend(checks::check_extensions(self.config));

        tracing::debug!("Checking navigation structure");
        violations.extend(checks::check_duplicate_nav_titles(self.config));
        violations.extend(checks::check_duplicate_nav_paths(self.config));
        violations.extend(checks::check_empty_sections(self.config));

        if self.docs.dir_exists() {
            tracing::debug!("Checking docs tree under `{}`", self.config.docs_dir());
            violations.extend(checks::check_nav_paths_exist(self.config, self.docs));
            violations.extend(checks::check_orphan_pages(self.config, self.docs)?);
            violations.extend(checks::check_local_assets(self.config, self.docs));
        } else {
            violations.push(Violation::new(
                "DOCS_DIR_MISSING",
                format!("docs directory `{}` does not exist", self.config.docs_dir()),
                "create the directory or fix `site.docs_dir`",
                Some(self.config.docs_dir()),
            ));
        }

        tracing::info!("Found {} violation(s)", violations.len());
        Ok(CheckReport::new(&self.config_path, violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fs_docs::FsDocs;
    use tempfile::TempDir;

    #[test]
    fn test_docs_dir_missing_short_circuits_tree_checks() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
name = "test"

[[nav]]
title = "Home"
path = "index.md"

[theme]
name = "material"
"#,
        )
        .unwrap();

        let temp_dir = TempDir::new().unwrap();
        let docs = FsDocs::new(temp_dir.path().join("docs"));
        let report = Checker::new(&config, &docs, "site.toml").run().unwrap();

        let codes: Vec<&str> = report.violations.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["DOCS_DIR_MISSING"]);
    }
}
