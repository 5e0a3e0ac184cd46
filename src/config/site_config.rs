use crate::domain::model::NavEntry;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    is_external_url, validate_markdown_path, validate_non_empty_string,
    validate_relative_doc_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Root of the site configuration (`site.toml`). Unknown top-level keys
/// are rejected at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavEntry>,
    pub theme: ThemeConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn env_var_regex() -> regex::Regex {
    regex::Regex::new(r"\$\{([^}]+)\}").unwrap()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<PaletteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteConfig {
    pub scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<PaletteToggle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaletteToggle {
    pub icon: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkdownConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<ExtensionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtensionSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub javascript: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with environment values.
    /// Unset variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = env_var_regex();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Whether the raw TOML text contains `${VAR_NAME}` references.
    /// Serializing a loaded configuration writes the resolved values, so
    /// callers that rewrite files must check this first to avoid baking
    /// environment secrets into the file.
    pub fn has_env_references(content: &str) -> bool {
        env_var_regex().is_match(content)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        validate_non_empty_string("site.docs_dir", &self.site.docs_dir)?;

        if let Some(url) = &self.site.url {
            validate_url("site.url", url)?;
        }
        if let Some(repo_url) = &self.site.repo_url {
            validate_url("site.repo_url", repo_url)?;
        }

        validate_nav_entries(&self.nav)?;

        validate_non_empty_string("theme.name", &self.theme.name)?;
        for feature in &self.theme.features {
            validate_non_empty_string("theme.features", feature)?;
        }
        if let Some(logo) = &self.theme.logo {
            validate_relative_doc_path("theme.logo", logo)?;
        }
        if let Some(favicon) = &self.theme.favicon {
            validate_relative_doc_path("theme.favicon", favicon)?;
        }

        for plugin in &self.plugins {
            validate_non_empty_string("plugins.name", &plugin.name)?;
        }
        for extension in self.markdown_extensions() {
            validate_non_empty_string("markdown.extensions.name", &extension.name)?;
        }

        if let Some(extra) = &self.extra {
            for (field, entries) in [("extra.javascript", &extra.javascript), ("extra.css", &extra.css)]
            {
                for entry in entries {
                    if is_external_url(entry) {
                        validate_url(field, entry)?;
                    } else {
                        validate_relative_doc_path(field, entry)?;
                    }
                }
            }
        }

        Ok(())
    }

    pub fn docs_dir(&self) -> &str {
        &self.site.docs_dir
    }

    pub fn markdown_extensions(&self) -> &[ExtensionSpec] {
        self.markdown
            .as_ref()
            .map(|m| m.extensions.as_slice())
            .unwrap_or(&[])
    }

    /// All external asset URLs (scripts and stylesheets) listed under
    /// `[extra]`, in configuration order.
    pub fn external_urls(&self) -> Vec<String> {
        let mut urls = Vec::new();
        if let Some(extra) = &self.extra {
            for entry in extra.javascript.iter().chain(extra.css.iter()) {
                if is_external_url(entry) {
                    urls.push(entry.clone());
                }
            }
        }
        urls
    }

    /// Local asset paths that should exist under the docs directory.
    pub fn local_assets(&self) -> Vec<(&'static str, String)> {
        let mut assets = Vec::new();
        if let Some(logo) = &self.theme.logo {
            assets.push(("theme.logo", logo.clone()));
        }
        if let Some(favicon) = &self.theme.favicon {
            assets.push(("theme.favicon", favicon.clone()));
        }
        if let Some(extra) = &self.extra {
            for entry in &extra.javascript {
                if !is_external_url(entry) {
                    assets.push(("extra.javascript", entry.clone()));
                }
            }
            for entry in &extra.css {
                if !is_external_url(entry) {
                    assets.push(("extra.css", entry.clone()));
                }
            }
        }
        assets
    }
}

fn validate_nav_entries(entries: &[NavEntry]) -> Result<()> {
    for entry in entries {
        match entry {
            NavEntry::Page { title, path } => {
                validate_non_empty_string("nav.title", title)?;
                validate_markdown_path("nav.path", path)?;
            }
            NavEntry::Section { title, pages } => {
                validate_non_empty_string("nav.title", title)?;
                validate_nav_entries(pages)?;
            }
        }
    }
    Ok(())
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
