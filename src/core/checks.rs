//! Individual lint checks over a loaded configuration and the docs tree
//! it references. Each check returns zero or more violations; the
//! checker in `core::checker` runs them all.

use crate::config::registry;
use crate::config::site_config::SiteConfig;
use crate::domain::model::{nav_page_refs, NavEntry, Violation};
use crate::domain::ports::DocsRepository;
use crate::utils::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

pub fn check_nav_paths_exist(config: &SiteConfig, docs: &dyn DocsRepository) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (title, path) in nav_page_refs(&config.nav) {
        if !docs.exists(&path) {
            violations.push(Violation::new(
                "NAV_PATH_MISSING",
                format!(
                    "nav entry `{}` references missing file `{}/{}`",
                    title,
                    config.docs_dir(),
                    path
                ),
                "remove the stale nav entry or restore the file",
                Some(path.as_str()),
            ));
        }
    }
    violations
}

/// Markdown files under the docs directory that the nav never mentions.
/// Underscore-prefixed directories (`_assets/`, `_drafts/`) are exempt.
pub fn check_orphan_pages(
    config: &SiteConfig,
    docs: &dyn DocsRepository,
) -> Result<Vec<Violation>> {
    let nav_set: BTreeSet<String> = nav_page_refs(&config.nav)
        .into_iter()
        .map(|(_, path)| normalize_nav_path(&path))
        .collect();

    let mut violations = Vec::new();
    for path in docs.markdown_paths()? {
        if is_exempt_from_nav(&path) {
            continue;
        }
        if !nav_set.contains(&path) {
            violations.push(Violation::new(
                "NAV_ORPHAN_PAGE",
                format!(
                    "markdown page is not referenced in the nav: `{}/{}`",
                    config.docs_dir(),
                    path
                ),
                "add the page to the nav or move it under an underscore-prefixed directory",
                Some(path.as_str()),
            ));
        }
    }
    Ok(violations)
}

/// Nav paths may be written with a leading `./`; filesystem listings
/// never are. Strip `CurDir` components so the two compare equal.
fn normalize_nav_path(path: &str) -> String {
    Path::new(path)
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect::<PathBuf>()
        .display()
        .to_string()
        .replace('\\', "/")
}

fn is_exempt_from_nav(relative_path: &str) -> bool {
    Path::new(relative_path).components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .map(|name| name.starts_with('_'))
            .unwrap_or(false)
    })
}

pub fn check_duplicate_nav_titles(config: &SiteConfig) -> Vec<Violation> {
    let mut counts = BTreeMap::<String, usize>::new();
    collect_titles(&config.nav, &mut counts);

    let mut violations = Vec::new();
    for (title, count) in counts {
        if count > 1 {
            violations.push(Violation::new(
                "NAV_DUPLICATE_TITLE",
                format!("nav title `{}` is used {} times", title, count),
                "rename nav titles to be globally distinct",
                None,
            ));
        }
    }
    violations
}

fn collect_titles(entries: &[NavEntry], counts: &mut BTreeMap<String, usize>) {
    for entry in entries {
        *counts.entry(entry.title().to_string()).or_default() += 1;
        if let NavEntry::Section { pages, .. } = entry {
            collect_titles(pages, counts);
        }
    }
}

pub fn check_duplicate_nav_paths(config: &SiteConfig) -> Vec<Violation> {
    let mut counts = BTreeMap::<String, usize>::new();
    for (_, path) in nav_page_refs(&config.nav) {
        *counts.entry(normalize_nav_path(&path)).or_default() += 1;
    }

    let mut violations = Vec::new();
    for (path, count) in counts {
        if count > 1 {
            violations.push(Violation::new(
                "NAV_DUPLICATE_PATH",
                format!("nav references `{}` {} times", path, count),
                "list each page once in the nav",
                Some(path.as_str()),
            ));
        }
    }
    violations
}

pub fn check_empty_sections(config: &SiteConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    collect_empty_sections(&config.nav, &mut violations);
    violations
}

fn collect_empty_sections(entries: &[NavEntry], violations: &mut Vec<Violation>) {
    for entry in entries {
        if let NavEntry::Section { title, pages } = entry {
            if pages.is_empty() {
                violations.push(Violation::new(
                    "NAV_EMPTY_SECTION",
                    format!("nav section `{}` has no pages", title),
                    "add pages to the section or remove it",
                    None,
                ));
            }
            collect_empty_sections(pages, violations);
        }
    }
}

pub fn check_plugins(config: &SiteConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = BTreeSet::new();

    for plugin in &config.plugins {
        if !registry::is_known_plugin(&plugin.name) {
            violations.push(Violation::new(
                "PLUGIN_UNKNOWN",
                format!("unknown plugin `{}`", plugin.name),
                "use a plugin name the generator recognizes",
                None,
            ));
        }
        if !seen.insert(plugin.name.clone()) {
            violations.push(Violation::new(
                "PLUGIN_DUPLICATE",
                format!("plugin `{}` is listed more than once", plugin.name),
                "list each plugin once",
                None,
            ));
        }
    }
    violations
}

pub fn check_extensions(config: &SiteConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = BTreeSet::new();

    for extension in config.markdown_extensions() {
        if !registry::is_known_extension(&extension.name) {
            violations.push(Violation::new(
                "EXTENSION_UNKNOWN",
                format!("unknown markdown extension `{}`", extension.name),
                "use an extension name the generator recognizes",
                None,
            ));
        }
        if !seen.insert(extension.name.clone()) {
            violations.push(Violation::new(
                "EXTENSION_DUPLICATE",
                format!("markdown extension `{}` is listed more than once", extension.name),
                "list each extension once",
                None,
            ));
        }
        if let Some(options) = &extension.options {
            for problem in registry::validate_extension_options(&extension.name, options) {
                violations.push(Violation::new(
                    "EXTENSION_BAD_OPTION",
                    format!("extension `{}`: {}", extension.name, problem),
                    "fix the option value in [markdown.extensions.options]",
                    None,
                ));
            }
        }
    }
    violations
}

pub fn check_theme(config: &SiteConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !registry::is_known_theme(&config.theme.name) {
        violations.push(Violation::new(
            "THEME_UNKNOWN",
            format!("unknown theme `{}`", config.theme.name),
            "pick one of the supported themes",
            None,
        ));
    }

    let mut seen = BTreeSet::new();
    for feature in &config.theme.features {
        if !registry::is_known_theme_feature(feature) {
            violations.push(Violation::new(
                "THEME_UNKNOWN_FEATURE",
                format!("unknown theme feature `{}`", feature),
                "use a namespaced feature flag such as `navigation.instant`",
                None,
            ));
        }
        if !seen.insert(feature.clone()) {
            violations.push(Violation::new(
                "THEME_DUPLICATE_FEATURE",
                format!("theme feature `{}` is enabled more than once", feature),
                "enable each feature once",
                None,
            ));
        }
    }

    for palette in &config.theme.palette {
        if !registry::is_known_palette_scheme(&palette.scheme) {
            violations.push(Violation::new(
                "PALETTE_UNKNOWN_SCHEME",
                format!("unknown palette scheme `{}`", palette.scheme),
                "use `default` or `slate`",
                None,
            ));
        }
    }

    violations
}

/// Local assets (logo, favicon, non-URL scripts and stylesheets) must
/// exist under the docs directory.
pub fn check_local_assets(config: &SiteConfig, docs: &dyn DocsRepository) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (field, path) in config.local_assets() {
        if !docs.exists(&path) {
            violations.push(Violation::new(
                "ASSET_MISSING",
                format!("`{}` references missing file `{}/{}`", field, config.docs_dir(), path),
                "restore the asset or drop the reference",
                Some(path.as_str()),
            ));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(toml_content: &str) -> SiteConfig {
        SiteConfig::from_toml_str(toml_content).unwrap()
    }

    #[test]
    fn test_duplicate_titles_counted_across_sections() {
        let config = config_from(
            r#"
[site]
name = "test"

[[nav]]
title = "Overview"
path = "index.md"

[[nav]]
title = "Guide"

[[nav.pages]]
title = "Overview"
path = "guide/index.md"

[theme]
name = "material"
"#,
        );

        let violations = check_duplicate_nav_titles(&config);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Overview"));
    }

    #[test]
    fn test_unknown_plugin_and_extension_flagged() {
        let config = config_from(
            r#"
[site]
name = "test"

[theme]
name = "material"

[[plugins]]
name = "search"

[[plugins]]
name = "no-such-plugin"

[[markdown.extensions]]
name = "admonition"

[[markdown.extensions]]
name = "pymdownx.no_such"
"#,
        );

        let plugin_violations = check_plugins(&config);
        assert_eq!(plugin_violations.len(), 1);
        assert_eq!(plugin_violations[0].code, "PLUGIN_UNKNOWN");

        let extension_violations = check_extensions(&config);
        assert_eq!(extension_violations.len(), 1);
        assert_eq!(extension_violations[0].code, "EXTENSION_UNKNOWN");
    }

    #[test]
    fn test_bad_extension_option_flagged() {
        let config = config_from(
            r#"
[site]
name = "test"

[theme]
name = "material"

[[markdown.extensions]]
name = "toc"

[markdown.extensions.options]
permalink = 42
"#,
        );

        let violations = check_extensions(&config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "EXTENSION_BAD_OPTION");
    }

    #[test]
    fn test_theme_feature_checks() {
        let config = config_from(
            r#"
[site]
name = "test"

[theme]
name = "material"
features = [
    "navigation.instant",
    "navigation.instant",
    "sidebar.sticky",
]

[[theme.palette]]
scheme = "midnight"
"#,
        );

        let violations = check_theme(&config);
        let codes: Vec<&str> = violations.iter().map(|v| v.code.as_str()).collect();
        assert!(codes.contains(&"THEME_DUPLICATE_FEATURE"));
        assert!(codes.contains(&"THEME_UNKNOWN_FEATURE"));
        assert!(codes.contains(&"PALETTE_UNKNOWN_SCHEME"));
    }

    #[test]
    fn test_normalize_nav_path_strips_curdir() {
        assert_eq!(normalize_nav_path("./index.md"), "index.md");
        assert_eq!(normalize_nav_path("guide/./usage.md"), "guide/usage.md");
        assert_eq!(normalize_nav_path("guide/usage.md"), "guide/usage.md");
    }

    #[test]
    fn test_curdir_paths_count_as_duplicates() {
        let config = config_from(
            r#"
[site]
name = "test"

[[nav]]
title = "Home"
path = "index.md"

[[nav]]
title = "Start"
path = "./index.md"

[theme]
name = "material"
"#,
        );

        let violations = check_duplicate_nav_paths(&config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "NAV_DUPLICATE_PATH");
    }

    #[test]
    fn test_nav_exemption_for_underscore_directories() {
        assert!(is_exempt_from_nav("_assets/logo.md"));
        assert!(is_exempt_from_nav("guide/_drafts/wip.md"));
        assert!(!is_exempt_from_nav("guide/index.md"));
    }

    #[test]
    fn test_empty_section_flagged() {
        let config = config_from(
            r#"
[site]
name = "test"

[[nav]]
title = "Empty"
pages = []

[theme]
name = "material"
"#,
        );

        let violations = check_empty_sections(&config);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "NAV_EMPTY_SECTION");
    }
}
