use anyhow::Result;
use sitecheck::core::roundtrip::{normalize_content, to_normalized_toml, verify_roundtrip};
use sitecheck::SiteError;
use sitecheck::domain::model::nav_page_refs;
use sitecheck::SiteConfig;
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
[site]
name = "BBOT Docs"
url = "https://docs.example.com/"
author = "Black Lantern Security"
description = "OSINT automation for hackers"

[[nav]]
title = "Home"
path = "index.md"

[[nav]]
title = "Scanning"

[[nav.pages]]
title = "Overview"
path = "scanning/index.md"

[[nav.pages]]
title = "Advanced"

[[nav.pages.pages]]
title = "Output"
path = "scanning/output.md"

[theme]
name = "material"
logo = "assets/logo.png"
features = ["navigation.instant", "content.code.copy"]

[[theme.palette]]
scheme = "slate"
primary = "black"

[[theme.palette]]
scheme = "default"
primary = "indigo"

[[plugins]]
name = "search"

[[plugins]]
name = "mkdocstrings"

[plugins.options.handlers.python]
show_source = true

[[markdown.extensions]]
name = "admonition"

[[markdown.extensions]]
name = "toc"

[markdown.extensions.options]
permalink = true

[[markdown.extensions]]
name = "pymdownx.superfences"

[[markdown.extensions.options.custom_fences]]
name = "mermaid"
class = "mermaid"

[extra]
javascript = [
    "https://cdn.example.com/mathjax.js",
    "javascripts/tablesort.js",
]
css = ["stylesheets/extra.css"]
"#;

#[test]
fn test_full_config_roundtrip_is_identical() -> Result<()> {
    let config = SiteConfig::from_toml_str(CONFIG)?;

    let normalized = verify_roundtrip(&config)?;
    let reloaded = SiteConfig::from_toml_str(&normalized)?;

    assert_eq!(reloaded, config);
    assert_eq!(nav_page_refs(&reloaded.nav), nav_page_refs(&config.nav));
    assert_eq!(reloaded.theme.features, config.theme.features);
    assert_eq!(reloaded.external_urls(), config.external_urls());
    Ok(())
}

#[test]
fn test_roundtrip_through_file() -> Result<()> {
    let config = SiteConfig::from_toml_str(CONFIG)?;
    let normalized = to_normalized_toml(&config)?;

    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(normalized.as_bytes())?;

    let reloaded = SiteConfig::from_file(temp_file.path())?;
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_normalize_refuses_env_references() {
    std::env::set_var("ROUNDTRIP_TEST_SITE_URL", "https://secret.internal.example.com");

    let raw = r#"
[site]
name = "test"
url = "${ROUNDTRIP_TEST_SITE_URL}"

[theme]
name = "material"
"#;

    // Normalizing would write the resolved value and lose the
    // placeholder, so the raw text must be refused outright.
    let result = normalize_content(raw);
    match result {
        Err(SiteError::RoundTripError { message }) => {
            assert!(message.contains("${VAR}"));
        }
        other => panic!("expected a round-trip refusal, got {:?}", other),
    }

    std::env::remove_var("ROUNDTRIP_TEST_SITE_URL");
}

#[test]
fn test_normalize_plain_content_keeps_values_verbatim() -> Result<()> {
    let normalized = normalize_content(CONFIG)?;
    assert!(normalized.contains("https://docs.example.com/"));
    assert!(!normalized.contains("${"));
    Ok(())
}

#[test]
fn test_nested_section_order_preserved() -> Result<()> {
    let config = SiteConfig::from_toml_str(CONFIG)?;
    let normalized = verify_roundtrip(&config)?;
    let reloaded = SiteConfig::from_toml_str(&normalized)?;

    let paths: Vec<String> = nav_page_refs(&reloaded.nav)
        .into_iter()
        .map(|(_, path)| path)
        .collect();
    assert_eq!(paths, vec!["index.md", "scanning/index.md", "scanning/output.md"]);
    Ok(())
}
