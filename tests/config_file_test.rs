use anyhow::Result;
use sitecheck::utils::validation::Validate;
use sitecheck::{SiteConfig, SiteError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_with_env_substitution() -> Result<()> {
    std::env::set_var("SITECHECK_TEST_AUTHOR", "Black Lantern Security");

    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[site]
name = "BBOT Docs"
author = "${SITECHECK_TEST_AUTHOR}"

[theme]
name = "material"
"#,
    )?;

    let config = SiteConfig::from_file(temp_file.path())?;
    assert_eq!(config.site.author.as_deref(), Some("Black Lantern Security"));
    assert!(config.validate().is_ok());

    std::env::remove_var("SITECHECK_TEST_AUTHOR");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let result = SiteConfig::from_file("definitely/not/here/site.toml");
    assert!(matches!(result, Err(SiteError::IoError(_))));
}

#[test]
fn test_malformed_toml_reports_parse_field() {
    let result = SiteConfig::from_toml_str("[site\nname = ");
    match result {
        Err(SiteError::ConfigValidationError { field, .. }) => {
            assert_eq!(field, "toml_parsing");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_traversal_nav_path_rejected() {
    let config = SiteConfig::from_toml_str(
        r#"
[site]
name = "test"

[[nav]]
title = "Escape"
path = "../../etc/passwd.md"

[theme]
name = "material"
"#,
    )
    .unwrap();

    match config.validate() {
        Err(SiteError::InvalidConfigValueError { field, .. }) => {
            assert_eq!(field, "nav.path");
        }
        other => panic!("expected an invalid value error, got {:?}", other),
    }
}
