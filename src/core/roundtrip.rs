use crate::config::site_config::SiteConfig;
use crate::utils::error::{Result, SiteError};

/// Serializes a loaded configuration back to TOML in canonical field
/// order.
pub fn to_normalized_toml(config: &SiteConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Normalizes raw configuration text. Content with `${VAR}` references
/// is refused: the loaded configuration carries the resolved values, so
/// writing it back would replace the placeholders with environment data
/// (credentials included) for good.
pub fn normalize_content(content: &str) -> Result<String> {
    if SiteConfig::has_env_references(content) {
        return Err(SiteError::RoundTripError {
            message: "configuration contains ${VAR} references; \
                      normalizing would replace them with resolved environment values"
                .to_string(),
        });
    }

    let config = SiteConfig::from_toml_str(content)?;
    verify_roundtrip(&config)
}

/// Re-serializes the configuration, reloads it, and requires the result
/// to compare equal to the original. Returns the normalized TOML on
/// success.
pub fn verify_roundtrip(config: &SiteConfig) -> Result<String> {
    let serialized = to_normalized_toml(config)?;
    let reparsed = SiteConfig::from_toml_str(&serialized)?;

    if &reparsed != config {
        return Err(SiteError::RoundTripError {
            message: "reloaded configuration differs from the original".to_string(),
        });
    }

    Ok(serialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::nav_page_refs;

    #[test]
    fn test_roundtrip_preserves_nav_order() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
name = "test"

[[nav]]
title = "Home"
path = "index.md"

[[nav]]
title = "Guide"

[[nav.pages]]
title = "Install"
path = "guide/install.md"

[[nav.pages]]
title = "Usage"
path = "guide/usage.md"

[theme]
name = "material"
features = ["navigation.instant"]

[[markdown.extensions]]
name = "toc"

[markdown.extensions.options]
permalink = true
"#,
        )
        .unwrap();

        let serialized = verify_roundtrip(&config).unwrap();
        let reparsed = SiteConfig::from_toml_str(&serialized).unwrap();

        assert_eq!(nav_page_refs(&reparsed.nav), nav_page_refs(&config.nav));
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_normalized_output_is_stable() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
name = "test"

[theme]
name = "material"
"#,
        )
        .unwrap();

        let first = to_normalized_toml(&config).unwrap();
        let second = to_normalized_toml(&SiteConfig::from_toml_str(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
