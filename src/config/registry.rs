//! Known-name registries for themes, plugins, and markdown extensions.
//! Validation rejects names absent from these lists rather than passing
//! them through to a generator that would fail later.

use serde_json::Value;
use std::collections::BTreeMap;

pub const KNOWN_THEMES: &[&str] = &["material", "readthedocs", "mkdocs"];

pub const KNOWN_PALETTE_SCHEMES: &[&str] = &["default", "slate"];

/// Theme feature flags are namespaced, e.g. `navigation.instant` or
/// `content.code.copy`; the first segment must be one of these.
pub const THEME_FEATURE_NAMESPACES: &[&str] =
    &["navigation", "content", "search", "toc", "header", "announce"];

pub const KNOWN_PLUGINS: &[&str] = &[
    "search",
    "autorefs",
    "extra-sass",
    "literate-nav",
    "mkdocstrings",
    "social",
    "tags",
    "redirects",
    "minify",
    "offline",
    "macros",
    "awesome-pages",
];

pub const KNOWN_EXTENSIONS: &[&str] = &[
    "abbr",
    "admonition",
    "attr_list",
    "def_list",
    "footnotes",
    "md_in_html",
    "meta",
    "tables",
    "toc",
    "pymdownx.arithmatex",
    "pymdownx.caret",
    "pymdownx.details",
    "pymdownx.emoji",
    "pymdownx.highlight",
    "pymdownx.inlinehilite",
    "pymdownx.keys",
    "pymdownx.mark",
    "pymdownx.smartsymbols",
    "pymdownx.snippets",
    "pymdownx.superfences",
    "pymdownx.tabbed",
    "pymdownx.tasklist",
    "pymdownx.tilde",
];

pub fn is_known_theme(name: &str) -> bool {
    KNOWN_THEMES.contains(&name)
}

pub fn is_known_palette_scheme(scheme: &str) -> bool {
    KNOWN_PALETTE_SCHEMES.contains(&scheme)
}

pub fn is_known_theme_feature(feature: &str) -> bool {
    let namespace = feature.split('.').next().unwrap_or_default();
    feature.contains('.') && THEME_FEATURE_NAMESPACES.contains(&namespace)
}

pub fn is_known_plugin(name: &str) -> bool {
    KNOWN_PLUGINS.contains(&name)
}

pub fn is_known_extension(name: &str) -> bool {
    KNOWN_EXTENSIONS.contains(&name)
}

/// Type-checks the options of extensions with a known option shape.
/// Returns one reason string per problem; an empty vec means the options
/// are acceptable. Extensions without typed rules accept any table.
pub fn validate_extension_options(name: &str, options: &BTreeMap<String, Value>) -> Vec<String> {
    let mut problems = Vec::new();

    match name {
        "toc" => {
            if let Some(permalink) = options.get("permalink") {
                if !permalink.is_boolean() && !permalink.is_string() {
                    problems.push("`permalink` must be a boolean or a string".to_string());
                }
            }
            if let Some(depth) = options.get("toc_depth") {
                if !depth.is_u64() && !depth.is_string() {
                    problems.push("`toc_depth` must be a number or a range string".to_string());
                }
            }
        }
        "pymdownx.highlight" => {
            for key in ["anchor_linenums", "linenums", "use_pygments"] {
                if let Some(value) = options.get(key) {
                    if !value.is_boolean() {
                        problems.push(format!("`{}` must be a boolean", key));
                    }
                }
            }
        }
        "pymdownx.tabbed" => {
            if let Some(alternate) = options.get("alternate_style") {
                if !alternate.is_boolean() {
                    problems.push("`alternate_style` must be a boolean".to_string());
                }
            }
        }
        "pymdownx.superfences" => {
            if let Some(fences) = options.get("custom_fences") {
                match fences.as_array() {
                    Some(entries) => {
                        for entry in entries {
                            let table = entry.as_object();
                            let complete = table
                                .map(|t| t.contains_key("name") && t.contains_key("class"))
                                .unwrap_or(false);
                            if !complete {
                                problems.push(
                                    "each `custom_fences` entry needs `name` and `class`"
                                        .to_string(),
                                );
                            }
                        }
                    }
                    None => problems.push("`custom_fences` must be an array".to_string()),
                }
            }
        }
        _ => {}
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> BTreeMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_known_names() {
        assert!(is_known_theme("material"));
        assert!(!is_known_theme("bootswatch"));
        assert!(is_known_plugin("search"));
        assert!(!is_known_plugin("totally-made-up"));
        assert!(is_known_extension("pymdownx.superfences"));
        assert!(!is_known_extension("pymdownx.unknown"));
    }

    #[test]
    fn test_theme_feature_namespacing() {
        assert!(is_known_theme_feature("navigation.instant"));
        assert!(is_known_theme_feature("content.code.copy"));
        assert!(!is_known_theme_feature("navigation"));
        assert!(!is_known_theme_feature("sidebar.sticky"));
    }

    #[test]
    fn test_toc_option_types() {
        let ok = options(json!({"permalink": true, "toc_depth": 3}));
        assert!(validate_extension_options("toc", &ok).is_empty());

        let bad = options(json!({"permalink": 7}));
        assert_eq!(validate_extension_options("toc", &bad).len(), 1);
    }

    #[test]
    fn test_superfences_custom_fences_shape() {
        let ok = options(json!({
            "custom_fences": [{"name": "mermaid", "class": "mermaid"}]
        }));
        assert!(validate_extension_options("pymdownx.superfences", &ok).is_empty());

        let missing_class = options(json!({"custom_fences": [{"name": "mermaid"}]}));
        assert_eq!(
            validate_extension_options("pymdownx.superfences", &missing_class).len(),
            1
        );

        let not_array = options(json!({"custom_fences": "mermaid"}));
        assert_eq!(
            validate_extension_options("pymdownx.superfences", &not_array).len(),
            1
        );
    }

    #[test]
    fn test_untracked_extension_accepts_any_options() {
        let opts = options(json!({"anything": {"nested": [1, 2, 3]}}));
        assert!(validate_extension_options("admonition", &opts).is_empty());
    }
}
