use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry in the navigation tree: either a leaf page or a titled
/// section with nested entries. Order is significant and preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NavEntry {
    Page { title: String, path: String },
    Section { title: String, pages: Vec<NavEntry> },
}

impl NavEntry {
    pub fn title(&self) -> &str {
        match self {
            NavEntry::Page { title, .. } => title,
            NavEntry::Section { title, .. } => title,
        }
    }
}

/// Flattens a nav tree into (title, path) pairs in document order.
pub fn nav_page_refs(nav: &[NavEntry]) -> Vec<(String, String)> {
    let mut refs = Vec::new();
    collect_page_refs(nav, &mut refs);
    refs
}

fn collect_page_refs(entries: &[NavEntry], refs: &mut Vec<(String, String)>) {
    for entry in entries {
        match entry {
            NavEntry::Page { title, path } => refs.push((title.clone(), path.clone())),
            NavEntry::Section { pages, .. } => collect_page_refs(pages, refs),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    pub code: String,
    pub message: String,
    pub hint: String,
    pub path: Option<String>,
}

impl Violation {
    pub fn new(
        code: &str,
        message: impl Into<String>,
        hint: &str,
        path: Option<&str>,
    ) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            hint: hint.to_string(),
            path: path.map(|p| p.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub generated_at: DateTime<Utc>,
    pub config_path: String,
    pub violations: Vec<Violation>,
    pub counts: BTreeMap<String, usize>,
}

impl CheckReport {
    pub fn new(config_path: &str, violations: Vec<Violation>) -> Self {
        let mut counts = BTreeMap::new();
        for violation in &violations {
            *counts.entry(violation.code.clone()).or_default() += 1;
        }
        Self {
            generated_at: Utc::now(),
            config_path: config_path.to_string(),
            violations,
            counts,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProbeOutcome {
    Reachable { status: u16 },
    Unreachable { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Reachable { status } if status < 400)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    pub fn new(results: Vec<ProbeResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.results.iter().all(ProbeResult::is_ok)
    }
}
