pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::fs_docs::FsDocs;
pub use crate::adapters::http_probe::HttpProber;
pub use crate::config::site_config::SiteConfig;
pub use crate::core::checker::Checker;
pub use crate::core::probe::ProbeEngine;
pub use crate::domain::model::{CheckReport, NavEntry, ProbeReport, Violation};
pub use crate::utils::error::{Result, SiteError};
