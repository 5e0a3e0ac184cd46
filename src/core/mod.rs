pub mod checker;
pub mod checks;
pub mod probe;
pub mod roundtrip;

pub use crate::domain::model::{CheckReport, NavEntry, ProbeReport, Violation};
pub use crate::domain::ports::{DocsRepository, UrlProber};
pub use crate::utils::error::Result;
