use crate::domain::ports::DocsRepository;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem-backed view of the docs directory.
#[derive(Debug, Clone)]
pub struct FsDocs {
    root: PathBuf,
}

impl FsDocs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocsRepository for FsDocs {
    fn dir_exists(&self) -> bool {
        self.root.is_dir()
    }

    fn exists(&self, relative_path: &str) -> bool {
        self.root.join(relative_path).is_file()
    }

    fn markdown_paths(&self) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        collect_markdown(&self.root, &self.root, &mut paths)?;
        paths.sort();
        Ok(paths)
    }
}

fn collect_markdown(root: &Path, dir: &Path, paths: &mut Vec<String>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_markdown(root, &path, paths)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
            if let Ok(relative) = path.strip_prefix(root) {
                // Normalize separators so nav paths compare on Windows too.
                paths.push(relative.display().to_string().replace('\\', "/"));
            }
        }
    }
    Ok(())
}
