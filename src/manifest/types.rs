use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed list of files the relocator is responsible for, grouped by
/// category. The manifest is plain data: it is built once (compiled in or
/// injected) and never mutated during a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileManifest {
    /// Markdown documentation files expected at the project root
    #[serde(default)]
    pub documents: Vec<String>,
    /// SQL data-definition scripts expected at the project root
    #[serde(default)]
    pub scripts: Vec<String>,
}

/// Manifest category a file belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Documents,
    Scripts,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Documents => write!(f, "documents"),
            Category::Scripts => write!(f, "scripts"),
        }
    }
}

impl FileManifest {
    /// Iterate all entries in declared order: documents first, then scripts.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str)> {
        self.documents
            .iter()
            .map(|name| (Category::Documents, name.as_str()))
            .chain(
                self.scripts
                    .iter()
                    .map(|name| (Category::Scripts, name.as_str())),
            )
    }

    /// Total number of entries across all categories
    pub fn len(&self) -> usize {
        self.documents.len() + self.scripts.len()
    }

    /// True when no category lists any file
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
