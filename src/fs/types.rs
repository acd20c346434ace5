//! File System Types
//!
//! Core types for the virtual file system.

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },
}

impl FsError {
    pub fn not_found(path: &str, operation: &str) -> Self {
        FsError::NotFound {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }
}

/// A node in the virtual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    /// Opaque reference resolved by the content store.
    File { content: String },
    Directory { entries: IndexMap<String, VNode> },
}

impl VNode {
    pub fn file(content: &str) -> Self {
        VNode::File { content: content.to_string() }
    }

    pub fn directory<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, VNode)>,
        S: Into<String>,
    {
        VNode::Directory {
            entries: entries.into_iter().map(|(name, node)| (name.into(), node)).collect(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            VNode::File { .. } => NodeKind::File,
            VNode::Directory { .. } => NodeKind::Dir,
        }
    }
}

/// Kind reported for each listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Dir,
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub name: String,
    pub kind: NodeKind,
}

impl DirentEntry {
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Dir
    }
}
