//! Local content store used as the console's content API.
//!
//! Drafts are validated against the known content types, accepted drafts get
//! sequential node ids, and the store can persist its nodes to a YAML file so
//! ids keep increasing across runs.

use std::fs::File;
use std::path::Path;

use indexmap::IndexSet;
use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::generator::{ContentApi, FailedNode, GenerationResult, NodeDraft, NodeRecord};

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    content_types: IndexSet<String>,
    nodes: Vec<NodeRecord>,
    path: Option<String>,
}

impl ContentStore {
    /// In-memory store accepting the given content types.
    pub fn in_memory<I, S>(content_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content_types: content_types.into_iter().map(Into::into).collect(),
            nodes: Vec::new(),
            path: None,
        }
    }

    /// Store backed by the YAML file at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open<I, S>(content_types: I, path: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::in_memory(content_types);
        store.nodes = read_nodes(path)?;
        store.path = Some(path.to_string());

        debug!("Opened content store `{path}` with {} nodes", store.nodes.len());

        Ok(store)
    }

    #[must_use]
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    fn next_id(&self) -> u64 {
        self.nodes.iter().map(|node| node.id).max().unwrap_or(0) + 1
    }

    fn rejection_reason(&self, draft: &NodeDraft) -> Option<String> {
        if !self.content_types.contains(&draft.content_type) {
            return Some(format!("unknown content type `{}`", draft.content_type));
        }

        if draft.title.trim().is_empty() {
            return Some("title may not be empty".to_string());
        }

        None
    }
}

impl ContentApi for ContentStore {
    fn create_nodes(&mut self, drafts: Vec<NodeDraft>) -> Result<GenerationResult> {
        let mut result = GenerationResult::default();
        let mut nodes = self.nodes.clone();
        let mut next_id = self.next_id();

        for draft in drafts {
            if let Some(reason) = self.rejection_reason(&draft) {
                warn!("Rejected node `{}`: {reason}", draft.title);
                result.failure.push(FailedNode { draft, reason });
                continue;
            }

            let node = NodeRecord {
                id: next_id,
                content_type: draft.content_type,
                title: draft.title,
                created: draft.created,
            };
            next_id += 1;

            nodes.push(node.clone());
            result.success.push(node);
        }

        // Nodes only count as created once they are on disk.
        if let Some(path) = &self.path {
            write_nodes(path, &nodes)?;
        }
        self.nodes = nodes;

        Ok(result)
    }
}

fn read_nodes(path: &str) -> Result<Vec<NodeRecord>> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }

    let reader = File::open(path)
        .map_err(|e| Error::io_error("content store".to_string(), path.to_string(), e))?;

    let nodes: Option<Vec<NodeRecord>> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "content store".to_string(),
            path.to_string(),
            e,
        )
    })?;

    Ok(nodes.unwrap_or_default())
}

/// Writes to a temporary file next to `path` and renames it into place, so a
/// failed write leaves the previous store file untouched.
fn write_nodes(path: &str, nodes: &[NodeRecord]) -> Result<()> {
    let io_error =
        |e: std::io::Error| Error::io_error("content store".to_string(), path.to_string(), e);

    let directory = Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp_file = NamedTempFile::new_in(directory).map_err(io_error)?;

    serde_yaml::to_writer(&mut temp_file, nodes).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "content store".to_string(),
            path.to_string(),
            e,
        )
    })?;

    temp_file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}
