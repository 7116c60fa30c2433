//! Group Tree Model
//!
//! The group hierarchy exactly as the backend returns it. The client never
//! edits structure; a refresh replaces the whole forest.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiResult;
use crate::query::{count_contacts, count_nodes};

/// Opaque group identifier, unique across the whole forest
///
/// The backend emits integer ids; older exports used strings. Both decode
/// to the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGroupId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawGroupId::deserialize(deserializer)? {
            RawGroupId::Text(s) => GroupId(s),
            RawGroupId::Signed(n) => GroupId(n.to_string()),
            RawGroupId::Unsigned(n) => GroupId(n.to_string()),
        })
    }
}

/// One entry of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub id: GroupId,
    /// Unique among siblings only
    pub name: String,
    /// Human readable ancestry, informational only
    #[serde(default)]
    pub path: String,
    /// Contacts attached directly to this group (descendants excluded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<u64>,
    #[serde(default)]
    pub children: Vec<GroupNode>,
}

impl GroupNode {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: name.clone(),
            name,
            contact_count: None,
            children: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_contacts(mut self, count: u64) -> Self {
        self.contact_count = Some(count);
        self
    }

    pub fn with_children(mut self, children: Vec<GroupNode>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Absent counts are zero
    pub fn contacts(&self) -> u64 {
        self.contact_count.unwrap_or(0)
    }
}

// Children are drained onto a heap stack so dropping a deep chain never
// recurses once per level.
impl Drop for GroupNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Decode a hierarchy response of any depth
///
/// serde_json stops at 128 nested values by default, which is about 64
/// tree levels. The limit is lifted and the recursive decode runs on a
/// stack that grows on demand.
pub fn decode_forest(json: &str) -> ApiResult<Vec<GroupNode>> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let forest = Vec::<GroupNode>::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(forest)
}

/// Aggregates derived from one forest snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    /// Every node at every depth
    pub nodes: usize,
    /// Sum of direct contact counts at every depth
    pub contacts: u64,
    pub roots: usize,
}

impl TreeSummary {
    pub fn of(forest: &[GroupNode]) -> Self {
        Self {
            nodes: count_nodes(forest),
            contacts: count_contacts(forest),
            roots: forest.len(),
        }
    }
}

/// Holder of the current forest
///
/// `load` swaps the snapshot and its summary together, so a reader holding
/// a snapshot never sees parts of two different loads.
#[derive(Debug, Clone)]
pub struct GroupTree {
    roots: Arc<[GroupNode]>,
    summary: TreeSummary,
    version: u64,
}

impl Default for GroupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupTree {
    pub fn new() -> Self {
        Self {
            roots: Arc::from(Vec::new()),
            summary: TreeSummary::default(),
            version: 0,
        }
    }

    /// Replace the whole forest, returns the new version
    pub fn load(&mut self, forest: Vec<GroupNode>) -> u64 {
        let summary = TreeSummary::of(&forest);
        let roots: Arc<[GroupNode]> = Arc::from(forest);
        self.roots = roots;
        self.summary = summary;
        self.version += 1;
        log::debug!(
            "[TREE] loaded v{}: {} roots, {} groups, {} contacts",
            self.version,
            summary.roots,
            summary.nodes,
            summary.contacts
        );
        self.version
    }

    /// Cheap shared handle to the current forest
    pub fn snapshot(&self) -> Arc<[GroupNode]> {
        Arc::clone(&self.roots)
    }

    pub fn roots(&self) -> &[GroupNode] {
        &self.roots
    }

    pub fn summary(&self) -> TreeSummary {
        self.summary
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl PartialEq for GroupTree {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && Arc::ptr_eq(&self.roots, &other.roots)
    }
}
