//! Tree Query Engine
//!
//! Pure functions over a forest snapshot. Every walk uses an explicit stack,
//! so arbitrarily deep hierarchies never hit the call-stack limit.

use std::collections::HashSet;

use crate::tree::{GroupId, GroupNode};

/// Joins ancestor names in flattened labels
pub const LABEL_SEPARATOR: &str = " > ";

/// One entry of a group selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatGroup {
    pub id: GroupId,
    pub name: String,
    /// Ancestor names from the root down to this node
    pub label: String,
    pub contact_count: u64,
}

/// One rendered row of the interactive tree view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: GroupId,
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    /// The node itself matches the search (not just a child)
    pub self_match: bool,
    pub contact_count: Option<u64>,
}

/// Total number of nodes at every depth
pub fn count_nodes(forest: &[GroupNode]) -> usize {
    let mut total = 0;
    let mut stack = vec![forest];
    while let Some(level) = stack.pop() {
        total += level.len();
        for node in level {
            if node.has_children() {
                stack.push(&node.children);
            }
        }
    }
    total
}

/// Sum of direct contact counts over every node, absent counted as zero.
/// Saturates at `u64::MAX`.
pub fn count_contacts(forest: &[GroupNode]) -> u64 {
    let mut total: u64 = 0;
    let mut stack = vec![forest];
    while let Some(level) = stack.pop() {
        for node in level {
            total = total.saturating_add(node.contacts());
            if node.has_children() {
                stack.push(&node.children);
            }
        }
    }
    total
}

/// Depth-first pre-order listing with labels rebuilt from the traversal path
pub fn flatten(forest: &[GroupNode]) -> Vec<FlatGroup> {
    let mut result = Vec::new();
    let mut stack: Vec<(&GroupNode, Option<String>)> =
        forest.iter().rev().map(|node| (node, None)).collect();

    while let Some((node, parent_label)) = stack.pop() {
        let label = match parent_label {
            Some(prefix) => format!("{}{}{}", prefix, LABEL_SEPARATOR, node.name),
            None => node.name.clone(),
        };
        for child in node.children.iter().rev() {
            stack.push((child, Some(label.clone())));
        }
        result.push(FlatGroup {
            id: node.id.clone(),
            name: node.name.clone(),
            label,
            contact_count: node.contacts(),
        });
    }
    result
}

/// Look up a selected group in a flattened list
pub fn find_flat<'a>(groups: &'a [FlatGroup], id: &GroupId) -> Option<&'a FlatGroup> {
    groups.iter().find(|group| &group.id == id)
}

/// Empty term matches everything; otherwise case-insensitive substring of
/// the name or the path
pub fn matches(node: &GroupNode, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    matches_lowered(node, &term.to_lowercase())
}

/// The node matches, or one of its direct children does.
///
/// Only one level is looked at: a match on a grandchild does not keep the
/// node visible.
pub fn is_visible(node: &GroupNode, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    visible_lowered(node, &needle)
}

fn matches_lowered(node: &GroupNode, needle: &str) -> bool {
    needle.is_empty()
        || node.name.to_lowercase().contains(needle)
        || node.path.to_lowercase().contains(needle)
}

fn visible_lowered(node: &GroupNode, needle: &str) -> bool {
    matches_lowered(node, needle)
        || node.children.iter().any(|child| matches_lowered(child, needle))
}

/// Rows to render for the tree view
///
/// A row appears for each visible node. Children of an expanded node are
/// walked whether or not the node itself is visible, and are tested on
/// their own.
pub fn visible_rows(forest: &[GroupNode], expansion: &ExpansionState, term: &str) -> Vec<TreeRow> {
    let needle = term.to_lowercase();
    let mut rows = Vec::new();
    let mut stack: Vec<(&GroupNode, usize)> = forest.iter().rev().map(|node| (node, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let expanded = expansion.is_expanded(&node.id);

        if visible_lowered(node, &needle) {
            rows.push(TreeRow {
                id: node.id.clone(),
                name: node.name.clone(),
                depth,
                has_children: node.has_children(),
                expanded,
                self_match: !needle.is_empty() && matches_lowered(node, &needle),
                contact_count: node.contact_count,
            });
        }

        if expanded {
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }
    rows
}

/// Per-node expanded flag, collapsed unless toggled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<GroupId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &GroupId) -> bool {
        self.expanded.contains(id)
    }

    /// Flip one node, returns the new state
    pub fn toggle(&mut self, id: &GroupId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Forget ids that are not in the forest any more
    pub fn retain_known(&mut self, forest: &[GroupNode]) {
        let mut known = HashSet::new();
        let mut stack = vec![forest];
        while let Some(level) = stack.pop() {
            for node in level {
                known.insert(&node.id);
                stack.push(&node.children);
            }
        }
        self.expanded.retain(|id| known.contains(id));
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeSummary;

    fn node(id: u64, name: &str) -> GroupNode {
        GroupNode::new(id, name)
    }

    /// Region > {Branch A > {Team 1, Team 2}, Branch B}, Other
    fn sample_forest() -> Vec<GroupNode> {
        vec![
            node(1, "Region")
                .with_contacts(1)
                .with_children(vec![
                    node(2, "Branch A")
                        .with_path("Region > Branch A")
                        .with_contacts(2)
                        .with_children(vec![
                            node(3, "Team 1").with_path("Region > Branch A > Team 1").with_contacts(4),
                            node(4, "Team 2").with_path("Region > Branch A > Team 2"),
                        ]),
                    node(5, "Branch B").with_path("Region > Branch B").with_contacts(8),
                ]),
            node(6, "Other").with_contacts(16),
        ]
    }

    #[test]
    fn test_counts_on_empty_forest() {
        assert_eq!(count_nodes(&[]), 0);
        assert_eq!(count_contacts(&[]), 0);
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_count_single_node() {
        assert_eq!(count_nodes(&[node(1, "Solo")]), 1);
        assert_eq!(count_contacts(&[node(1, "Solo")]), 0);
    }

    #[test]
    fn test_count_nodes_is_compositional() {
        let forest = sample_forest();
        assert_eq!(count_nodes(&forest), 6);

        let expected: usize = forest.iter().map(|root| 1 + count_nodes(&root.children)).sum();
        assert_eq!(count_nodes(&forest), expected);
        assert_eq!(
            count_nodes(&forest),
            count_nodes(&forest[0].children) + count_nodes(&forest[1..]) + 1
        );
    }

    #[test]
    fn test_count_contacts_every_depth() {
        // 1 + 2 + 4 + 0 + 8 + 16
        assert_eq!(count_contacts(&sample_forest()), 31);
    }

    #[test]
    fn test_count_contacts_saturates() {
        let forest = vec![
            node(1, "A").with_contacts(u64::MAX),
            node(2, "B").with_contacts(1).with_children(vec![node(3, "C").with_contacts(7)]),
        ];
        assert_eq!(count_contacts(&forest), u64::MAX);
        assert_eq!(TreeSummary::of(&forest).contacts, u64::MAX);
    }

    #[test]
    fn test_flatten_preorder_and_labels() {
        let forest = vec![
            node(1, "A").with_children(vec![node(2, "B")]),
            node(3, "C"),
        ];
        let flat = flatten(&forest);
        let ids: Vec<&str> = flat.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(flat[1].label, "A > B");
        assert_eq!(flat[2].label, "C");
        assert_eq!(flat[1].contact_count, 0);
    }

    #[test]
    fn test_flatten_ignores_stored_path() {
        let forest = vec![node(1, "Root").with_children(vec![
            node(2, "Leaf").with_path("something/else/entirely"),
        ])];
        assert_eq!(flatten(&forest)[1].label, "Root > Leaf");
    }

    #[test]
    fn test_flatten_covers_every_node_once() {
        let forest = sample_forest();
        let flat = flatten(&forest);
        assert_eq!(flat.len(), count_nodes(&forest));

        let unique: HashSet<&GroupId> = flat.iter().map(|g| &g.id).collect();
        assert_eq!(unique.len(), flat.len());

        let labels: Vec<&str> = flat.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Region",
                "Region > Branch A",
                "Region > Branch A > Team 1",
                "Region > Branch A > Team 2",
                "Region > Branch B",
                "Other",
            ]
        );
    }

    #[test]
    fn test_find_flat() {
        let flat = flatten(&sample_forest());
        let found = find_flat(&flat, &GroupId::from(5u64)).unwrap();
        assert_eq!(found.label, "Region > Branch B");
        assert_eq!(found.contact_count, 8);
        assert!(find_flat(&flat, &GroupId::from(99u64)).is_none());
    }

    #[test]
    fn test_deep_chain() {
        let mut deep = node(0, "n0");
        for i in 1..1_000u64 {
            deep = node(i, &format!("n{}", i)).with_contacts(1).with_children(vec![deep]);
        }
        let forest = vec![deep];
        assert_eq!(count_nodes(&forest), 1_000);
        assert_eq!(count_contacts(&forest), 999);

        let flat = flatten(&forest);
        assert_eq!(flat.len(), 1_000);
        assert_eq!(flat[0].label, "n999");
        assert!(flat[999].label.starts_with("n999 > n998 > "));
        assert!(flat[999].label.ends_with(" > n1 > n0"));
    }

    #[test]
    fn test_matches_empty_term() {
        assert!(matches(&node(1, "Anything"), ""));
    }

    #[test]
    fn test_matches_case_insensitive() {
        let alpha = node(1, "Alpha").with_path("Root>Alpha");
        assert!(matches(&alpha, "alp"));
        assert!(matches(&alpha, "ROOT"));
        assert!(!matches(&alpha, "beta"));
    }

    #[test]
    fn test_visibility_is_one_level_deep() {
        let x = node(1, "X").with_path("X").with_children(vec![
            node(2, "Y").with_path("Y").with_children(vec![node(3, "Z-match").with_path("Z-match")]),
        ]);
        let y = &x.children[0];
        let z = &y.children[0];

        assert!(!is_visible(&x, "Z-match"));
        assert!(is_visible(y, "Z-match"));
        assert!(is_visible(z, "Z-match"));
    }

    #[test]
    fn test_visible_rows_collapsed_by_default() {
        let rows = visible_rows(&sample_forest(), &ExpansionState::new(), "");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Region", "Other"]);
        assert!(rows[0].has_children);
        assert!(!rows[0].expanded);
        assert!(!rows[0].self_match);
        assert_eq!(rows[1].contact_count, Some(16));
    }

    #[test]
    fn test_visible_rows_expanded() {
        let forest = sample_forest();
        let mut expansion = ExpansionState::new();
        assert!(expansion.toggle(&GroupId::from(1u64)));
        expansion.toggle(&GroupId::from(2u64));

        let rows = visible_rows(&forest, &expansion, "");
        let summary: Vec<(&str, usize)> = rows.iter().map(|r| (r.name.as_str(), r.depth)).collect();
        assert_eq!(
            summary,
            vec![
                ("Region", 0),
                ("Branch A", 1),
                ("Team 1", 2),
                ("Team 2", 2),
                ("Branch B", 1),
                ("Other", 0),
            ]
        );
        assert!(!expansion.toggle(&GroupId::from(2u64)));
    }

    #[test]
    fn test_visible_rows_search_keeps_hidden_parent_children() {
        let forest = vec![node(1, "X").with_children(vec![
            node(2, "Y").with_children(vec![node(3, "Z-match")]),
        ])];
        let mut expansion = ExpansionState::new();
        expansion.toggle(&GroupId::from(1u64));
        expansion.toggle(&GroupId::from(2u64));

        let rows = visible_rows(&forest, &expansion, "z-match");
        let summary: Vec<(&str, usize, bool)> =
            rows.iter().map(|r| (r.name.as_str(), r.depth, r.self_match)).collect();
        // X is hidden but, being expanded, its children are still tested
        assert_eq!(summary, vec![("Y", 1, false), ("Z-match", 2, true)]);
    }

    #[test]
    fn test_whitespace_term_is_not_trimmed() {
        let forest = vec![node(1, "Alpha"), node(2, "Beta Team")];
        let expansion = ExpansionState::new();

        // Only the empty string matches everything
        assert!(visible_rows(&forest, &expansion, "  ").is_empty());
        assert!(visible_rows(&forest, &expansion, " alp").is_empty());

        let rows = visible_rows(&forest, &expansion, " team");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Beta Team");
        assert_eq!(visible_rows(&forest, &expansion, "").len(), 2);
    }

    #[test]
    fn test_retain_known() {
        let mut expansion = ExpansionState::new();
        expansion.toggle(&GroupId::from(3u64));
        expansion.toggle(&GroupId::from(42u64));
        expansion.retain_known(&sample_forest());
        assert_eq!(expansion.len(), 1);
        assert!(expansion.is_expanded(&GroupId::from(3u64)));

        expansion.collapse_all();
        assert!(expansion.is_empty());
    }
}
