//! Notebook tree: named containers nesting other notebooks.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A notebook and its ordered child notebooks.
///
/// Notes are not held here; they are queried from the store on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notebook {
    id: String,
    name: String,
    children: Vec<Notebook>,
}

impl Notebook {
    /// Creates a notebook without children.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Adds a child notebook, returning self for chaining.
    pub fn with_child(mut self, child: Notebook) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the notebook identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the child notebooks in their defined order.
    pub fn children(&self) -> &[Notebook] {
        &self.children
    }

    /// Depth-first search of this notebook and its descendants.
    ///
    /// The first match in pre-order wins.
    pub fn find(&self, id: &str) -> Option<&Notebook> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Total number of notebooks in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Notebook::count).sum::<usize>()
    }
}

/// Depth-first search across a forest of notebooks, first match wins.
pub fn find_notebook<'a>(roots: &'a [Notebook], id: &str) -> Option<&'a Notebook> {
    roots.iter().find_map(|root| root.find(id))
}

/// A flat notebook record as stored, with a parent pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookRow {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub position: i64,
}

/// Builds the notebook forest from flat rows.
///
/// Rows whose parent is missing from the set are treated as roots. Siblings
/// are ordered by `position`, then by input order. Rows caught in a parent
/// cycle are never reachable from a root and are dropped.
pub fn build_tree(rows: Vec<NotebookRow>) -> Vec<Notebook> {
    let known: HashSet<String> = rows.iter().map(|r| r.id.clone()).collect();

    let mut by_parent: HashMap<Option<String>, Vec<(usize, NotebookRow)>> = HashMap::new();
    for (order, row) in rows.into_iter().enumerate() {
        let parent = row.parent_id.clone().filter(|p| known.contains(p));
        by_parent.entry(parent).or_default().push((order, row));
    }
    for siblings in by_parent.values_mut() {
        siblings.sort_by_key(|(order, row)| (row.position, *order));
    }

    let mut visited = HashSet::new();
    attach_children(None, &mut by_parent, &mut visited)
}

fn attach_children(
    parent: Option<String>,
    by_parent: &mut HashMap<Option<String>, Vec<(usize, NotebookRow)>>,
    visited: &mut HashSet<String>,
) -> Vec<Notebook> {
    let Some(rows) = by_parent.remove(&parent) else {
        return Vec::new();
    };

    let mut notebooks = Vec::with_capacity(rows.len());
    for (_, row) in rows {
        if !visited.insert(row.id.clone()) {
            continue;
        }
        let children = attach_children(Some(row.id.clone()), by_parent, visited);
        notebooks.push(Notebook {
            id: row.id,
            name: row.name,
            children,
        });
    }
    notebooks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(id: &str, parent: Option<&str>, position: i64) -> NotebookRow {
        NotebookRow {
            id: id.to_string(),
            name: format!("Book {}", id),
            parent_id: parent.map(str::to_string),
            position,
        }
    }

    fn ids(books: &[Notebook]) -> Vec<&str> {
        books.iter().map(Notebook::id).collect()
    }

    // ===========================================
    // find
    // ===========================================

    #[test]
    fn find_returns_self_on_match() {
        let book = Notebook::new("a", "A");
        assert_eq!(book.find("a").map(Notebook::name), Some("A"));
    }

    #[test]
    fn find_searches_descendants() {
        let book = Notebook::new("a", "A")
            .with_child(Notebook::new("b", "B").with_child(Notebook::new("c", "C")));
        assert_eq!(book.find("c").map(Notebook::name), Some("C"));
        assert!(book.find("zzz").is_none());
    }

    #[test]
    fn find_notebook_first_match_wins_depth_first() {
        let roots = vec![
            Notebook::new("a", "A").with_child(Notebook::new("dup", "Deep")),
            Notebook::new("dup", "Shallow"),
        ];
        assert_eq!(
            find_notebook(&roots, "dup").map(Notebook::name),
            Some("Deep")
        );
    }

    #[test]
    fn count_includes_descendants() {
        let book = Notebook::new("a", "A")
            .with_child(Notebook::new("b", "B").with_child(Notebook::new("c", "C")))
            .with_child(Notebook::new("d", "D"));
        assert_eq!(book.count(), 4);
    }

    // ===========================================
    // build_tree
    // ===========================================

    #[test]
    fn build_tree_nests_children_under_parents() {
        let tree = build_tree(vec![
            row("root", None, 0),
            row("child", Some("root"), 0),
            row("grandchild", Some("child"), 0),
        ]);

        assert_eq!(ids(&tree), vec!["root"]);
        assert_eq!(ids(tree[0].children()), vec!["child"]);
        assert_eq!(ids(tree[0].children()[0].children()), vec!["grandchild"]);
    }

    #[test]
    fn build_tree_orders_siblings_by_position_then_input() {
        let tree = build_tree(vec![
            row("c", None, 2),
            row("a", None, 1),
            row("b", None, 1),
        ]);
        assert_eq!(ids(&tree), vec!["a", "b", "c"]);
    }

    #[test]
    fn build_tree_promotes_orphans_to_roots() {
        let tree = build_tree(vec![row("orphan", Some("missing"), 0)]);
        assert_eq!(ids(&tree), vec!["orphan"]);
    }

    #[test]
    fn build_tree_drops_parent_cycles() {
        let tree = build_tree(vec![
            row("root", None, 0),
            row("x", Some("y"), 0),
            row("y", Some("x"), 0),
        ]);
        assert_eq!(ids(&tree), vec!["root"]);
        assert!(tree[0].children().is_empty());
    }

    #[test]
    fn build_tree_empty_input() {
        assert!(build_tree(Vec::new()).is_empty());
    }
}
