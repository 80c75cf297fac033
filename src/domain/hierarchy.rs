// src/domain/hierarchy.rs
//! Parent/child re-linking for the self-referential category and service
//! collections.
use crate::domain::shared::DocumentId;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

pub trait Hierarchy {
    fn node_id(&self) -> &DocumentId;
    fn parent(&self) -> Option<&DocumentId>;
    fn order(&self) -> i32;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

/// Siblings are ordered by `order`, then case-insensitively by name.
pub fn sibling_order<T: Hierarchy>(a: &T, b: &T) -> Ordering {
    a.order()
        .cmp(&b.order())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
}

/// Link a flat list into a forest. Roots are items whose parent is absent
/// or not part of `items`. Items caught in a parent cycle are appended as
/// extra roots so nothing is dropped.
pub fn build_forest<T: Hierarchy>(items: Vec<T>) -> Vec<TreeNode<T>> {
    let index: HashMap<DocumentId, usize> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.node_id().clone(), i))
        .collect();

    let mut sorted: Vec<usize> = (0..items.len()).collect();
    sorted.sort_by(|a, b| sibling_order(&items[*a], &items[*b]));

    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for &i in &sorted {
        match items[i].parent().and_then(|p| index.get(p)) {
            Some(&parent) if parent != i => children.entry(parent).or_default().push(i),
            _ => roots.push(i),
        }
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut forest: Vec<TreeNode<T>> = roots
        .into_iter()
        .filter_map(|i| take_subtree(i, &mut slots, &children))
        .collect();

    for i in sorted {
        if let Some(node) = take_subtree(i, &mut slots, &children) {
            forest.push(node);
        }
    }
    forest
}

/// Whether re-parenting `node` under `new_parent` would close a loop, that
/// is whether `new_parent` is `node` itself or one of its descendants.
pub fn would_create_cycle<T: Hierarchy>(items: &[T], node: &DocumentId, new_parent: &DocumentId) -> bool {
    let parents: HashMap<&DocumentId, Option<&DocumentId>> = items
        .iter()
        .map(|item| (item.node_id(), item.parent()))
        .collect();
    let mut seen = HashSet::new();
    let mut current = Some(new_parent);
    while let Some(id) = current {
        if id == node {
            return true;
        }
        if !seen.insert(id) {
            return false;
        }
        current = parents.get(id).copied().flatten();
    }
    false
}

fn take_subtree<T>(
    i: usize,
    slots: &mut [Option<T>],
    children: &HashMap<usize, Vec<usize>>,
) -> Option<TreeNode<T>> {
    let item = slots[i].take()?;
    let kids = children
        .get(&i)
        .map(|ids| {
            ids.iter()
                .filter_map(|c| take_subtree(*c, slots, children))
                .collect()
        })
        .unwrap_or_default();
    Some(TreeNode {
        item,
        children: kids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        id: DocumentId,
        parent: Option<DocumentId>,
        order: i32,
        name: String,
    }

    impl Hierarchy for Node {
        fn node_id(&self) -> &DocumentId {
            &self.id
        }
        fn parent(&self) -> Option<&DocumentId> {
            self.parent.as_ref()
        }
        fn order(&self) -> i32 {
            self.order
        }
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn id(n: u8) -> DocumentId {
        DocumentId::new(format!("{:024x}", n)).unwrap()
    }

    fn node(n: u8, parent: Option<u8>, order: i32, name: &str) -> Node {
        Node {
            id: id(n),
            parent: parent.map(id),
            order,
            name: name.into(),
        }
    }

    #[test]
    fn children_sorted_by_order_then_name() {
        let forest = build_forest(vec![
            node(1, None, 0, "Raíz"),
            node(2, Some(1), 2, "Zeta"),
            node(3, Some(1), 1, "beta"),
            node(4, Some(1), 1, "Alfa"),
        ]);
        assert_eq!(forest.len(), 1);
        let names: Vec<_> = forest[0].children.iter().map(|c| c.item.name.as_str()).collect();
        assert_eq!(names, ["Alfa", "beta", "Zeta"]);
    }

    #[test]
    fn orphan_becomes_root() {
        let forest = build_forest(vec![node(1, None, 1, "A"), node(2, Some(9), 0, "B")]);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].item.name, "B");
    }

    #[test]
    fn moving_under_a_descendant_is_a_cycle() {
        let items = vec![
            node(1, None, 0, "A"),
            node(2, Some(1), 0, "B"),
            node(3, Some(2), 0, "C"),
            node(4, None, 1, "D"),
        ];
        assert!(would_create_cycle(&items, &id(1), &id(3)));
        assert!(would_create_cycle(&items, &id(1), &id(1)));
        assert!(!would_create_cycle(&items, &id(3), &id(4)));
        assert!(!would_create_cycle(&items, &id(2), &id(1)));
    }

    #[test]
    fn cycles_do_not_drop_items() {
        let forest = build_forest(vec![node(1, Some(2), 0, "A"), node(2, Some(1), 0, "B")]);
        let total: usize = forest.iter().map(TreeNode::size).sum();
        assert_eq!(total, 2);
    }
}
