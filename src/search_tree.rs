//! A plain (not self-balancing) Binary Search Tree whose nodes know their parent.
//!
//! The parent links make it possible to walk to a node's successor or predecessor without
//! searching from the root, and to remove a node given only a handle to it. Nodes are stored in a
//! generational arena owned by the tree and every link is a [`NodeId`] into that arena, so the
//! child links and parent links never fight over ownership.
//!
//! Values that compare equal are kept; they are routed to the right of the existing ones.
//!
//! # Examples
//!
//! ```
//! use algos::search_tree::{Node, SearchTree};
//!
//! let mut tree = SearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&10), None);
//!
//! let ten = tree.insert(Node::new(10));
//! tree.insert(Node::new(5));
//! tree.insert(Node::new(15));
//!
//! assert_eq!(tree.search(&10), Some(ten));
//! assert_eq!(tree.values(), [&5, &10, &15]);
//!
//! // Walking in order only needs the parent links.
//! let fifteen = tree.successor(ten).unwrap();
//! assert_eq!(tree.value(fifteen), Some(&15));
//!
//! // Deleting hands back the detached node.
//! let removed = tree.delete_node(ten).unwrap();
//! assert_eq!(removed.into_value(), 10);
//! assert_eq!(tree.values(), [&5, &15]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use generational_arena::{Arena, Index};

use crate::compare::{Compare, Natural};
use crate::error::TreeError;

/// A handle to a node stored in a [`SearchTree`]. Handles stay valid until their node is deleted
/// and are never reused for a different node afterwards. A handle only works with the tree that
/// handed it out (and clones of that tree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: TreeId,
    index: Index,
}

/// Stamped on every tree and every handle it gives out, so handles can't be mixed up between trees
/// whose arenas happen to line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TreeId(usize);

impl TreeId {
    fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// A value together with its links to the rest of a tree. A freshly constructed `Node` (or one
/// returned by [`SearchTree::delete_node`]) has no links at all.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// The value used to order this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The root of this node's right subtree.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The node this one hangs from. `None` for the root and for detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Consumes the node returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    fn detach(&mut self) {
        self.left = None;
        self.right = None;
        self.parent = None;
    }
}

/// A Binary Search Tree ordered by the comparator `C`.
///
/// Cloning a tree clones its arena, so every [`NodeId`] of the original refers to the same
/// position in the clone.
#[derive(Clone)]
pub struct SearchTree<T, C = Natural> {
    id: TreeId,
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
    comparator: C,
}

impl<T: Ord> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> SearchTree<T> {
    /// Generates a new, empty `SearchTree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Generates a tree whose only node is `root`.
    pub fn with_root(root: Node<T>) -> Self {
        Self::with_root_and_comparator(root, Natural)
    }
}

impl<T, C> SearchTree<T, C>
where
    C: Compare<T>,
{
    /// Generates a new, empty `SearchTree` that orders its values with `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use algos::search_tree::{Node, SearchTree};
    ///
    /// let mut tree = SearchTree::with_comparator(|a: &&str, b: &&str| a.cmp(b));
    /// let banana = tree.insert(Node::new("banana"));
    /// tree.insert(Node::new("apple"));
    /// tree.insert(Node::new("cherry"));
    ///
    /// assert_eq!(tree.root(), Some(banana));
    /// assert_eq!(tree.search(&"orange"), None);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            id: TreeId::next(),
            nodes: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Generates a tree whose only node is `root`, ordered by `comparator`.
    pub fn with_root_and_comparator(root: Node<T>, comparator: C) -> Self {
        let mut tree = Self::with_comparator(comparator);
        tree.insert(root);
        tree
    }

    /// Attaches `node` as a new leaf and returns its handle. The node's value is compared against
    /// the values on the way down: smaller ones go left, everything else (including equal values)
    /// goes right.
    ///
    /// # Examples
    ///
    /// ```
    /// use algos::search_tree::{Node, SearchTree};
    ///
    /// let mut tree = SearchTree::new();
    /// let first = tree.insert(Node::new(10));
    /// let second = tree.insert(Node::new(10));
    ///
    /// // Duplicates are kept, to the right.
    /// assert_eq!(tree.get(first).unwrap().right(), Some(second));
    /// assert_eq!(tree.get(second).unwrap().parent(), Some(first));
    /// ```
    pub fn insert(&mut self, node: Node<T>) -> NodeId {
        let mut trailing = None;
        let mut goes_left = false;
        let mut current = self.root;

        while let Some(id) = current {
            let current_node = &self.nodes[id.index];
            trailing = Some(id);
            goes_left = self.comparator.lt(&node.value, &current_node.value);
            current = if goes_left {
                current_node.left
            } else {
                current_node.right
            };
        }

        let id = NodeId {
            tree: self.id,
            index: self.nodes.insert(Node {
                parent: trailing,
                ..Node::new(node.value)
            }),
        };

        match trailing {
            None => self.root = Some(id),
            Some(parent) if goes_left => self.nodes[parent.index].left = Some(id),
            Some(parent) => self.nodes[parent.index].right = Some(id),
        }

        if cfg!(debug_assertions) {
            if let Some(parent) = trailing {
                let parent = &self.nodes[parent.index];
                assert!(parent.left == Some(id) || parent.right == Some(id));
            }
        }

        tracing::trace!(node = ?id, parent = ?trailing, "inserted node");
        id
    }

    /// Wraps `value` in a [`Node`] and inserts it.
    pub fn insert_value(&mut self, value: T) -> NodeId {
        self.insert(Node::new(value))
    }

    /// Finds a node whose value compares equal to `value`. When there are several, the one closest
    /// to the root is returned.
    pub fn search(&self, value: &T) -> Option<NodeId> {
        self.search_from(value, self.root)
    }

    /// Like [`search`][Self::search] but only looks at the subtree rooted at `start`.
    pub fn search_from(&self, value: &T, start: Option<NodeId>) -> Option<NodeId> {
        let mut current = start;
        while let Some(id) = current {
            let node = self.get(id)?;
            current = match self.comparator.compare(value, &node.value) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C> SearchTree<T, C> {
    /// The top node, if the tree has any nodes.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Looks up the node behind a handle.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        if id.tree != self.id {
            return None;
        }
        self.nodes.get(id.index)
    }

    /// Looks up the value behind a handle.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(Node::value)
    }

    /// Whether `id` refers to a node currently in this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visits every node in order (left subtree, node, right subtree), so values arrive sorted.
    pub fn traverse<F>(&self, visit: F)
    where
        F: FnMut(NodeId, &Node<T>),
    {
        self.traverse_from(self.root, visit)
    }

    /// Visits the subtree rooted at `start` in order. Nothing is visited when `start` is `None` or
    /// not part of this tree.
    ///
    /// This keeps its own stack so a long, degenerate chain of nodes can't overflow the call
    /// stack.
    pub fn traverse_from<F>(&self, start: Option<NodeId>, mut visit: F)
    where
        F: FnMut(NodeId, &Node<T>),
    {
        let mut stack = Vec::new();
        let mut current = start.filter(|id| self.contains(*id));

        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id.index].left;
            }

            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id.index];
            visit(id, node);
            current = node.right;
        }
    }

    /// The handles of all nodes, in order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len());
        self.traverse(|id, _| ids.push(id));
        ids
    }

    /// All values, in order.
    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// A lazy in-order iterator over the values, stepping from node to successor.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            tree: self,
            next: self.minimum(),
            remaining: self.len(),
        }
    }

    /// Consumes the tree returning its values in order.
    pub fn into_values(mut self) -> Vec<T> {
        self.nodes()
            .into_iter()
            .filter_map(|id| self.nodes.remove(id.index))
            .map(Node::into_value)
            .collect()
    }

    /// The node with the smallest value.
    pub fn minimum(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The node with the smallest value in the subtree rooted at `start`.
    pub fn minimum_from(&self, start: NodeId) -> Option<NodeId> {
        self.contains(start).then(|| self.leftmost(start))
    }

    /// The node with the largest value.
    pub fn maximum(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// The node with the largest value in the subtree rooted at `start`.
    pub fn maximum_from(&self, start: NodeId) -> Option<NodeId> {
        self.contains(start).then(|| self.rightmost(start))
    }

    /// The node that comes right after `id` in order, or `None` if `id` is the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use algos::search_tree::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// for x in [15, 6, 18, 3, 7, 17, 20, 2, 4, 13, 9] {
    ///     tree.insert_value(x);
    /// }
    ///
    /// // 13 has no right child, so we climb until we come up from a left child.
    /// let thirteen = tree.search(&13).unwrap();
    /// assert_eq!(tree.successor(thirteen), tree.search(&15));
    ///
    /// let twenty = tree.search(&20).unwrap();
    /// assert_eq!(tree.successor(twenty), None);
    /// ```
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }

        let mut current = id;
        let mut trailing = node.parent;
        while let Some(parent) = trailing {
            let parent_node = &self.nodes[parent.index];
            if parent_node.right != Some(current) {
                break;
            }
            current = parent;
            trailing = parent_node.parent;
        }

        trailing
    }

    /// The node that comes right before `id` in order, or `None` if `id` is the minimum.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        if let Some(left) = node.left {
            return Some(self.rightmost(left));
        }

        let mut current = id;
        let mut trailing = node.parent;
        while let Some(parent) = trailing {
            let parent_node = &self.nodes[parent.index];
            if parent_node.left != Some(current) {
                break;
            }
            current = parent;
            trailing = parent_node.parent;
        }

        trailing
    }

    /// Removes the node behind `id` from the tree and returns it, detached from its former
    /// neighbours.
    ///
    /// A node with two children is replaced by its successor (the smallest node of its right
    /// subtree) so the order is preserved. The tree is not rebalanced afterwards.
    ///
    /// # Errors
    ///
    /// [`TreeError::NodeNotFound`] if `id` isn't a node of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use algos::search_tree::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// for x in [10, 5, 15, 3, 7, 12, 17] {
    ///     tree.insert_value(x);
    /// }
    ///
    /// let fifteen = tree.search(&15).unwrap();
    /// assert_eq!(tree.delete_node(fifteen).map(|n| n.into_value()), Ok(15));
    /// assert_eq!(tree.values(), [&3, &5, &7, &10, &12, &17]);
    ///
    /// // The handle is stale now.
    /// assert!(tree.delete_node(fifteen).is_err());
    /// ```
    pub fn delete_node(&mut self, id: NodeId) -> Result<Node<T>, TreeError> {
        let node = self.get(id).ok_or(TreeError::NodeNotFound(id))?;

        match (node.left, node.right) {
            (None, right) => self.transplant(id, right),
            (left @ Some(_), None) => self.transplant(id, left),
            (Some(left), Some(right)) => {
                let replacement = self.leftmost(right);

                // Unhook the successor from deep inside the right subtree first, otherwise it
                // would end up as its own ancestor.
                if replacement != right {
                    let replacement_right = self.nodes[replacement.index].right;
                    self.transplant(replacement, replacement_right);
                    self.nodes[replacement.index].right = Some(right);
                    self.nodes[right.index].parent = Some(replacement);
                }

                self.transplant(id, Some(replacement));
                self.nodes[replacement.index].left = Some(left);
                self.nodes[left.index].parent = Some(replacement);
            }
        }

        let mut removed = self
            .nodes
            .remove(id.index)
            .ok_or(TreeError::NodeNotFound(id))?;
        removed.detach();

        if cfg!(debug_assertions) {
            if let Some(root) = self.root {
                assert_eq!(self.nodes[root.index].parent, None);
            }
        }

        tracing::trace!(node = ?id, "deleted node");
        Ok(removed)
    }

    /// Puts `replacement` where `target` hangs from its parent (or makes it the root). Only the
    /// parent side is rewired; `target` keeps its own links and `replacement` keeps its children.
    fn transplant(&mut self, target: NodeId, replacement: Option<NodeId>) {
        let parent = self.nodes[target.index].parent;
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent = &mut self.nodes[parent.index];
                if parent.left == Some(target) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
        }

        if let Some(replacement) = replacement {
            self.nodes[replacement.index].parent = parent;
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id.index].left {
            id = left;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id.index].right {
            id = right;
        }
        id
    }
}

impl<T, C> fmt::Debug for SearchTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTree")
            .field("root", &self.root)
            .field("values", &self.values())
            .finish()
    }
}

/// In-order iterator over the values of a [`SearchTree`]. See [`SearchTree::iter`].
pub struct Iter<'a, T, C> {
    tree: &'a SearchTree<T, C>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.successor(id);
        self.remaining = self.remaining.saturating_sub(1);
        self.tree.value(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}

impl<'a, T, C> IntoIterator for &'a SearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<T, C> SearchTree<T, C>
where
    T: fmt::Debug,
    C: Compare<T>,
{
    /// Panics unless every link is mirrored by its counterpart and every node sits between its
    /// left and right subtrees.
    pub(crate) fn assert_invariants(&self) {
        if let Some(root) = self.root {
            assert_eq!(self.nodes[root.index].parent, None, "root has a parent");
        }

        let ids = self.nodes();
        assert_eq!(ids.len(), self.nodes.len(), "unreachable nodes in the arena");

        for id in ids {
            let node = &self.nodes[id.index];
            if let Some(left) = node.left {
                assert_eq!(self.nodes[left.index].parent, Some(id));
                let largest_left = &self.nodes[self.rightmost(left).index].value;
                assert!(
                    self.comparator.lt(largest_left, &node.value),
                    "{:?} is in the left subtree of {:?}",
                    largest_left,
                    node.value
                );
            }
            if let Some(right) = node.right {
                assert_eq!(self.nodes[right.index].parent, Some(id));
                let smallest_right = &self.nodes[self.leftmost(right).index].value;
                assert!(
                    !self.comparator.lt(smallest_right, &node.value),
                    "{:?} is in the right subtree of {:?}",
                    smallest_right,
                    node.value
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> SearchTree<i32> {
        let mut tree = SearchTree::new();
        for value in values {
            tree.insert_value(*value);
        }
        tree
    }

    /// The value of the node `id` links to, following `link`.
    fn linked_value(
        tree: &SearchTree<i32>,
        value: i32,
        link: impl Fn(&Node<i32>) -> Option<NodeId>,
    ) -> Option<i32> {
        let id = tree.search(&value)?;
        let linked = link(tree.get(id)?)?;
        tree.value(linked).copied()
    }

    #[test]
    fn insert_into_empty_tree() {
        let mut tree = SearchTree::new();
        let id = tree.insert(Node::new(10));

        assert_eq!(tree.root(), Some(id));
        assert_eq!(tree.get(id).unwrap().parent(), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn insert_places_children_by_order() {
        let mut tree = SearchTree::new();
        let ten = tree.insert_value(10);
        let five = tree.insert_value(5);
        let fifteen = tree.insert_value(15);

        let root = tree.get(ten).unwrap();
        assert_eq!(root.left(), Some(five));
        assert_eq!(root.right(), Some(fifteen));
        assert_eq!(tree.get(five).unwrap().parent(), Some(ten));
        assert_eq!(tree.get(fifteen).unwrap().parent(), Some(ten));
    }

    #[test]
    fn smaller_value_below_a_node_without_left_child_goes_left() {
        // 15 hangs right of 10 and has no left child. 12 must still end up left of 15, and 5 left
        // of 10, rather than being pushed down the right spine.
        let tree = tree_of(&[10, 15, 12, 5]);

        assert_eq!(linked_value(&tree, 15, Node::left), Some(12));
        assert_eq!(linked_value(&tree, 10, Node::left), Some(5));
        tree.assert_invariants();
    }

    #[test]
    fn with_root_starts_with_one_node() {
        let tree = SearchTree::with_root(Node::new(10));

        assert_eq!(tree.values(), [&10]);
        assert_eq!(tree.search(&10), tree.root());
    }

    #[test]
    fn with_root_and_comparator_uses_the_comparator() {
        let mut tree = SearchTree::with_root_and_comparator(
            Node::new(10),
            crate::compare::Rev(Natural),
        );
        let ten = tree.root().unwrap();
        let twenty = tree.insert_value(20);

        assert_eq!(tree.get(ten).unwrap().left(), Some(twenty));
        assert_eq!(tree.values(), [&20, &10]);
        tree.assert_invariants();
    }

    #[test]
    fn traverse_empty_tree() {
        let tree = SearchTree::<i32>::new();
        let mut visits = 0;

        tree.traverse(|_, _| visits += 1);

        assert_eq!(visits, 0);
        assert!(tree.values().is_empty());
        assert!(tree.is_empty());
    }

    #[test]
    fn traverse_visits_in_ascending_order() {
        let tree = tree_of(&[10, 5, 15, 3, 7]);
        let mut seen = Vec::new();

        tree.traverse(|_, node| seen.push(*node.value()));

        assert_eq!(seen, [3, 5, 7, 10, 15]);
        assert_eq!(tree.values(), [&3, &5, &7, &10, &15]);
    }

    #[test]
    fn traverse_from_subtree() {
        let tree = tree_of(&[10, 5, 15, 3, 7, 12, 17]);
        let mut seen = Vec::new();

        tree.traverse_from(tree.search(&5), |_, node| seen.push(*node.value()));
        assert_eq!(seen, [3, 5, 7]);

        seen.clear();
        tree.traverse_from(None, |_, node| seen.push(*node.value()));
        assert!(seen.is_empty());
    }

    #[test]
    fn degenerate_chain_does_not_overflow() {
        let mut tree = SearchTree::new();
        for x in 0..10_000 {
            tree.insert_value(x);
        }

        let mut count = 0;
        tree.traverse(|_, _| count += 1);
        assert_eq!(count, 10_000);
        assert_eq!(tree.iter().len(), 10_000);
    }

    #[test]
    fn nodes_match_values() {
        let tree = tree_of(&[8, 4, 12]);
        let values: Vec<_> = tree
            .nodes()
            .into_iter()
            .map(|id| *tree.value(id).unwrap())
            .collect();

        assert_eq!(values, [4, 8, 12]);
    }

    #[test]
    fn search() {
        let tree = tree_of(&[10, 5, 15, 3, 7, 20]);

        assert_eq!(tree.search(&10), tree.root());
        assert_eq!(tree.value(tree.search(&7).unwrap()), Some(&7));
        assert_eq!(tree.search(&20).and_then(|id| tree.value(id)), Some(&20));
        assert_eq!(tree.search(&21), None);
        assert_eq!(SearchTree::<i32>::new().search(&10), None);
    }

    #[test]
    fn search_from_only_looks_below_start() {
        let tree = tree_of(&[10, 5, 15]);
        let five = tree.search(&5);

        assert_eq!(tree.search_from(&5, five), five);
        assert_eq!(tree.search_from(&15, five), None);
    }

    #[test]
    fn search_duplicates_finds_the_topmost() {
        let mut tree = SearchTree::new();
        let first = tree.insert_value(4);
        tree.insert_value(4);
        tree.insert_value(4);

        assert_eq!(tree.search(&4), Some(first));
    }

    #[test]
    fn minimum_and_maximum() {
        let tree = tree_of(&[10, 5, 35, 3, 7, 20]);

        assert_eq!(tree.minimum().and_then(|id| tree.value(id)), Some(&3));
        assert_eq!(tree.maximum().and_then(|id| tree.value(id)), Some(&35));

        let thirty_five = tree.search(&35).unwrap();
        assert_eq!(tree.minimum_from(thirty_five), tree.search(&20));
        assert_eq!(tree.maximum_from(thirty_five), Some(thirty_five));

        let empty = SearchTree::<i32>::new();
        assert_eq!(empty.minimum(), None);
        assert_eq!(empty.maximum(), None);
    }

    #[test]
    fn successor_climbs_parent_links() {
        let tree = tree_of(&[15, 6, 18, 3, 7, 17, 20, 2, 4, 13, 9]);

        let thirteen = tree.search(&13).unwrap();
        assert_eq!(tree.successor(thirteen), tree.search(&15));

        let six = tree.search(&6).unwrap();
        assert_eq!(tree.successor(six), tree.search(&7));

        let twenty = tree.search(&20).unwrap();
        assert_eq!(tree.successor(twenty), None);
    }

    #[test]
    fn predecessor_climbs_parent_links() {
        let tree = tree_of(&[15, 6, 18, 3, 7, 17, 20, 2, 4, 13, 9]);

        let seventeen = tree.search(&17).unwrap();
        assert_eq!(tree.predecessor(seventeen), tree.search(&15));

        let fifteen = tree.search(&15).unwrap();
        assert_eq!(tree.predecessor(fifteen), tree.search(&13));

        let two = tree.search(&2).unwrap();
        assert_eq!(tree.predecessor(two), None);
    }

    #[test]
    fn delete_leaf() {
        let mut tree = tree_of(&[10, 5, 15, 3]);

        let three = tree.search(&3).unwrap();
        let removed = tree.delete_node(three).unwrap();

        assert_eq!(*removed.value(), 3);
        assert_eq!(removed.parent(), None);
        assert_eq!(tree.search(&3), None);
        assert_eq!(linked_value(&tree, 5, Node::left), None);
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_only_left_child() {
        let mut tree = tree_of(&[10, 5, 15, 3]);

        tree.delete_node(tree.search(&5).unwrap()).unwrap();

        assert_eq!(tree.search(&5), None);
        assert_eq!(linked_value(&tree, 10, Node::left), Some(3));
        assert_eq!(linked_value(&tree, 3, Node::parent), Some(10));
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_only_right_child() {
        let mut tree = tree_of(&[10, 5, 15, 7]);

        tree.delete_node(tree.search(&5).unwrap()).unwrap();

        assert_eq!(tree.search(&5), None);
        assert_eq!(linked_value(&tree, 10, Node::left), Some(7));
        assert_eq!(linked_value(&tree, 7, Node::parent), Some(10));
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_two_children() {
        let mut tree = tree_of(&[10, 5, 15, 3, 7, 12, 17]);

        tree.delete_node(tree.search(&15).unwrap()).unwrap();

        assert_eq!(tree.search(&15), None);
        assert_eq!(linked_value(&tree, 10, Node::right), Some(17));
        assert_eq!(linked_value(&tree, 17, Node::left), Some(12));
        assert_eq!(linked_value(&tree, 12, Node::parent), Some(17));
        tree.assert_invariants();
    }

    #[test]
    fn delete_root_with_two_children() {
        let mut tree = tree_of(&[10, 5, 15, 3, 7, 12, 17]);

        tree.delete_node(tree.search(&10).unwrap()).unwrap();

        assert_eq!(tree.search(&10), None);
        assert_eq!(tree.root().and_then(|id| tree.value(id)), Some(&12));
        assert_eq!(linked_value(&tree, 12, Node::left), Some(5));
        assert_eq!(linked_value(&tree, 12, Node::right), Some(15));
        assert_eq!(linked_value(&tree, 5, Node::parent), Some(12));
        assert_eq!(linked_value(&tree, 15, Node::parent), Some(12));
        assert_eq!(linked_value(&tree, 15, Node::left), None);
        tree.assert_invariants();
    }

    #[test]
    fn delete_root_with_one_child() {
        let mut tree = tree_of(&[10, 5]);

        tree.delete_node(tree.search(&10).unwrap()).unwrap();

        assert_eq!(tree.search(&10), None);
        assert_eq!(tree.root(), tree.search(&5));
        assert_eq!(linked_value(&tree, 5, Node::parent), None);
    }

    #[test]
    fn delete_only_node_empties_tree() {
        let mut tree = tree_of(&[10]);

        tree.delete_node(tree.search(&10).unwrap()).unwrap();

        assert_eq!(tree.search(&10), None);
        assert_eq!(tree.root(), None);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn delete_when_successor_has_right_child() {
        let mut tree = tree_of(&[10, 5, 15, 3, 7, 12, 17, 11, 13]);

        tree.delete_node(tree.search(&15).unwrap()).unwrap();

        assert_eq!(tree.search(&15), None);
        assert_eq!(linked_value(&tree, 10, Node::right), Some(17));
        assert_eq!(linked_value(&tree, 17, Node::left), Some(12));
        assert_eq!(linked_value(&tree, 12, Node::left), Some(11));
        assert_eq!(linked_value(&tree, 12, Node::right), Some(13));
        assert_eq!(linked_value(&tree, 11, Node::parent), Some(12));
        assert_eq!(linked_value(&tree, 13, Node::parent), Some(12));
        tree.assert_invariants();
    }

    #[test]
    fn delete_deep_successor_keeps_its_right_subtree() {
        // The successor of 100 is 110, two levels into the right subtree, and it has a right
        // child of its own (115) that must stay behind under 120.
        let mut tree = tree_of(&[100, 50, 150, 120, 170, 110, 115]);

        tree.delete_node(tree.search(&100).unwrap()).unwrap();

        assert_eq!(tree.root().and_then(|id| tree.value(id)), Some(&110));
        assert_eq!(linked_value(&tree, 120, Node::left), Some(115));
        assert_eq!(linked_value(&tree, 115, Node::parent), Some(120));
        assert_eq!(linked_value(&tree, 110, Node::right), Some(150));
        assert_eq!(tree.values(), [&50, &110, &115, &120, &150, &170]);
        tree.assert_invariants();
    }

    #[test]
    fn delete_stale_handle() {
        let mut tree = tree_of(&[10, 5]);
        let five = tree.search(&5).unwrap();

        assert!(tree.delete_node(five).is_ok());
        assert_eq!(tree.delete_node(five).unwrap_err(), TreeError::NodeNotFound(five));
        assert_eq!(tree.successor(five), None);
        assert_eq!(tree.minimum_from(five), None);
        assert_eq!(tree.get(five).map(Node::value), None);
        assert_eq!(tree.values(), [&10]);
    }

    #[test]
    fn handle_from_another_tree_is_rejected() {
        let mut other = SearchTree::new();
        let other_root = other.insert_value(100);
        let mut tree = tree_of(&[1, 2]);

        assert_eq!(
            tree.delete_node(other_root).unwrap_err(),
            TreeError::NodeNotFound(other_root)
        );
        assert!(!tree.contains(other_root));
        assert_eq!(tree.get(other_root).map(Node::value), None);
        assert_eq!(tree.successor(other_root), None);
        assert_eq!(tree.search_from(&1, Some(other_root)), None);
        assert_eq!(tree.values(), [&1, &2]);
        assert_eq!(other.values(), [&100]);
    }

    #[test]
    fn handles_carry_over_to_clones() {
        let tree = tree_of(&[10, 5, 15]);
        let five = tree.search(&5).unwrap();
        let mut copy = tree.clone();

        assert_eq!(copy.delete_node(five).map(Node::into_value), Ok(5));
        assert_eq!(copy.values(), [&10, &15]);
        assert_eq!(tree.values(), [&5, &10, &15]);
    }

    #[test]
    fn deleted_node_can_be_inserted_again() {
        let mut tree = tree_of(&[10, 5, 15]);

        let five = tree.delete_node(tree.search(&5).unwrap()).unwrap();
        let new_five = tree.insert(five);

        assert_eq!(tree.search(&5), Some(new_five));
        tree.assert_invariants();
    }

    #[test]
    fn custom_comparator() {
        let mut tree = SearchTree::with_comparator(|a: &&str, b: &&str| a.cmp(b));
        let banana = tree.insert_value("banana");
        let apple = tree.insert_value("apple");
        let cherry = tree.insert_value("cherry");

        assert_eq!(tree.root(), Some(banana));
        assert_eq!(tree.get(banana).unwrap().left(), Some(apple));
        assert_eq!(tree.get(banana).unwrap().right(), Some(cherry));
        assert_eq!(tree.search(&"orange"), None);
    }

    #[test]
    fn reversed_comparator_sorts_descending() {
        let mut tree = SearchTree::with_comparator(crate::compare::Rev(Natural));
        for x in [3, 1, 2] {
            tree.insert_value(x);
        }

        assert_eq!(tree.values(), [&3, &2, &1]);
        tree.assert_invariants();
    }

    #[test]
    fn into_values_and_debug() {
        let tree = tree_of(&[2, 1, 3]);

        assert!(format!("{:?}", tree).contains("[1, 2, 3]"));
        assert_eq!(tree.clone().into_values(), [1, 2, 3]);
        assert_eq!((&tree).into_iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
