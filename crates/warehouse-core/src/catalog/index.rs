//! Ordered category index.
//!
//! An unbalanced binary search tree keyed by category name. The root lives
//! inside [`CategoryIndex`]; insert and delete rebuild the affected path and
//! reassign it internally, so callers only ever hold the index itself.
//!
//! Invariant: for every node, every name in the left subtree compares less
//! than the node's name and every name in the right subtree compares greater.
//! Names are unique.

use std::cmp::Ordering;

use crate::catalog::Category;

type Link = Option<Box<Node>>;

#[derive(Debug, Clone)]
struct Node {
    category: Category,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(category: Category) -> Self {
        Self {
            category,
            left: None,
            right: None,
        }
    }
}

/// Outcome of inserting a category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new, empty category was created.
    Inserted,
    /// The name was already present; the index is unchanged.
    AlreadyExists,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// Name-ordered index of categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    root: Link,
    len: usize,
}

impl CategoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index holds no categories.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a category if its name is absent.
    pub fn insert(&mut self, name: impl Into<String>) -> InsertOutcome {
        let mut outcome = InsertOutcome::AlreadyExists;
        self.root = Self::insert_node(self.root.take(), name.into(), &mut outcome);
        if outcome.is_inserted() {
            self.len += 1;
        }
        outcome
    }

    /// Remove a category and every product it owns.
    ///
    /// Returns the removed category, or `None` if the name was absent, in
    /// which case the index is unchanged.
    pub fn remove(&mut self, name: &str) -> Option<Category> {
        let mut removed = None;
        self.root = Self::remove_node(self.root.take(), name, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Find a category by name. O(depth).
    pub fn find(&self, name: &str) -> Option<&Category> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match name.cmp(node.category.name.as_str()) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => return Some(&node.category),
            }
        }
        None
    }

    /// Find a category by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Category> {
        let mut link = self.root.as_deref_mut();
        while let Some(node) = link {
            match name.cmp(node.category.name.as_str()) {
                Ordering::Less => link = node.left.as_deref_mut(),
                Ordering::Greater => link = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.category),
            }
        }
        None
    }

    /// Check if a category name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Iterate categories in ascending name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Category names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|c| c.name.as_str()).collect()
    }

    /// Height of the tree (0 when empty). Unbalanced, so this is linear in
    /// the worst case.
    pub fn depth(&self) -> usize {
        fn depth_of(link: &Link) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + depth_of(&node.left).max(depth_of(&node.right)),
            }
        }
        depth_of(&self.root)
    }

    fn insert_node(link: Link, name: String, outcome: &mut InsertOutcome) -> Link {
        match link {
            None => {
                *outcome = InsertOutcome::Inserted;
                Some(Box::new(Node::leaf(Category::new(name))))
            }
            Some(mut node) => {
                match name.as_str().cmp(node.category.name.as_str()) {
                    Ordering::Less => {
                        node.left = Self::insert_node(node.left.take(), name, outcome)
                    }
                    Ordering::Greater => {
                        node.right = Self::insert_node(node.right.take(), name, outcome)
                    }
                    Ordering::Equal => {}
                }
                Some(node)
            }
        }
    }

    fn remove_node(link: Link, name: &str, removed: &mut Option<Category>) -> Link {
        let mut node = link?;
        match name.cmp(node.category.name.as_str()) {
            Ordering::Less => {
                node.left = Self::remove_node(node.left.take(), name, removed);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_node(node.right.take(), name, removed);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => {
                    *removed = Some(node.category);
                    None
                }
                (Some(child), None) | (None, Some(child)) => {
                    *removed = Some(node.category);
                    Some(child)
                }
                (Some(left), Some(right)) => {
                    // The in-order successor takes this node's place.
                    let (rest, successor) = Self::take_leftmost(right);
                    *removed = Some(std::mem::replace(&mut node.category, successor));
                    node.left = Some(left);
                    node.right = rest;
                    Some(node)
                }
            },
        }
    }

    /// Unlink the leftmost node of a subtree, returning the remaining subtree
    /// and the detached category.
    fn take_leftmost(mut node: Box<Node>) -> (Link, Category) {
        match node.left.take() {
            None => {
                let Node {
                    category, right, ..
                } = *node;
                (right, category)
            }
            Some(left) => {
                let (rest, min) = Self::take_leftmost(left);
                node.left = rest;
                (Some(node), min)
            }
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = CategoryIndex::new();
        for name in iter {
            index.insert(name);
        }
        index
    }
}

impl<'a> IntoIterator for &'a CategoryIndex {
    type Item = &'a Category;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an index.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Category;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.category)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
