use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Ordering used by an [`OrderedTree`] to place its records.
///
/// Implementations compare two records by the field the tree is keyed on; the tree
/// never looks at anything else.
pub trait KeyOrder<T> {
    /// Compares `a` with `b` by key.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// [`KeyOrder`] built from a key projection such as `|t: &Tourist| t.passport_code`.
pub struct ByKey<F, K> {
    project: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new(project: F) -> Self {
        Self {
            project,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> KeyOrder<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.project)(a).cmp(&(self.project)(b))
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByKey")
    }
}

/// Unbalanced binary search tree keyed by a caller-selected ordering.
///
/// Records with a key less than or equal to a node's key go to its left subtree,
/// greater keys go right. Nodes are never moved once linked, so the shape of the
/// tree depends only on insertion order. Duplicate keys are kept.
///
/// All walks use an explicit stack: a degenerate (sorted-input) tree is as deep as it
/// is long, and neither traversal nor teardown recurses.
pub struct OrderedTree<T, O> {
    root: Option<Box<Node<T>>>,
    len: usize,
    order: O,
}

impl<T, O: KeyOrder<T>> OrderedTree<T, O> {
    /// Creates an empty tree ordered by `order`.
    pub fn new(order: O) -> Self {
        Self {
            root: None,
            len: 0,
            order,
        }
    }

    /// Inserts `record` below the last node whose key it does not exceed.
    pub fn insert(&mut self, record: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match self.order.compare(&record, &node.value) {
                Ordering::Greater => &mut node.right,
                Ordering::Less | Ordering::Equal => &mut node.left,
            };
        }
        *slot = Some(Box::new(Node::new(record)));
        self.len += 1;
    }
}

impl<T, K, F> OrderedTree<T, ByKey<F, K>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Creates an empty tree ordered by the key `project` extracts.
    pub fn by_key(project: F) -> Self {
        Self::new(ByKey::new(project))
    }
}

impl<T, O> OrderedTree<T, O> {
    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the ordering the tree was built with.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of levels, `0` for an empty tree.
    pub fn height(&self) -> usize {
        self.traverse()
            .map(|(depth, _)| depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterates `(depth, record)` pairs from the largest key to the smallest.
    ///
    /// The root has depth `0`; both children of a node share its depth plus one.
    /// Printing each record indented by its depth draws the tree on its side with
    /// larger keys above smaller ones.
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse::new(self.root.as_deref())
    }

    /// Iterates records in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Returns the mean of `field` over every record, or `0.0` for an empty tree.
    pub fn average<F>(&self, field: F) -> f64
    where
        F: Fn(&T) -> f64,
    {
        let (sum, count) = self
            .iter()
            .fold((0.0, 0usize), |(sum, count), record| {
                (sum + field(record), count + 1)
            });
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    /// Moves every record out in pre-order (node, left, right) and empties the tree.
    ///
    /// Each node is freed as soon as its record has been taken, so no partially
    /// drained tree is ever observable.
    pub fn drain_and_clear(&mut self) -> Vec<T> {
        let mut records = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(node) = stack.pop() {
            let Node { value, left, right } = *node;
            records.push(value);
            stack.extend(right);
            stack.extend(left);
        }
        self.len = 0;
        records
    }

    /// Releases every node without yielding the records.
    pub fn clear(&mut self) {
        teardown(self.root.take());
        self.len = 0;
    }
}

impl<T, O: KeyOrder<T>> Extend<T> for OrderedTree<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, records: I) {
        for record in records {
            self.insert(record);
        }
    }
}

impl<T, O: KeyOrder<T> + Default> Default for OrderedTree<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O> Drop for OrderedTree<T, O> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

impl<T: fmt::Debug, O> fmt::Debug for OrderedTree<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len())
            .field("records", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T, O> IntoIterator for &'a OrderedTree<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Frees a subtree children-first without recursion.
fn teardown<T>(root: Option<Box<Node<T>>>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        // `node` has no children left; dropping it here cannot recurse.
    }
}

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Iterator returned by [`OrderedTree::traverse`].
pub struct Traverse<'a, T> {
    stack: Vec<(usize, &'a Node<T>)>,
}

impl<'a, T> Traverse<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut stack = Vec::new();
        Self::push_right(root, 0, &mut stack);
        Self { stack }
    }

    fn push_right(
        mut node: Option<&'a Node<T>>,
        mut depth: usize,
        stack: &mut Vec<(usize, &'a Node<T>)>,
    ) {
        while let Some(n) = node {
            stack.push((depth, n));
            node = n.right.as_deref();
            depth += 1;
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        Self::push_right(node.left.as_deref(), depth + 1, &mut self.stack);
        Some((depth, &node.value))
    }
}

/// Ascending iterator returned by [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut stack = Vec::new();
        Self::push_left(root, &mut stack);
        Self { stack }
    }

    fn push_left(mut node: Option<&'a Node<T>>, stack: &mut Vec<&'a Node<T>>) {
        while let Some(n) = node {
            stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        Self::push_left(node.right.as_deref(), &mut self.stack);
        Some(&node.value)
    }
}
