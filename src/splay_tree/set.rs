use crate::arena::Entry;
use crate::splay_tree::tree::{Step, Tree};
use std::fmt;
use std::vec::Vec;

/// A fixed-size set of the keys `1..=n` stored in a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed keys are quick to access again. Accessing a key "splays" it to the root of the tree
/// through a sequence of zig, zig-zig and zig-zag steps, which gives amortized logarithmic access
/// without storing any balance information.
///
/// The set is created as a degenerate chain rooted at `n`, and its keys can never be inserted or
/// removed afterwards. All nodes live in a single arena owned by the set and are released together
/// when the set is dropped.
///
/// Misuse, such as accessing a key outside of `1..=n`, is a programming error and panics.
///
/// # Examples
///
/// ```
/// use fixed_splay::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new(10);
/// assert_eq!(set.root(), Some(10));
///
/// set.splay(1);
/// assert_eq!(set.root(), Some(1));
///
/// set.splay(4);
/// assert_eq!(set.root(), Some(4));
/// assert_eq!(set.inorder(), (1..=10).collect::<Vec<usize>>());
/// ```
#[derive(Clone)]
pub struct SplaySet {
    tree: Tree,
}

impl SplaySet {
    /// Constructs a new `SplaySet` holding the keys `1..=n`, arranged so that `n` is the root and
    /// every key `k > 1` has `k - 1` as its only child. A size of zero yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::splay_tree::SplaySet;
    ///
    /// let set = SplaySet::new(3);
    /// assert_eq!(set.root(), Some(3));
    /// assert_eq!(set.depth(1), Some(2));
    ///
    /// let empty = SplaySet::new(0);
    /// assert_eq!(empty.root(), None);
    /// ```
    pub fn new(n: usize) -> Self {
        SplaySet {
            tree: Tree::chain(n),
        }
    }

    /// Splays the node holding `key` to the root of the tree.
    ///
    /// The node is located by its offset in the underlying arena rather than by searching the
    /// tree. This is only possible because the keys are exactly `1..=n`; see `splay_by_search`
    /// for the lookup that does not rely on this.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not in `1..=n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new(10);
    /// set.splay(7);
    /// assert_eq!(set.root(), Some(7));
    /// ```
    pub fn splay(&mut self, key: usize) {
        let entry = self.tree.entry_for_key(key);
        self.tree.splay(entry);
    }

    /// Searches for `key` from the root and splays its node to the root if it exists. Returns
    /// whether the key was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new(10);
    /// assert!(set.splay_by_search(3));
    /// assert_eq!(set.root(), Some(3));
    ///
    /// assert!(!set.splay_by_search(11));
    /// assert_eq!(set.root(), Some(3));
    /// ```
    pub fn splay_by_search(&mut self, key: usize) -> bool {
        match self.tree.search(key) {
            Some(entry) => {
                self.tree.splay(entry);
                true
            },
            None => false,
        }
    }

    /// Performs a single splay step on the node holding `key` and returns the shape of the step.
    /// A node that is not the root moves one or two levels closer to it.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not in `1..=n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::splay_tree::{SplaySet, Step};
    ///
    /// let mut set = SplaySet::new(3);
    /// assert_eq!(set.step(1), Step::ZigZig);
    /// assert_eq!(set.step(1), Step::Root);
    /// ```
    pub fn step(&mut self, key: usize) -> Step {
        let entry = self.tree.entry_for_key(key);
        self.tree.splay_step(entry)
    }

    /// Returns the key at the root of the tree, or `None` if the set is empty.
    pub fn root(&self) -> Option<usize> {
        self.tree.root.map(|entry| self.tree.key(entry))
    }

    /// Checks if a key exists in the set. Note that `contains` does not splay the tree in order
    /// to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::splay_tree::SplaySet;
    ///
    /// let set = SplaySet::new(2);
    /// assert!(set.contains(2));
    /// assert!(!set.contains(0));
    /// ```
    pub fn contains(&self, key: usize) -> bool {
        self.tree.search(key).is_some()
    }

    /// Returns the number of parent links between `key` and the root, or `None` if the key does
    /// not exist in the set. Does not splay the tree.
    pub fn depth(&self, key: usize) -> Option<usize> {
        self.tree.search(key).map(|entry| self.tree.depth(entry))
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new(7);
    /// assert_eq!(set.height(), 7);
    /// set.splay(1);
    /// assert_eq!(set.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the keys of the set in sorted order by walking the tree.
    pub fn inorder(&self) -> Vec<usize> {
        self.tree
            .inorder()
            .into_iter()
            .map(|entry| self.tree.key(entry))
            .collect()
    }

    /// Returns the total number of rotations performed since the set was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_splay::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new(10);
    /// set.splay(1);
    /// assert_eq!(set.rotations(), 9);
    /// ```
    pub fn rotations(&self) -> u64 {
        self.tree.rotations
    }

    /// Asserts that the tree is well-formed: the inorder traversal is `1..=n`, the root is the
    /// only node without a parent, and every parent and child relation points back at the other.
    ///
    /// # Panics
    ///
    /// Panics on the first violated invariant.
    pub fn check_invariants(&self) {
        self.tree.validate();
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Links {
    key: usize,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

impl fmt::Debug for SplaySet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let key_of = |relation: Option<Entry>| relation.map(|entry| self.tree.key(entry));
        let nodes: Vec<Links> = self
            .tree
            .nodes
            .iter()
            .map(|(_, node)| Links {
                key: node.key,
                parent: key_of(node.parent),
                left: key_of(node.left),
                right: key_of(node.right),
            })
            .collect();
        f.debug_struct("SplaySet")
            .field("root", &self.root())
            .field("nodes", &nodes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SplaySet;
    use crate::splay_tree::tree::Step;

    #[test]
    fn test_len_empty() {
        let set = SplaySet::new(0);
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.root(), None);
        assert_eq!(set.height(), 0);
        assert!(set.inorder().is_empty());
        set.check_invariants();
    }

    #[test]
    #[should_panic]
    fn test_splay_empty() {
        let mut set = SplaySet::new(0);
        set.splay(1);
    }

    #[test]
    fn test_single() {
        let mut set = SplaySet::new(1);
        assert_eq!(set.root(), Some(1));
        set.splay(1);
        assert_eq!(set.root(), Some(1));
        assert_eq!(set.rotations(), 0);
        assert_eq!(set.step(1), Step::Root);
        set.check_invariants();
    }

    #[test]
    fn test_new() {
        let set = SplaySet::new(10);
        assert_eq!(set.len(), 10);
        assert_eq!(set.root(), Some(10));
        assert_eq!(set.inorder(), (1..=10).collect::<Vec<usize>>());
        for key in 1..=10 {
            assert_eq!(set.depth(key), Some(10 - key));
        }
        set.check_invariants();
    }

    #[test]
    fn test_splay_sequence() {
        let mut set = SplaySet::new(10);
        for &key in &[1, 10, 4, 7] {
            set.splay(key);
            assert_eq!(set.root(), Some(key));
            assert_eq!(set.inorder(), (1..=10).collect::<Vec<usize>>());
            set.check_invariants();
        }
    }

    #[test]
    fn test_splay_every_key() {
        let mut set = SplaySet::new(10);
        for key in 1..=10 {
            set.splay(key);
            assert_eq!(set.root(), Some(key));
            set.check_invariants();
        }
    }

    #[test]
    fn test_splay_root_is_noop() {
        let mut set = SplaySet::new(5);
        set.splay(5);
        assert_eq!(set.rotations(), 0);
        assert_eq!(set.depth(1), Some(4));
    }

    #[test]
    #[should_panic]
    fn test_splay_zero() {
        let mut set = SplaySet::new(10);
        set.splay(0);
    }

    #[test]
    #[should_panic]
    fn test_splay_past_end() {
        let mut set = SplaySet::new(10);
        set.splay(11);
    }

    #[test]
    #[should_panic]
    fn test_step_out_of_range() {
        let mut set = SplaySet::new(10);
        set.step(11);
    }

    #[test]
    fn test_splay_by_search() {
        let mut set = SplaySet::new(10);
        assert!(set.splay_by_search(1));
        assert_eq!(set.root(), Some(1));
        assert!(set.splay_by_search(6));
        assert_eq!(set.root(), Some(6));
        assert!(!set.splay_by_search(0));
        assert!(!set.splay_by_search(11));
        assert_eq!(set.root(), Some(6));
        set.check_invariants();
    }

    #[test]
    fn test_splay_by_search_matches_splay() {
        let mut by_offset = SplaySet::new(32);
        let mut by_search = SplaySet::new(32);
        for &key in &[3, 29, 17, 1, 32, 16, 8, 24] {
            by_offset.splay(key);
            assert!(by_search.splay_by_search(key));
            assert_eq!(format!("{:?}", by_offset), format!("{:?}", by_search));
        }
    }

    #[test]
    fn test_contains() {
        let set = SplaySet::new(3);
        assert!(!set.contains(0));
        assert!(set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert_eq!(set.depth(4), None);
    }

    #[test]
    fn test_splay_chain_bottom() {
        let mut set = SplaySet::new(8);
        set.splay(1);
        assert_eq!(set.rotations(), 7);
        assert_eq!(set.height(), 6);
    }

    #[test]
    fn test_step() {
        let mut set = SplaySet::new(4);
        assert_eq!(set.step(1), Step::ZigZig);
        assert_eq!(set.depth(1), Some(1));
        assert_eq!(set.step(1), Step::Zig);
        assert_eq!(set.root(), Some(1));
        assert_eq!(set.step(1), Step::Root);
        set.check_invariants();
    }

    #[test]
    fn test_clone_is_independent() {
        let mut set = SplaySet::new(5);
        let copy = set.clone();
        set.splay(1);
        assert_eq!(set.root(), Some(1));
        assert_eq!(copy.root(), Some(5));
        copy.check_invariants();
    }

    #[test]
    fn test_debug() {
        let set = SplaySet::new(2);
        assert_eq!(
            format!("{:?}", set),
            "SplaySet { root: Some(2), nodes: [\
             Links { key: 1, parent: Some(2), left: None, right: None }, \
             Links { key: 2, parent: None, left: Some(1), right: None }] }",
        );
    }
}
