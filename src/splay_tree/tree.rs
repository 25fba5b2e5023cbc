use crate::arena::{Entry, TypedArena};
use crate::splay_tree::node::{Node, Side};
use std::cmp::Ordering;
use std::vec::Vec;

/// The shape of a single splay step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// The node was already the root and nothing was rotated.
    Root,
    /// The parent was the root; one rotation brought the node to the root.
    Zig,
    /// Node, parent and grandparent were in a straight line; two rotations in the same direction.
    ZigZig,
    /// Node, parent and grandparent formed a bend; two rotations in opposite directions.
    ZigZag,
}

#[derive(Clone)]
pub struct Tree {
    pub nodes: TypedArena<Node>,
    pub root: Option<Entry>,
    pub rotations: u64,
}

impl Tree {
    /// Allocates the keys `1..=n` as a chain of left children rooted at `n`.
    pub fn chain(n: usize) -> Self {
        let mut tree = Tree {
            nodes: TypedArena::with_capacity(n),
            root: None,
            rotations: 0,
        };
        let mut prev = None;
        for key in 1..=n {
            let curr = tree.nodes.allocate(Node::new(key));
            tree.set_left(curr, prev);
            prev = Some(curr);
        }
        if let Some(top) = prev {
            tree.set_root(top);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn key(&self, entry: Entry) -> usize {
        self.nodes[entry].key
    }

    /// Locates the node holding `key` by its offset in the arena. Only valid because the keys are
    /// exactly `1..=n` and key `k` was allocated `k - 1`-th.
    pub fn entry_for_key(&self, key: usize) -> Entry {
        assert!(
            1 <= key && key <= self.len(),
            "Expected key in range [1, {}], got {}.",
            self.len(),
            key,
        );
        self.nodes
            .entry_at(key - 1)
            .expect("Expected every key to have a node.")
    }

    /// Locates the node holding `key` by binary search from the root.
    pub fn search(&self, key: usize) -> Option<Entry> {
        let mut curr = self.root;
        while let Some(entry) = curr {
            let node = &self.nodes[entry];
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(entry),
            };
        }
        None
    }

    pub fn depth(&self, entry: Entry) -> usize {
        let mut depth = 0;
        let mut curr = entry;
        while let Some(parent) = self.nodes[curr].parent {
            depth += 1;
            curr = parent;
        }
        depth
    }

    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Entry, usize)> = self.root.into_iter().map(|root| (root, 1)).collect();
        while let Some((entry, level)) = stack.pop() {
            height = height.max(level);
            let node = &self.nodes[entry];
            stack.extend(node.left.into_iter().chain(node.right).map(|child| (child, level + 1)));
        }
        height
    }

    /// Returns the entries in symmetric order. Panics if more nodes are reachable than were
    /// allocated, which can only happen when the child relations contain a cycle.
    pub fn inorder(&self) -> Vec<Entry> {
        let mut ret = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(entry) = curr {
                stack.push(entry);
                assert!(
                    stack.len() + ret.len() <= self.len(),
                    "Expected child relations to be acyclic."
                );
                curr = self.nodes[entry].left;
            }
            let entry = match stack.pop() {
                Some(entry) => entry,
                None => break,
            };
            ret.push(entry);
            curr = self.nodes[entry].right;
        }
        ret
    }

    /// Panics on the first violated structural invariant.
    pub fn validate(&self) {
        if self.nodes.is_empty() {
            assert!(self.root.is_none(), "Expected empty tree to have no root.");
            return;
        }

        let root = self.root.expect("Expected non-empty tree to have a root.");
        let mut parentless = 0;
        for (entry, node) in self.nodes.iter() {
            assert_eq!(
                node.key,
                entry.index() + 1,
                "Expected key {} at offset {}.",
                entry.index() + 1,
                entry.index(),
            );
            for child in node.left.into_iter().chain(node.right) {
                assert_eq!(
                    self.nodes[child].parent,
                    Some(entry),
                    "Expected key {} to be the parent of key {}.",
                    node.key,
                    self.key(child),
                );
            }
            match node.parent {
                Some(parent) => {
                    self.side_of(parent, entry);
                },
                None => {
                    parentless += 1;
                    assert_eq!(entry, root, "Expected key {} to be the root.", node.key);
                },
            }
        }
        assert_eq!(parentless, 1, "Expected exactly one node without a parent.");

        let keys: Vec<usize> = self.inorder().into_iter().map(|entry| self.key(entry)).collect();
        assert_eq!(keys.len(), self.len(), "Expected every node to be reachable from the root.");
        for (index, key) in keys.iter().enumerate() {
            assert_eq!(*key, index + 1, "Expected inorder traversal to be 1..={}.", self.len());
        }
    }

    fn side_of(&self, parent: Entry, child: Entry) -> Side {
        self.nodes[parent].side_of(child).unwrap_or_else(|| {
            panic!(
                "Expected key {} to be a child of key {}.",
                self.key(child),
                self.key(parent),
            )
        })
    }

    fn set_root(&mut self, entry: Entry) {
        self.root = Some(entry);
        self.nodes[entry].parent = None;
    }

    fn set_left(&mut self, entry: Entry, left: Option<Entry>) {
        self.nodes[entry].left = left;
        if let Some(child) = left {
            self.nodes[child].parent = Some(entry);
        }
    }

    fn set_right(&mut self, entry: Entry, right: Option<Entry>) {
        self.nodes[entry].right = right;
        if let Some(child) = right {
            self.nodes[child].parent = Some(entry);
        }
    }

    fn replace_child(&mut self, parent: Entry, old_child: Entry, new_child: Entry) {
        match self.side_of(parent, old_child) {
            Side::Left => self.set_left(parent, Some(new_child)),
            Side::Right => self.set_right(parent, Some(new_child)),
        }
    }

    //         z                                        z
    //        /       right rotation about y           /
    //       y      ===========================>      x
    //      / \                                      / \
    //     x   C                                    A   y
    //    / \                                          / \
    //   A   B                                        B   C
    pub fn rotate_right(&mut self, y: Entry) {
        let x = self.nodes[y]
            .left
            .expect("Expected left child node to be `Some`.");
        let z = self.nodes[y].parent;
        let a = self.nodes[x].left;
        let b = self.nodes[x].right;
        let c = self.nodes[y].right;

        match z {
            Some(z) => self.replace_child(z, y, x),
            None => self.set_root(x),
        }
        self.set_left(x, a);
        self.set_right(x, Some(y));
        self.set_left(y, b);
        self.set_right(y, c);
        self.rotations += 1;
    }

    //         z                                        z
    //        /                                        /
    //       y                                        x
    //      / \                                      / \
    //     x   C       left rotation about x        A   y
    //    / \       <===========================       / \
    //   A   B                                        B   C
    pub fn rotate_left(&mut self, x: Entry) {
        let y = self.nodes[x]
            .right
            .expect("Expected right child node to be `Some`.");
        let z = self.nodes[x].parent;
        let a = self.nodes[x].left;
        let b = self.nodes[y].left;
        let c = self.nodes[y].right;

        match z {
            Some(z) => self.replace_child(z, x, y),
            None => self.set_root(y),
        }
        self.set_right(y, c);
        self.set_left(y, Some(x));
        self.set_right(x, b);
        self.set_left(x, a);
        self.rotations += 1;
    }

    pub fn splay_step(&mut self, x: Entry) -> Step {
        let y = match self.nodes[x].parent {
            Some(y) => y,
            None => return Step::Root,
        };
        let x_side = self.side_of(y, x);

        let z = match self.nodes[y].parent {
            Some(z) => z,
            None => {
                match x_side {
                    Side::Left => self.rotate_right(y),
                    Side::Right => self.rotate_left(y),
                }
                trace!("zig on key {}", self.key(x));
                return Step::Zig;
            },
        };

        let step = match (self.side_of(z, y), x_side) {
            (Side::Left, Side::Left) => {
                self.rotate_right(z);
                self.rotate_right(y);
                Step::ZigZig
            },
            (Side::Right, Side::Right) => {
                self.rotate_left(z);
                self.rotate_left(y);
                Step::ZigZig
            },
            (Side::Left, Side::Right) => {
                self.rotate_left(y);
                self.rotate_right(z);
                Step::ZigZag
            },
            (Side::Right, Side::Left) => {
                self.rotate_right(y);
                self.rotate_left(z);
                Step::ZigZag
            },
        };
        trace!("{:?} on key {}", step, self.key(x));
        step
    }

    pub fn splay(&mut self, x: Entry) {
        let mut steps = 0;
        while self.root != Some(x) {
            let step = self.splay_step(x);
            assert_ne!(
                step,
                Step::Root,
                "Expected key {} without a parent to be the root.",
                self.key(x),
            );
            steps += 1;
        }
        debug!("splayed key {} to the root in {} steps", self.key(x), steps);
    }
}
