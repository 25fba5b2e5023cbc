use crate::arena::Entry;

/// Which child relation links a node to its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub key: usize,
    pub parent: Option<Entry>,
    pub left: Option<Entry>,
    pub right: Option<Entry>,
}

impl Node {
    pub fn new(key: usize) -> Self {
        Node {
            key,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// Returns the side on which `child` hangs off this node, or `None` if it is neither child.
    pub fn side_of(&self, child: Entry) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
