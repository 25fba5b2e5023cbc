//! Self-adjusting binary search tree over a fixed, dense key set. Every access rotates the
//! accessed node to the root, so recently accessed keys are quick to access again.

mod node;
mod set;
mod tree;

pub use self::set::SplaySet;
pub use self::tree::Step;
