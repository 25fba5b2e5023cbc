#[macro_use]
extern crate log;

pub mod arena;
pub mod splay_tree;
