//! Internal items used by the derive macro.
//!
//! These are not meant to be used directly by users of the library.
pub use crate::node::{Node, Record};
pub use crate::tree::{Tree, join};
