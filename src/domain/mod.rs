//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod node;
pub mod path;
pub mod tree;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use node::Node;
pub use path::{join_components, split_components};
pub use tree::{PathIter, PathTree, ROOT_NAME};
