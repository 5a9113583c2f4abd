//! Graph datastructures shared by the search algorithms.

mod edge;
mod path;

pub use edge::Edge;
pub use path::Path;
pub use path::PathMap;
