//! Shortest-path search over implicitly defined graphs.
//!
//! None of the algorithms here require the graph to be materialized in
//! advance. Each one takes one or more source nodes and a provider closure
//! which generates the neighbors (or weighted edges) of a node when the
//! search advances from it. Nodes and edges might represent feasible states
//! and steps of a combinatorial problem whose full state space is too large
//! to enumerate, or even infinite.
//!
//! A target predicate selects the destination; [bfs] and [dijkstra] stop as
//! soon as a shortest path to a target node is proven, so they are safe to
//! run over infinite graphs as long as some target is reachable.
//!
//! ```
//! use pathfinder::bfs;
//!
//! let path = bfs::find_path(0u64, |&n| vec![n + 1, 2 * n], |&n| n == 128).unwrap();
//! assert_eq!(path.dist(), 8);
//! assert_eq!(*path.nodes(), vec![0, 1, 2, 4, 8, 16, 32, 64, 128]);
//! ```

pub mod algorithm;
mod errors;
pub mod graph;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use graph::Edge;
pub use graph::Path;
pub use graph::PathMap;

pub use algorithm::bellman_ford;
pub use algorithm::bfs;
pub use algorithm::dijkstra;
