//! Search algorithms over implicitly defined graphs.
//!
//! All three algorithms share the same calling convention: one or more
//! source nodes, a provider closure generating neighbors or outgoing edges
//! on demand, and (for the single-target forms) a target predicate. The
//! provider is expected to be a pure function of its input node; [bfs] and
//! [dijkstra] call it at most once per expanded node.

pub mod bellman_ford;
pub mod bfs;
pub mod dijkstra;
