//! Breadth-first search.
//!
//! The input is a directed or undirected graph, implicitly defined by a
//! neighbor provider closure, and one or more source nodes. Every edge
//! counts as one unit of distance, so the first path to reach a node is a
//! shortest path to it and nodes are never revisited. The provider is
//! called at most once for each node, when the search advances from it.

use std::collections::VecDeque;
use std::hash::Hash;
use std::iter;
use std::rc::Rc;

use log::debug;

use crate::errors::{Result, SearchError};
use crate::graph::{Path, PathMap};

/// Calculates the distance (in number of edges) along a shortest path from
/// the source node to the nearest node satisfying the target predicate.
///
/// Fails with [SearchError::NoPathFound] when no target node is reachable.
pub fn dist<T, I, F, P>(source: T, neighbors: F, is_target: P) -> Result<i64>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    find_path(source, neighbors, is_target)
        .map(|path| path.dist())
        .ok_or(SearchError::NoPathFound)
}

/// Finds a shortest path (in number of edges) from the source node to a
/// node satisfying the target predicate, or `None` when no target node is
/// reachable.
pub fn find_path<T, I, F, P>(source: T, neighbors: F, is_target: P) -> Option<Rc<Path<T>>>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    find_path_from_any(iter::once(source), neighbors, is_target)
}

/// Finds a shortest path (in number of edges) from any of the source nodes
/// to a node satisfying the target predicate.
///
/// The predicate may accept multiple nodes, in which case a shortest path
/// to one of the nearest target nodes is found. A source node satisfying
/// the predicate is returned at distance zero without any expansion.
pub fn find_path_from_any<T, S, I, F, P>(sources: S, neighbors: F, is_target: P) -> Option<Rc<Path<T>>>
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    search(sources, neighbors, is_target).1
}

/// Finds shortest paths (in number of edges) to all nodes reachable from
/// the source node.
pub fn run<T, I, F>(source: T, neighbors: F) -> PathMap<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
{
    run_from_any(iter::once(source), neighbors)
}

/// Finds shortest paths (in number of edges) to all nodes reachable from
/// any of the source nodes. Unreachable nodes are absent from the map.
pub fn run_from_any<T, S, I, F>(sources: S, neighbors: F) -> PathMap<T>
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
{
    search(sources, neighbors, |_| false).0
}

fn search<T, S, I, F, P>(sources: S, mut neighbors: F, mut is_target: P) -> (PathMap<T>, Option<Rc<Path<T>>>)
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    let mut results = PathMap::new();
    let mut queue = VecDeque::new();

    for source in sources {
        let path = Rc::new(Path::source(source.clone()));
        results.insert(source, path.clone());
        queue.push_back(path);
    }

    while let Some(path) = queue.pop_front() {
        if is_target(path.end_node()) {
            debug!(
                "bfs: target found at dist {} after discovering {} nodes",
                path.dist(),
                results.len()
            );
            return (results, Some(path));
        }

        for neighbor in neighbors(path.end_node()) {
            if !results.contains_key(&neighbor) {
                let next = Rc::new(Path::step(&path, neighbor.clone(), path.dist() + 1));
                results.insert(neighbor, next.clone());
                queue.push_back(next);
            }
        }
    }

    debug!(
        "bfs: frontier exhausted after discovering {} nodes",
        results.len()
    );
    (results, None)
}
