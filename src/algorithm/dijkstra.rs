//! Dijkstra's algorithm for finding shortest paths.
//!
//! The input is a directed or undirected graph with `i64` edge weights,
//! implicitly defined by an edge provider closure, and one or more source
//! nodes. The frontier is a priority queue ordered by cumulative distance,
//! so a path popped for a target node is already a shortest path and the
//! search can stop there.
//!
//! Edge weights must be non-negative; this is not validated, and negative
//! weights silently produce incorrect distances. Use
//! [bellman_ford](crate::bellman_ford) when negative weights are needed.
//!
//! The queue uses lazy deletion: a node may be pushed several times while
//! improving paths to it are found, and stale popped entries are harmless
//! since their edges can no longer improve any stored distance.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::iter;
use std::rc::Rc;

use log::debug;

use crate::errors::{Result, SearchError};
use crate::graph::{Edge, Path, PathMap};

/// Wrapper ordering paths by distance, smallest first, so that a
/// [BinaryHeap] of them behaves as a min-priority queue.
#[derive(Debug)]
struct MinDist<T>(Rc<Path<T>>);

impl<T> PartialEq for MinDist<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.dist().eq(&other.0.dist())
    }
}

impl<T> Eq for MinDist<T> {}

impl<T> Ord for MinDist<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.dist().cmp(&other.0.dist()).reverse()
    }
}

impl<T> PartialOrd for MinDist<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Calculates the distance along a shortest path from the source node to
/// the nearest node satisfying the target predicate.
///
/// Fails with [SearchError::NoPathFound] when no target node is reachable.
pub fn dist<T, I, F, P>(source: T, edges: F, is_target: P) -> Result<i64>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    find_path(source, edges, is_target)
        .map(|path| path.dist())
        .ok_or(SearchError::NoPathFound)
}

/// Finds a shortest path from the source node to a node satisfying the
/// target predicate, or `None` when no target node is reachable.
pub fn find_path<T, I, F, P>(source: T, edges: F, is_target: P) -> Option<Rc<Path<T>>>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    find_path_from_any(iter::once(source), edges, is_target)
}

/// Finds a shortest path from any of the source nodes to a node satisfying
/// the target predicate.
///
/// The predicate may accept multiple nodes, in which case a shortest path
/// to one of the nearest target nodes is found.
pub fn find_path_from_any<T, S, I, F, P>(sources: S, edges: F, is_target: P) -> Option<Rc<Path<T>>>
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    search(sources, edges, is_target).1
}

/// Finds shortest paths to all nodes reachable from the source node.
pub fn run<T, I, F>(source: T, edges: F) -> PathMap<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
{
    run_from_any(iter::once(source), edges)
}

/// Finds shortest paths to all nodes reachable from any of the source
/// nodes. Unreachable nodes are absent from the map.
pub fn run_from_any<T, S, I, F>(sources: S, edges: F) -> PathMap<T>
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
{
    search(sources, edges, |_| false).0
}

fn search<T, S, I, F, P>(sources: S, mut edges: F, mut is_target: P) -> (PathMap<T>, Option<Rc<Path<T>>>)
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    let mut results = PathMap::new();
    let mut queue = BinaryHeap::new();

    for source in sources {
        let path = Rc::new(Path::source(source.clone()));
        results.insert(source, path.clone());
        queue.push(MinDist(path));
    }

    while let Some(MinDist(path)) = queue.pop() {
        if is_target(path.end_node()) {
            debug!(
                "dijkstra: target settled at dist {} after discovering {} nodes",
                path.dist(),
                results.len()
            );
            return (results, Some(path));
        }

        for edge in edges(path.end_node()) {
            let (neighbor, weight) = edge.into_parts();
            let dist = path.dist() + weight;
            let improved = match results.get(&neighbor) {
                Some(current) => dist < current.dist(),
                None => true,
            };
            if improved {
                let next = Rc::new(Path::step(&path, neighbor.clone(), dist));
                results.insert(neighbor, next.clone());
                queue.push(MinDist(next));
            }
        }
    }

    debug!(
        "dijkstra: frontier exhausted after discovering {} nodes",
        results.len()
    );
    (results, None)
}
