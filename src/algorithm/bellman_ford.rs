//! Queue-based Bellman-Ford relaxation, also known as the SPFA algorithm.
//!
//! Significantly slower than [dijkstra](crate::dijkstra), but it also
//! supports negative edge weights. The graph must not contain a reachable
//! directed cycle with negative total weight; this is not detected, and the
//! search does not terminate for such input. The underlying graph must
//! always be finite, so unlike [bfs](crate::bfs) and
//! [dijkstra](crate::dijkstra) this algorithm is not suited to on-the-fly
//! infinite graphs.
//!
//! The edge provider may be applied multiple times to a single node, as
//! nodes are re-enqueued whenever a shorter path to them is found.

use std::collections::VecDeque;
use std::hash::Hash;
use std::iter;
use std::rc::Rc;

use log::debug;

use crate::graph::{Edge, Path, PathMap};

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
/// With negative weights a node reached early is not necessarily final, so
/// there is no early termination: the complete result map is computed
/// first, then scanned for the minimum-distance path to a target node.
pub fn find_path_from_any<T, S, I, F, P>(sources: S, edges: F, mut is_target: P) -> Option<Rc<Path<T>>>
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
    P: FnMut(&T) -> bool,
{
    run_from_any(sources, edges)
        .into_iter()
        .map(|(_, path)| path)
        .filter(|path| is_target(path.end_node()))
        .min_by_key(|path| path.dist())
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
/// nodes, relaxing edges until a fixed point is reached. Unreachable nodes
/// are absent from the map.
pub fn run_from_any<T, S, I, F>(sources: S, mut edges: F) -> PathMap<T>
where
    T: Clone + Eq + Hash,
    S: IntoIterator<Item = T>,
    I: IntoIterator<Item = Edge<T>>,
    F: FnMut(&T) -> I,
{
    let mut results = PathMap::new();
    let mut queue = VecDeque::new();
    let mut relaxations = 0usize;

    for source in sources {
        let path = Rc::new(Path::source(source.clone()));
        results.insert(source, path.clone());
        queue.push_back(path);
    }

    while let Some(path) = queue.pop_front() {
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
                queue.push_back(next);
                relaxations += 1;
            }
        }
    }

    debug!(
        "bellman-ford: fixed point after {} relaxations over {} nodes",
        relaxations,
        results.len()
    );
    results
}

#[cfg(test)]
mod test {
    use super::*;

    use std::collections::HashMap;

    fn negative_graph() -> HashMap<&'static str, Vec<Edge<&'static str>>> {
        let mut g = HashMap::new();
        g.insert("A", vec![Edge::new("B", 1), Edge::new("C", 1), Edge::new("D", 1)]);
        g.insert("B", vec![Edge::new("E", 2)]);
        g.insert("C", vec![Edge::new("E", -3)]);
        g.insert("D", vec![Edge::new("G", 4)]);
        g.insert("E", vec![Edge::new("D", 5), Edge::new("F", 5), Edge::new("G", 5)]);
        g.insert("F", vec![Edge::new("B", -6), Edge::new("G", -6)]);
        g
    }

    #[test]
    fn negative_weights() {
        let g = negative_graph();
        let map = run("A", |n| g.get(n).cloned().unwrap_or_default());

        assert_eq!(map["A"].dist(), 0);
        assert_eq!(map["B"].dist(), -3);
        assert_eq!(map["C"].dist(), 1);
        assert_eq!(map["E"].dist(), -2);
        assert_eq!(map["F"].dist(), 3);
        assert_eq!(map["G"].dist(), -3);

        assert_eq!(*map["G"].nodes(), vec!["A", "C", "E", "F", "G"]);
    }

    #[test]
    fn find_path_with_negative_weights() {
        let g = negative_graph();
        let result = find_path("A", |n| g.get(n).cloned().unwrap_or_default(), |n| *n == "G");

        let result = result.unwrap();
        assert_eq!(result.dist(), -3);
        assert_eq!(*result.nodes(), vec!["A", "C", "E", "F", "G"]);
    }

    #[test]
    fn path_reconstruction() {
        let mut g = HashMap::new();
        g.insert("A", vec![Edge::new("B", 10), Edge::new("D", 5)]);
        g.insert("B", vec![Edge::new("C", 1)]);
        g.insert("C", vec![Edge::new("E", 1)]);
        g.insert(
            "D",
            vec![Edge::new("B", 3), Edge::new("C", 9), Edge::new("E", 11)],
        );

        let result = find_path("A", |n| g.get(n).cloned().unwrap_or_default(), |n| *n == "E");

        let result = result.unwrap();
        assert_eq!(result.dist(), 10);
        assert_eq!(*result.nodes(), vec!["A", "D", "B", "C", "E"]);
    }

    #[test]
    fn source_is_target() {
        let g = negative_graph();
        let result = find_path("A", |n| g.get(n).cloned().unwrap_or_default(), |n| *n == "A");

        assert_eq!(result.unwrap().dist(), 0);
    }

    #[test]
    fn multiple_sources() {
        let result = find_path_from_any(
            vec![82i64, 84, 90],
            |&i: &i64| {
                if i > 42 {
                    vec![Edge::new(i - 3, 1), Edge::new(i - 7, 2)]
                } else {
                    Vec::new()
                }
            },
            |&i| i == 42,
        );

        assert_eq!(result.unwrap().dist(), 12);
    }

    #[test]
    fn unreachable_target() {
        let g = negative_graph();
        let result = find_path("B", |n| g.get(n).cloned().unwrap_or_default(), |n| *n == "C");

        assert!(result.is_none());
    }
}
