/// An outgoing directed edge of a node being expanded by a search algorithm.
///
/// Edge providers hand these to [dijkstra](crate::dijkstra) and
/// [bellman_ford](crate::bellman_ford) to describe the transitions leaving
/// the node under expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    end_node: T,
    weight: i64,
}

impl<T> Edge<T> {
    pub fn new(end_node: T, weight: i64) -> Self {
        Edge { end_node, weight }
    }

    /// The node this edge leads to.
    pub fn end_node(&self) -> &T {
        &self.end_node
    }

    /// The weight of this edge.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub(crate) fn into_parts(self) -> (T, i64) {
        (self.end_node, self.weight)
    }
}

impl<T> From<(T, i64)> for Edge<T> {
    fn from((end_node, weight): (T, i64)) -> Self {
        Edge::new(end_node, weight)
    }
}
