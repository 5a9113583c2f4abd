use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Map from each node discovered during a search run to the best path
/// found for it.
pub type PathMap<T> = HashMap<T, Rc<Path<T>>>;

/// Result object for the path search algorithms.
///
/// Paths form a singly-linked predecessor chain back to a source node, and
/// many paths may share a common prefix, so each link is reference counted.
/// The full node sequence is reconstructed on demand by [Path::nodes] and
/// cached.
#[derive(Debug)]
pub struct Path<T> {
    end_node: T,
    dist: i64,
    prev: Option<Rc<Path<T>>>,
    nodes: RefCell<Option<Rc<Vec<T>>>>,
}

impl<T> Path<T> {
    /// A zero-length path starting (and ending) at a source node.
    pub(crate) fn source(node: T) -> Self {
        Path {
            end_node: node,
            dist: 0,
            prev: None,
            nodes: RefCell::new(None),
        }
    }

    /// Extends `prev` by one edge to `end_node`, at cumulative distance
    /// `dist`.
    pub(crate) fn step(prev: &Rc<Path<T>>, end_node: T, dist: i64) -> Self {
        Path {
            end_node,
            dist,
            prev: Some(prev.clone()),
            nodes: RefCell::new(None),
        }
    }

    /// The end node of the path.
    pub fn end_node(&self) -> &T {
        &self.end_node
    }

    /// Distance of the end node from the source node along the path: the
    /// sum of the edge weights, or simply the number of edges for
    /// unweighted searches.
    pub fn dist(&self) -> i64 {
        self.dist
    }
}

impl<T> Path<T>
where
    T: Clone,
{
    /// The nodes along the path. The first element is the source node, the
    /// last is the end node.
    ///
    /// The sequence is built by walking the predecessor chain the first
    /// time it is requested and cached on this path afterwards.
    pub fn nodes(&self) -> Rc<Vec<T>> {
        if let Some(list) = self.nodes.borrow().as_ref() {
            return list.clone();
        }

        let mut list = Vec::new();
        let mut current = self;
        loop {
            list.push(current.end_node.clone());
            match &current.prev {
                Some(prev) => current = prev,
                None => break,
            }
        }
        list.reverse();

        let list = Rc::new(list);
        *self.nodes.borrow_mut() = Some(list.clone());
        list
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn source_path() {
        let path = Path::source("A");
        assert_eq!(path.end_node(), &"A");
        assert_eq!(path.dist(), 0);
        assert_eq!(*path.nodes(), vec!["A"]);
    }

    #[test]
    fn chained_path() {
        let a = Rc::new(Path::source("A"));
        let b = Rc::new(Path::step(&a, "B", 3));
        let c = Path::step(&b, "C", 7);

        assert_eq!(c.end_node(), &"C");
        assert_eq!(c.dist(), 7);
        assert_eq!(*c.nodes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn nodes_is_idempotent() {
        let a = Rc::new(Path::source(1));
        let b = Path::step(&a, 2, 1);

        let first = b.nodes();
        let second = b.nodes();

        assert_eq!(first, second);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn shared_prefix() {
        let a = Rc::new(Path::source(0));
        let b = Rc::new(Path::step(&a, 1, 1));
        let c = Path::step(&b, 2, 2);
        let d = Path::step(&b, 3, 2);

        assert_eq!(*c.nodes(), vec![0, 1, 2]);
        assert_eq!(*d.nodes(), vec![0, 1, 3]);
    }
}
