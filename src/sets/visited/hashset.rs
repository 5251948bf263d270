use hashbrown::HashSet;

use crate::{graph::VertexId, sets::visited::VisitorSet};

/// Hash-backed visited set. Memory grows with the number of visited vertices
/// rather than with the graph size, which suits searches that stop early on
/// large graphs.
///
/// ```
/// use pathbench::sets::visited::{VisitedHashSet, VisitorSet};
///
/// let mut visited = VisitedHashSet::new();
/// assert!(visited.insert(10_000));
/// assert!(!visited.insert(10_000));
/// ```
#[derive(Debug, Default)]
pub struct VisitedHashSet {
    inner: HashSet<VertexId>,
}

impl VisitedHashSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisitorSet for VisitedHashSet {
    fn insert(&mut self, vertex: VertexId) -> bool {
        self.inner.insert(vertex)
    }
}
