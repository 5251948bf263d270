use crate::graph::VertexId;

/// A set of vertices already expanded by a traversal.
pub trait VisitorSet {
    /// Marks `vertex` visited. Returns `true` if it was not visited before.
    fn insert(&mut self, vertex: VertexId) -> bool;
}
