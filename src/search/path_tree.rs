use crate::{graph::VertexId, search::Path};

#[derive(Debug, Clone, Copy)]
struct TreeEntry {
    vertex: VertexId,
    parent: Option<usize>,
    depth: usize,
}

/// Arena of frontier entries linked to the entry they were pushed from.
///
/// A traversal stores one index into this arena per frontier slot instead of a
/// full copy of the path walked so far, and rebuilds the path by following
/// parent links once the goal is reached. The resulting path is the same one a
/// path-copying frontier would produce.
///
/// Entries are never freed, so the arena grows with the total number of
/// pushes. That is bounded by twice the edge count only for searches that
/// expand each vertex once.
#[derive(Debug, Default)]
pub(crate) struct PathTree {
    entries: Vec<TreeEntry>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parentless entry at depth 0 and returns its index.
    pub fn root(&mut self, vertex: VertexId) -> usize {
        self.entries.push(TreeEntry {
            vertex,
            parent: None,
            depth: 0,
        });
        self.entries.len() - 1
    }

    /// Adds `vertex` as a child of entry `parent` and returns the new index.
    pub fn extend(&mut self, parent: usize, vertex: VertexId) -> usize {
        let depth = self.entries[parent].depth + 1;
        self.entries.push(TreeEntry {
            vertex,
            parent: Some(parent),
            depth,
        });
        self.entries.len() - 1
    }

    pub fn vertex(&self, entry: usize) -> VertexId {
        self.entries[entry].vertex
    }

    /// Edges between the root and `entry`.
    pub fn depth(&self, entry: usize) -> usize {
        self.entries[entry].depth
    }

    /// Entries held, which is every entry ever added.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The path from the root to `entry`, both inclusive.
    pub fn path_to(&self, entry: usize) -> Path {
        let mut vertices = Vec::with_capacity(self.depth(entry) + 1);
        let mut cursor = Some(entry);
        while let Some(index) = cursor {
            let node = &self.entries[index];
            vertices.push(node.vertex);
            cursor = node.parent;
        }
        vertices.reverse();
        Path::new(vertices)
    }
}
