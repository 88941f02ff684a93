//! The undirected conflict graph (§4.3) and its coloring-ready adjacency
//! structure.

pub mod reduction;

pub use reduction::build_conflict_graph;

use crate::types::{CurriculumId, Period, RoomId, SectionId, TeacherId};
use std::collections::{BTreeSet, HashMap};

/// A graph vertex, tagged by the kind of domain entity it represents. The
/// source disambiguates vertices by adding a fixed integer offset per kind
/// to a shared id space; here the kind is carried directly on the value; the
/// coloring algorithms only ever need adjacency and degree, never the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexKind {
    Curriculum(CurriculumId),
    Room(RoomId),
    Teacher(TeacherId),
    Period(Period),
    Section(SectionId),
}

/// An undirected graph over `VertexKind` vertices, stored with dense
/// `usize` indices so the coloring heuristics can use plain arrays/sets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<VertexKind>,
    index_of: HashMap<VertexKind, usize>,
    adjacency: Vec<BTreeSet<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, kind: VertexKind) -> usize {
        if let Some(&idx) = self.index_of.get(&kind) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(kind);
        self.adjacency.push(BTreeSet::new());
        self.index_of.insert(kind, idx);
        idx
    }

    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
    }

    pub fn vertices(&self) -> &[VertexKind] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn index_of(&self, kind: VertexKind) -> Option<usize> {
        self.index_of.get(&kind).copied()
    }

    pub fn kind_of(&self, index: usize) -> VertexKind {
        self.vertices[index]
    }

    pub fn neighbors(&self, index: usize) -> &BTreeSet<usize> {
        &self.adjacency[index]
    }

    pub fn degree(&self, index: usize) -> usize {
        self.adjacency[index].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionId;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = Graph::new();
        let a = g.add_vertex(VertexKind::Section(SectionId(0)));
        let b = g.add_vertex(VertexKind::Section(SectionId(0)));
        assert_eq!(a, b);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn edges_are_symmetric() {
        let mut g = Graph::new();
        let a = g.add_vertex(VertexKind::Section(SectionId(0)));
        let b = g.add_vertex(VertexKind::Section(SectionId(1)));
        g.add_edge(a, b);
        assert!(g.neighbors(a).contains(&b));
        assert!(g.neighbors(b).contains(&a));
    }
}
