//! Weighted adjacency store with an insertion-ordered vertex table
//!
//! Vertices get dense IDs in first-seen order, and those IDs are the row and
//! column indices of every matrix built downstream. Weights live in a dense
//! row-major grid, so the weight function is total over V x V: every pair
//! that was never set reads as 0.

use super::import::EdgeRecord;
use rustc_hash::FxHashMap;

/// Insertion-ordered mapping between vertex names and dense IDs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct VertexTable {
    /// Maps name -> dense ID
    name_to_id: FxHashMap<String, usize>,
    /// Names in first-seen order
    names: Vec<String>,
}

impl VertexTable {
    /// Get or assign the ID for `name`, returning `(id, newly_added)`
    fn intern(&mut self, name: &str) -> (usize, bool) {
        if let Some(&id) = self.name_to_id.get(name) {
            return (id, false);
        }

        let id = self.names.len();
        self.name_to_id.insert(name.to_string(), id);
        self.names.push(name.to_string());
        (id, true)
    }

    fn get(&self, name: &str) -> Option<usize> {
        self.name_to_id.get(name).copied()
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

/// A directed, weighted graph over a fixed, ordered vertex set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStore {
    vertices: VertexTable,
    /// Row-major weights: `weights[source * n + destination]`
    weights: Vec<u64>,
}

impl GraphStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from parsed edge records in two passes.
    ///
    /// Pass 1 registers every source and destination and sets every ordered
    /// pair of known vertices to weight 0. Pass 2 applies the declared
    /// weights; a later record for the same pair overwrites an earlier one.
    pub fn from_records(records: &[EdgeRecord]) -> Self {
        let mut vertices = VertexTable::default();
        for record in records {
            vertices.intern(&record.source);
            vertices.intern(&record.destination);
        }

        let n = vertices.len();
        let mut store = Self {
            vertices,
            weights: vec![0; n * n],
        };

        for record in records {
            // Both endpoints were interned in pass 1.
            if let (Some(src), Some(dst)) = (
                store.vertices.get(&record.source),
                store.vertices.get(&record.destination),
            ) {
                store.weights[src * n + dst] = record.weight;
            }
        }

        store
    }

    /// Register `name` as a vertex if it is new, returning its dense ID.
    ///
    /// A new vertex gets weight 0 to and from every existing vertex.
    pub fn register_vertex(&mut self, name: &str) -> usize {
        let (id, added) = self.vertices.intern(name);
        if added {
            self.grow(self.vertices.len());
        }
        id
    }

    /// Set the weight of the directed edge `source -> destination`,
    /// registering either endpoint if it is new.
    ///
    /// Bulk loads should prefer [`GraphStore::from_records`], which sizes the
    /// grid once instead of re-laying it out for every new vertex.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: u64) {
        let src = self.register_vertex(source);
        let dst = self.register_vertex(destination);
        let n = self.vertex_count();
        self.weights[src * n + dst] = weight;
    }

    /// Re-lay the grid out for `n` vertices, preserving existing weights
    fn grow(&mut self, n: usize) {
        let old = n - 1;
        let mut grid = vec![0; n * n];
        for src in 0..old {
            grid[src * n..src * n + old].copy_from_slice(&self.weights[src * old..(src + 1) * old]);
        }
        self.weights = grid;
    }

    /// Vertex names in first-seen order
    pub fn vertices(&self) -> &[String] {
        &self.vertices.names
    }

    /// Weight of `source -> destination`, or 0 if either name is unknown or
    /// the pair was never set
    pub fn weight(&self, source: &str, destination: &str) -> u64 {
        match (self.vertices.get(source), self.vertices.get(destination)) {
            (Some(src), Some(dst)) => self.weight_at(src, dst),
            _ => 0,
        }
    }

    /// Weight between two dense IDs
    ///
    /// # Panics
    ///
    /// Panics if either ID is not below [`GraphStore::vertex_count`].
    pub fn weight_at(&self, source: usize, destination: usize) -> u64 {
        let n = self.vertex_count();
        assert!(source < n && destination < n, "vertex id out of range");
        self.weights[source * n + destination]
    }

    /// Outgoing weights of a vertex, indexed by destination ID
    pub fn out_weights(&self, source: usize) -> &[u64] {
        let n = self.vertex_count();
        &self.weights[source * n..(source + 1) * n]
    }

    /// Total outgoing weight of a vertex, widened so that any number of
    /// `u64` weights sums without overflow
    pub fn out_weight(&self, source: usize) -> u128 {
        self.out_weights(source).iter().map(|&w| u128::from(w)).sum()
    }

    /// Get the dense ID for a vertex name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vertices.get(name)
    }

    /// Get the vertex name for a dense ID
    pub fn name_of(&self, id: usize) -> Option<&str> {
        self.vertices.names.get(id).map(String::as_str)
    }

    /// Number of known vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of ordered pairs with a non-zero weight
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    /// Find sink vertices (no outgoing weight)
    pub fn sinks(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.out_weights(v).iter().all(|&w| w == 0))
            .collect()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.len() == 0
    }
}
