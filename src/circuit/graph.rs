//! Circuit multigraph structure.

use std::collections::HashMap;

use super::types::{EdgeKey, NodeLabel, Resistor};
use super::validate::validate_resistance;
use crate::error::Result;
use crate::reduce::{self, Reduction};

/// An undirected multigraph of circuit nodes joined by resistors.
///
/// Any number of resistors may join the same pair of nodes. Every edge
/// instance carries an [`EdgeKey`] so that one specific parallel resistor can
/// be removed without touching its siblings.
#[derive(Debug, Clone)]
pub struct CircuitGraph<N> {
    /// Node labels in insertion order
    nodes: Vec<N>,

    /// Incident edge keys per node. A self-loop is listed twice so that the
    /// list length is the node degree.
    adjacency: HashMap<N, Vec<EdgeKey>>,

    /// All edge instances by key
    edges: HashMap<EdgeKey, Resistor<N>>,

    /// Next key to hand out
    next_key: u64,
}

impl<N: NodeLabel> Default for CircuitGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeLabel> CircuitGraph<N> {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
            edges: HashMap::new(),
            next_key: 0,
        }
    }

    /// Add a node if it is not already present.
    ///
    /// Returns `true` if the node was newly inserted.
    pub fn add_node(&mut self, id: N) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id.clone(), Vec::new());
        self.nodes.push(id);
        true
    }

    /// Add a resistor between `u` and `v`, creating either node if needed.
    ///
    /// Fails with [`crate::OhmicError::InvalidResistance`] unless
    /// `resistance` is finite and strictly positive. Validation happens
    /// before any mutation, so a rejected call leaves the graph untouched.
    ///
    /// `u == v` is accepted. Such a self-loop carries no current between
    /// distinct nodes and is ignored by both reduction rules.
    pub fn add_edge(&mut self, u: N, v: N, resistance: f64) -> Result<EdgeKey> {
        validate_resistance(&u, &v, resistance)?;
        Ok(self.insert_edge(u, v, resistance))
    }

    /// Insert an edge without validating its resistance.
    ///
    /// Reduction passes use this for combined values, which are positive by
    /// construction but may round to 0 or infinity at the extremes of `f64`.
    pub(crate) fn insert_edge(&mut self, u: N, v: N, resistance: f64) -> EdgeKey {
        self.add_node(u.clone());
        self.add_node(v.clone());

        let key = EdgeKey(self.next_key);
        self.next_key += 1;

        if let Some(incident) = self.adjacency.get_mut(&u) {
            incident.push(key);
        }
        if let Some(incident) = self.adjacency.get_mut(&v) {
            incident.push(key);
        }

        self.edges.insert(key, Resistor { key, u, v, resistance });
        key
    }

    /// Add a resistor between `u` and `v`.
    ///
    /// This is the circuit-building name for [`CircuitGraph::add_edge`].
    pub fn add_resistor(&mut self, u: N, v: N, resistance: f64) -> Result<EdgeKey> {
        self.add_edge(u, v, resistance)
    }

    /// Remove the single edge instance `key`, which must join `u` and `v`.
    ///
    /// Returns `None` (and changes nothing) if no such edge exists.
    pub fn remove_edge(&mut self, u: &N, v: &N, key: EdgeKey) -> Option<Resistor<N>> {
        if !self.edges.get(&key)?.connects(u, v) {
            return None;
        }
        let edge = self.edges.remove(&key)?;
        self.detach(&edge.u, key);
        if !edge.is_self_loop() {
            self.detach(&edge.v, key);
        }
        Some(edge)
    }

    /// Remove a node and every edge incident to it.
    ///
    /// Returns the removed edges in insertion order, or `None` if the node
    /// was not present.
    pub fn remove_node(&mut self, id: &N) -> Option<Vec<Resistor<N>>> {
        let mut incident = self.adjacency.remove(id)?;
        incident.sort_unstable();
        incident.dedup();

        let mut removed = Vec::with_capacity(incident.len());
        for key in incident {
            if let Some(edge) = self.edges.remove(&key) {
                if let Some(other) = edge.opposite(id) {
                    if other != id {
                        let other = other.clone();
                        self.detach(&other, key);
                    }
                }
                removed.push(edge);
            }
        }

        self.nodes.retain(|n| n != id);
        Some(removed)
    }

    /// Number of edge endpoints incident to `id` (a self-loop counts twice).
    ///
    /// Absent nodes have degree 0.
    pub fn degree(&self, id: &N) -> usize {
        self.adjacency.get(id).map_or(0, Vec::len)
    }

    /// All edge instances directly joining `u` and `v`, in insertion order.
    pub fn edges_between(&self, u: &N, v: &N) -> Vec<(EdgeKey, f64)> {
        self.incident_edges(u)
            .into_iter()
            .filter(|edge| edge.connects(u, v))
            .map(|edge| (edge.key, edge.resistance))
            .collect()
    }

    /// Distinct edges incident to `id`, in insertion order.
    pub fn incident_edges(&self, id: &N) -> Vec<&Resistor<N>> {
        let Some(keys) = self.adjacency.get(id) else {
            return Vec::new();
        };
        let mut keys = keys.clone();
        keys.sort_unstable();
        keys.dedup();
        keys.iter().filter_map(|key| self.edges.get(key)).collect()
    }

    /// All nodes in insertion order.
    pub fn all_nodes(&self) -> &[N] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn all_edges(&self) -> Vec<&Resistor<N>> {
        let mut edges: Vec<&Resistor<N>> = self.edges.values().collect();
        edges.sort_unstable_by_key(|edge| edge.key);
        edges
    }

    /// Look up a single edge by key.
    pub fn edge(&self, key: EdgeKey) -> Option<&Resistor<N>> {
        self.edges.get(&key)
    }

    /// Check if a node is present.
    pub fn contains_node(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edge instances.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Compute the equivalent resistance between `a` and `b`.
    ///
    /// The graph is reduced in place and is left in its final reduced shape.
    /// Use [`CircuitGraph::equivalent_resistance_of`] to keep it intact.
    pub fn equivalent_resistance(&mut self, a: &N, b: &N) -> Result<Reduction<N>> {
        reduce::equivalent_resistance(self, a, b)
    }

    /// Compute the equivalent resistance between `a` and `b` on a copy.
    pub fn equivalent_resistance_of(&self, a: &N, b: &N) -> Result<Reduction<N>> {
        let mut scratch = self.clone();
        reduce::equivalent_resistance(&mut scratch, a, b)
    }

    /// Drop every occurrence of `key` from the adjacency list of `node`.
    fn detach(&mut self, node: &N, key: EdgeKey) {
        if let Some(incident) = self.adjacency.get_mut(node) {
            incident.retain(|k| *k != key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OhmicError;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = CircuitGraph::new();
        assert!(g.add_node("a"));
        assert!(!g.add_node("a"));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_parallel_edges_are_kept_apart() {
        let mut g = CircuitGraph::new();
        let k1 = g.add_resistor("x", "y", 10.0).unwrap();
        let k2 = g.add_resistor("y", "x", 20.0).unwrap();
        let k3 = g.add_resistor("x", "y", 40.0).unwrap();

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(&"x"), 3);
        assert_eq!(
            g.edges_between(&"x", &"y"),
            vec![(k1, 10.0), (k2, 20.0), (k3, 40.0)]
        );

        let second = g.edge(k2).unwrap();
        assert_eq!((second.u, second.v, second.resistance), ("y", "x", 20.0));

        let removed = g.remove_edge(&"y", &"x", k2).unwrap();
        assert_eq!(removed.resistance, 20.0);
        assert!(g.edge(k2).is_none());
        assert_eq!(g.edges_between(&"y", &"x"), vec![(k1, 10.0), (k3, 40.0)]);
        assert_eq!(g.degree(&"y"), 2);
    }

    #[test]
    fn test_remove_unknown_edge_is_noop() {
        let mut g = CircuitGraph::new();
        let k = g.add_resistor("a", "b", 1.0).unwrap();
        g.add_resistor("b", "c", 1.0).unwrap();

        assert!(g.remove_edge(&"a", &"b", EdgeKey(99)).is_none());
        // Key exists but joins different nodes
        assert!(g.remove_edge(&"b", &"c", k).is_none());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_counts_twice() {
        let mut g = CircuitGraph::new();
        let k = g.add_resistor("a", "a", 5.0).unwrap();
        g.add_resistor("a", "b", 5.0).unwrap();

        assert_eq!(g.degree(&"a"), 3);
        assert_eq!(g.incident_edges(&"a").len(), 2);
        assert_eq!(g.edges_between(&"a", &"a"), vec![(k, 5.0)]);

        g.remove_edge(&"a", &"a", k).unwrap();
        assert_eq!(g.degree(&"a"), 1);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 1.0).unwrap();
        g.add_resistor("b", "c", 2.0).unwrap();
        g.add_resistor("b", "b", 3.0).unwrap();
        g.add_resistor("a", "c", 4.0).unwrap();

        let removed = g.remove_node(&"b").unwrap();
        let values: Vec<f64> = removed.iter().map(|e| e.resistance).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);

        assert_eq!(g.all_nodes(), &["a", "c"]);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(&"a"), 1);
        assert_eq!(g.degree(&"c"), 1);
        assert!(g.remove_node(&"b").is_none());
    }

    #[test]
    fn test_invalid_resistance_leaves_graph_untouched() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 1.0).unwrap();

        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = g.add_resistor("c", "d", bad).unwrap_err();
            assert!(matches!(err, OhmicError::InvalidResistance { .. }));
        }
        assert_eq!(g.all_nodes(), &["a", "b"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_all_edges_in_insertion_order() {
        let mut g = CircuitGraph::new();
        for (i, (u, v)) in [(1, 2), (2, 3), (1, 3), (3, 4)].into_iter().enumerate() {
            g.add_resistor(u, v, (i + 1) as f64).unwrap();
        }
        let keys: Vec<u64> = g.all_edges().iter().map(|e| e.key.0).collect();
        assert_eq!(keys, vec![0, 1, 2, 3]);
        assert_eq!(g.all_nodes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_equivalent_resistance_of_keeps_graph() {
        let mut g = CircuitGraph::new();
        g.add_resistor("a", "b", 10.0).unwrap();
        g.add_resistor("b", "c", 20.0).unwrap();

        let result = g.equivalent_resistance_of(&"a", &"c").unwrap();
        assert_eq!(result.resistance(), Some(30.0));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }
}
